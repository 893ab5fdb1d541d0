//! Viewport visibility subscriptions.
//!
//! [`subscribe`] watches an element and reports `true` once at least the
//! given fraction of it is on screen. Hosts without `IntersectionObserver`
//! get [`reveal_now`], which reports `true` straight away so content is
//! never left hidden.

use log::warn;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::Callback;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ObserverError {
    #[error("IntersectionObserver is not available")]
    Unsupported,
    #[error("failed to create IntersectionObserver: {0}")]
    Construction(String),
}

pub trait ViewportObserver {
    fn subscribe(
        &self,
        element: &Element,
        threshold: f64,
        on_report: Callback<bool>,
    ) -> Result<Subscription, ObserverError>;
}

/// Keeps an observation alive. Dropping it stops the reports.
#[must_use]
pub enum Subscription {
    Observing {
        observer: IntersectionObserver,
        _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
    },
    Immediate,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Subscription::Observing { observer, .. } = self {
            observer.disconnect();
        }
    }
}

pub struct IntersectionViewport;

impl IntersectionViewport {
    pub fn is_supported() -> bool {
        web_sys::window()
            .map(|window| Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
            .unwrap_or(false)
    }
}

impl ViewportObserver for IntersectionViewport {
    fn subscribe(
        &self,
        element: &Element,
        threshold: f64,
        on_report: Callback<bool>,
    ) -> Result<Subscription, ObserverError> {
        if !Self::is_supported() {
            return Err(ObserverError::Unsupported);
        }

        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        on_report.emit(is_in_view(
                            entry.is_intersecting(),
                            entry.intersection_ratio(),
                            threshold,
                        ));
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|err| ObserverError::Construction(format!("{:?}", err)))?;
        observer.observe(element);

        Ok(Subscription::Observing {
            observer,
            _callback: callback,
        })
    }
}

/// Reports the element as visible without watching it.
pub fn reveal_now(on_report: &Callback<bool>) -> Subscription {
    on_report.emit(true);
    Subscription::Immediate
}

/// Keeps a working subscription, or logs why there isn't one and reveals
/// straight away.
pub fn or_reveal(result: Result<Subscription, ObserverError>, on_report: &Callback<bool>) -> Subscription {
    match result {
        Ok(subscription) => subscription,
        Err(err) => {
            warn!("{}, revealing content immediately", err);
            reveal_now(on_report)
        }
    }
}

/// Observes `element`, falling back to [`reveal_now`] when the browser
/// can't.
pub fn subscribe(element: &Element, threshold: f64, on_report: Callback<bool>) -> Subscription {
    or_reveal(IntersectionViewport.subscribe(element, threshold, on_report.clone()), &on_report)
}

/// An entry counts as in view once it intersects by at least `threshold`.
pub fn is_in_view(intersecting: bool, ratio: f64, threshold: f64) -> bool {
    intersecting && ratio >= threshold
}
