use std::rc::Rc;

use log::debug;
use web_sys::Element;
use yew::prelude::*;

use crate::animation::{Transition, VisualState};
use crate::config;
use crate::viewport;

/// Whether a block has been on screen yet. Once set it stays set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    entered: bool,
}

impl RevealLatch {
    pub fn has_entered(&self) -> bool {
        self.entered
    }

    pub fn report(self, intersecting: bool) -> Self {
        Self {
            entered: self.entered || intersecting,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportReport {
    pub intersecting: bool,
}

impl Reducible for RevealLatch {
    type Action = ViewportReport;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.report(action.intersecting);
        if next == *self {
            return self;
        }
        debug!("Block entered the viewport, revealing");
        Rc::new(next)
    }
}

/// Watches `node` until it is first seen on screen and returns whether
/// that has happened. The observer is dropped as soon as the latch fires or
/// the component unmounts.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let latch = use_reducer_eq(RevealLatch::default);
    let entered = latch.has_entered();

    {
        let dispatcher = latch.dispatcher();
        use_effect_with_deps(
            move |(node, entered): &(NodeRef, bool)| {
                let on_report = Callback::from(move |intersecting| {
                    dispatcher.dispatch(ViewportReport { intersecting });
                });
                let subscription = if *entered {
                    None
                } else {
                    Some(match node.cast::<Element>() {
                        Some(element) => viewport::subscribe(&element, config::REVEAL_THRESHOLD, on_report),
                        // Nothing to observe; never leave the block invisible
                        None => viewport::reveal_now(&on_report),
                    })
                };
                move || drop(subscription)
            },
            (node, entered),
        );
    }

    entered
}

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    #[prop_or_default]
    pub children: Children,
    /// Seconds to wait after entering the viewport before animating.
    #[prop_or_default]
    pub delay: f64,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

/// A page section that fades up into place the first time it scrolls into
/// view.
#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let node = use_node_ref();
    let entered = use_reveal(node.clone());
    let transition = Transition::new(VisualState::below(config::REVEAL_OFFSET), VisualState::RESTING)
        .with_delay(props.delay);

    html! {
        <section
            ref={node}
            id={props.id.clone()}
            class={classes!("animated-section", props.class.clone())}
            style={transition.style(entered)}
        >
            { for props.children.iter() }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub delay: f64,
    #[prop_or(VisualState::below(config::REVEAL_OFFSET))]
    pub from: VisualState,
    #[prop_or(config::REVEAL_DURATION)]
    pub duration: f64,
    #[prop_or_default]
    pub class: Classes,
}

/// Plain wrapper with a configurable starting state, for reveals inside a
/// section.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let entered = use_reveal(node.clone());
    let transition = Transition::new(props.from, VisualState::RESTING)
        .with_duration(props.duration)
        .with_delay(props.delay);

    html! {
        <div ref={node} class={props.class.clone()} style={transition.style(entered)}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::{or_reveal, reveal_now, ObserverError};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    fn dispatch(latch: Rc<RevealLatch>, intersecting: bool) -> Rc<RevealLatch> {
        latch.reduce(ViewportReport { intersecting })
    }

    #[test]
    fn starts_hidden() {
        assert!(!RevealLatch::default().has_entered());
    }

    #[test]
    fn exits_before_entering_keep_it_hidden() {
        let latch = dispatch(Rc::new(RevealLatch::default()), false);
        assert!(!latch.has_entered());
    }

    #[test]
    fn first_intersection_latches() {
        let latch = dispatch(Rc::new(RevealLatch::default()), true);
        assert!(latch.has_entered());
    }

    #[test]
    fn latch_never_reverts() {
        let mut latch = Rc::new(RevealLatch::default());
        let mut history = Vec::new();
        for intersecting in [false, true, false, true, false, false] {
            latch = dispatch(latch, intersecting);
            history.push(latch.has_entered());
        }
        assert_eq!(history, vec![false, true, true, true, true, true]);
    }

    #[test]
    fn reports_after_entry_keep_the_same_state() {
        let entered = dispatch(Rc::new(RevealLatch::default()), true);
        let again = dispatch(entered.clone(), false);
        assert!(Rc::ptr_eq(&entered, &again));
    }

    #[test]
    fn hidden_block_never_gets_resting_style() {
        let transition = Transition::new(VisualState::below(config::REVEAL_OFFSET), VisualState::RESTING);
        let latch = dispatch(Rc::new(RevealLatch::default()), false);
        let style = transition.style(latch.has_entered());
        assert!(style.starts_with("opacity: 0;"));
        assert!(style.contains("translate(0px, 50px)"));
    }

    fn latch_fed_by_callback() -> (Callback<bool>, Rc<RefCell<Rc<RevealLatch>>>) {
        let latch = Rc::new(RefCell::new(Rc::new(RevealLatch::default())));
        let state = latch.clone();
        let callback = Callback::from(move |intersecting| {
            let current = state.borrow().clone();
            *state.borrow_mut() = dispatch(current, intersecting);
        });
        (callback, latch)
    }

    #[test]
    fn block_without_a_node_is_revealed() {
        let (callback, latch) = latch_fed_by_callback();
        let _subscription = reveal_now(&callback);
        assert!(latch.borrow().has_entered());
    }

    #[test]
    fn block_is_revealed_when_observer_is_unavailable() {
        let (callback, latch) = latch_fed_by_callback();
        let _subscription = or_reveal(Err(ObserverError::Unsupported), &callback);
        assert!(latch.borrow().has_entered());

        let transition = Transition::new(VisualState::below(config::REVEAL_OFFSET), VisualState::RESTING);
        assert!(transition.style(latch.borrow().has_entered()).starts_with("opacity: 1;"));
    }
}
