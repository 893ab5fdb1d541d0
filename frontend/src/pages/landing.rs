use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

use crate::animation::{Easing, Transition, VisualState};
use crate::components::reveal::{AnimatedSection, Reveal};
use crate::config;
use crate::content::{
    Feature, BRAND_NAME, CONTACT_ANCHOR, CTA_BUTTON, CTA_HEADING, FEATURES, HERO_BUTTON, HERO_HEADING,
    HERO_TAGLINE, IMPACT_HEADING, IMPACT_ITEMS, IMPACT_SUBHEADING, PRODUCTS_ANCHOR, RESOURCES_ANCHOR,
    SOLUTIONS_ANCHOR, SOLUTIONS_HEADING,
};
use crate::hooks::use_mounted;

/// Seconds between consecutive feature sections starting their reveal.
const FEATURE_STAGGER: f64 = 0.2;

fn feature_delay(index: usize) -> f64 {
    index as f64 * FEATURE_STAGGER
}

/// Element id named by a location hash like `#contact`.
fn anchor_id(hash: &str) -> Option<&str> {
    hash.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Even rows put the text left of the illustration, odd rows flip it.
fn feature_row_class(index: usize) -> &'static str {
    if index % 2 == 0 {
        "feature-row"
    } else {
        "feature-row reverse"
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let mounted = use_mounted();
    let heading = Transition::new(VisualState::below(20.0), VisualState::RESTING)
        .with_duration(1.0)
        .with_easing(Easing::EaseInOut);
    let tagline = Transition::new(VisualState::transparent(), VisualState::RESTING)
        .with_duration(1.5)
        .with_easing(Easing::EaseInOut);

    html! {
        <section class="hero">
            <div class="hero-content">
                <h1 class="hero-title" style={heading.style(mounted)}>
                    {HERO_HEADING}{" "}
                    <span class="hero-brand">{BRAND_NAME}</span>
                </h1>
                <p class="hero-tagline" style={tagline.style(mounted)}>{HERO_TAGLINE}</p>
                <a href={format!("#{}", CONTACT_ANCHOR)} class="hero-cta">{HERO_BUTTON}</a>
            </div>
        </section>
    }
}

fn feature_card(feature: &Feature) -> Html {
    html! {
        <div key={feature.title} class="feature-card">
            <div class="feature-card-icon"></div>
            <h3>{feature.title}</h3>
            <p>{feature.description}</p>
        </div>
    }
}

fn impact_card(item: &Feature) -> Html {
    html! {
        <div key={item.title} class="impact-card">
            <h3>{item.title}</h3>
            <p>{item.description}</p>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // The page is rendered client-side, so the browser's own jump to the
    // URL fragment found nothing on load. Redo it once the sections exist.
    {
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::MOUNT_FRAME_MS, || {
                    let Some(window) = web_sys::window() else { return };
                    let hash = window.location().hash().unwrap_or_default();
                    let Some(id) = anchor_id(&hash) else { return };
                    match window.document().and_then(|document| document.get_element_by_id(id)) {
                        Some(element) => element.scroll_into_view(),
                        None => debug!("No section for #{}", id),
                    }
                });
                move || drop(timeout)
            },
            (),
        );
    }

    html! {
        <div class="landing">
            <Hero />

            <main id={PRODUCTS_ANCHOR} class="features">
                {
                    FEATURES.iter().enumerate().map(|(index, feature)| {
                        html! {
                            <AnimatedSection key={feature.title} delay={feature_delay(index)}>
                                <div class={feature_row_class(index)}>
                                    <div class="feature-text">
                                        <h2>{feature.title}</h2>
                                        <p>{feature.description}</p>
                                    </div>
                                    <div class="feature-visual">
                                        <div class="feature-illustration"></div>
                                    </div>
                                </div>
                            </AnimatedSection>
                        }
                    }).collect::<Html>()
                }
            </main>

            <AnimatedSection id={SOLUTIONS_ANCHOR} delay={FEATURE_STAGGER}>
                <div class="solutions">
                    <h2 class="section-title">{SOLUTIONS_HEADING}</h2>
                    <div class="feature-grid">
                        { FEATURES.iter().map(feature_card).collect::<Html>() }
                    </div>
                </div>
            </AnimatedSection>

            <AnimatedSection id={RESOURCES_ANCHOR}>
                <div class="impact">
                    <div class="impact-inner">
                        <Reveal from={VisualState::left_of(config::REVEAL_OFFSET)} class="impact-heading">
                            <h2>{IMPACT_HEADING}</h2>
                            <p>{IMPACT_SUBHEADING}</p>
                        </Reveal>
                        <div class="impact-grid">
                            { IMPACT_ITEMS.iter().map(impact_card).collect::<Html>() }
                        </div>
                    </div>
                </div>
            </AnimatedSection>

            <AnimatedSection id={CONTACT_ANCHOR}>
                <div class="cta">
                    <h3>{CTA_HEADING}</h3>
                    <button class="cta-button">{CTA_BUTTON}</button>
                </div>
            </AnimatedSection>

            <style>
                {r#"
                    .landing {
                        overflow: hidden;
                    }
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        color: #ffffff;
                        background: linear-gradient(to right, #1e3a8a, #312e81);
                    }
                    .hero-content {
                        padding: 0 1rem;
                    }
                    .hero-title {
                        font-size: 3.75rem;
                        font-weight: 700;
                        margin: 0 0 1.5rem;
                    }
                    .hero-brand {
                        color: #60a5fa;
                        text-decoration: underline;
                    }
                    .hero-tagline {
                        font-size: 1.5rem;
                        margin: 0 0 2rem;
                    }
                    .hero-cta {
                        display: inline-block;
                        background: #60a5fa;
                        color: #ffffff;
                        padding: 0.5rem 1rem;
                        border-radius: 0.5rem;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        text-decoration: none;
                    }
                    .animated-section {
                        padding: 5rem 1rem;
                        background: #ffffff;
                    }
                    .features, .animated-section {
                        scroll-margin-top: 4rem;
                    }
                    .features {
                        max-width: 80rem;
                        margin: 0 auto;
                    }
                    .feature-row {
                        display: flex;
                        align-items: center;
                        gap: 3rem;
                    }
                    .feature-row.reverse {
                        flex-direction: row-reverse;
                    }
                    .feature-text, .feature-visual {
                        flex: 1;
                    }
                    .feature-text h2, .section-title {
                        font-size: 2.25rem;
                        font-weight: 700;
                        color: #1f2937;
                        margin: 0 0 1rem;
                    }
                    .feature-text p {
                        font-size: 1.25rem;
                        line-height: 1.6;
                        color: #4b5563;
                    }
                    .feature-illustration {
                        height: 24rem;
                        width: 100%;
                        border-radius: 1rem;
                        background: linear-gradient(to right, #dbeafe, #e0e7ff);
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                        transition: transform 0.3s ease;
                    }
                    .feature-illustration:hover {
                        transform: scale(1.05);
                    }
                    .solutions {
                        max-width: 80rem;
                        margin: 0 auto;
                    }
                    .section-title {
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .feature-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .feature-card {
                        background: #ffffff;
                        border-radius: 1rem;
                        padding: 1.5rem;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .feature-card:hover {
                        transform: translateY(-10px);
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
                    }
                    .feature-card-icon {
                        height: 2rem;
                        width: 2rem;
                        background: #2563eb;
                        border-radius: 0.5rem;
                        margin-bottom: 1rem;
                    }
                    .feature-card h3, .impact-card h3 {
                        font-size: 1.25rem;
                        font-weight: 600;
                        margin: 0 0 0.5rem;
                    }
                    .feature-card p, .impact-card p {
                        color: #4b5563;
                        line-height: 1.6;
                    }
                    .impact {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 3rem;
                        border-radius: 1rem;
                        background: linear-gradient(to right, #eff6ff, #eef2ff);
                    }
                    .impact-inner {
                        max-width: 56rem;
                        margin: 0 auto;
                    }
                    .impact-heading {
                        margin-bottom: 2rem;
                    }
                    .impact-heading h2 {
                        font-size: 1.875rem;
                        font-weight: 700;
                        color: #1f2937;
                        margin: 0 0 1rem;
                    }
                    .impact-heading p {
                        font-size: 1.125rem;
                        color: #4b5563;
                    }
                    .impact-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 2rem;
                    }
                    .impact-card {
                        background: #ffffff;
                        padding: 1.5rem;
                        border-radius: 0.75rem;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                        transition: transform 0.2s ease;
                    }
                    .impact-card:hover {
                        transform: scale(1.02);
                    }
                    .impact-card h3 {
                        color: #2563eb;
                    }
                    .cta {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 3rem;
                        border-radius: 1rem;
                        text-align: center;
                        color: #ffffff;
                        background: #312e81;
                    }
                    .cta h3 {
                        font-size: 1.875rem;
                        font-weight: 700;
                        margin: 0 0 1.5rem;
                    }
                    .cta-button {
                        background: #ffffff;
                        color: #312e81;
                        border: none;
                        padding: 0.75rem 2rem;
                        border-radius: 9999px;
                        font-weight: 600;
                        cursor: pointer;
                        transition: background 0.3s ease;
                    }
                    .cta-button:hover {
                        background: #eef2ff;
                    }
                    @media (max-width: 1023px) {
                        .feature-row, .feature-row.reverse {
                            flex-direction: column;
                        }
                        .feature-illustration {
                            height: 16rem;
                        }
                        .feature-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                    @media (max-width: 767px) {
                        .hero-title {
                            font-size: 2.25rem;
                        }
                        .hero-tagline {
                            font-size: 1.25rem;
                        }
                        .feature-text h2, .section-title {
                            font-size: 1.875rem;
                        }
                        .feature-grid, .impact-grid {
                            grid-template-columns: 1fr;
                        }
                        .impact, .cta {
                            padding: 2rem;
                        }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn feature_sections_stagger_by_a_fifth_of_a_second() {
        let delays: Vec<f64> = (0..FEATURES.len())
            .map(|i| (feature_delay(i) * 10.0).round() / 10.0)
            .collect();
        assert_eq!(delays, vec![0.0, 0.2, 0.4]);
    }

    #[test]
    fn location_hash_names_a_section() {
        assert_eq!(anchor_id("#contact"), Some(CONTACT_ANCHOR));
        assert_eq!(anchor_id("#resources"), Some(RESOURCES_ANCHOR));
    }

    #[test]
    fn empty_hash_leaves_scroll_alone() {
        assert_eq!(anchor_id(""), None);
        assert_eq!(anchor_id("#"), None);
        assert_eq!(anchor_id("contact"), None);
    }

    #[test]
    fn feature_rows_alternate_sides() {
        let classes: Vec<_> = (0..4).map(feature_row_class).collect();
        assert_eq!(
            classes,
            vec!["feature-row", "feature-row reverse", "feature-row", "feature-row reverse"]
        );
    }

    #[test]
    fn third_feature_reveal_lands_a_second_after_entry() {
        let transition = Transition::new(VisualState::below(config::REVEAL_OFFSET), VisualState::RESTING)
            .with_delay(feature_delay(2));
        assert!((transition.ends_at() - 1.0).abs() < 1e-9);
    }
}
