//! Copy shown on the landing page.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const BRAND_NAME: &str = "Xenon Bank";

/// Section ids the navigation links point at. External links may use them.
pub const PRODUCTS_ANCHOR: &str = "products";
pub const SOLUTIONS_ANCHOR: &str = "solutions";
pub const RESOURCES_ANCHOR: &str = "resources";
pub const CONTACT_ANCHOR: &str = "contact";

/// Display order matters.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Products", href: "#products" },
    NavItem { label: "Solutions", href: "#solutions" },
    NavItem { label: "Resources", href: "#resources" },
    NavItem { label: "Contact", href: "#contact" },
];

pub const HERO_HEADING: &str = "Unlock Your Business Potential with";
pub const HERO_TAGLINE: &str = "Financial Freedom with Xenon";
pub const HERO_BUTTON: &str = "Start now";

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Business Line of Credit",
        description: "Flexible financing solutions tailored to your business needs",
    },
    Feature {
        title: "Cutting-Edge Features",
        description: "Empower your business with our innovative banking technology",
    },
    Feature {
        title: "Expert Advice & Support",
        description: "24/7 access to financial experts and dedicated support",
    },
];

pub const SOLUTIONS_HEADING: &str = "Empower Your Business with";

pub const IMPACT_HEADING: &str = "Dissipating the Cost of the Company to";
pub const IMPACT_SUBHEADING: &str = "Our Positive Social Impact";

pub const IMPACT_ITEMS: &[Feature] = &[
    Feature {
        title: "Sustainable Financing",
        description: "Eco-friendly business loans with reduced rates for green initiatives",
    },
    Feature {
        title: "Community Investment",
        description: "5% of all profits reinvested in local business development programs",
    },
];

pub const CTA_HEADING: &str = "Ready to Transform Your Business?";
pub const CTA_BUTTON: &str = "Get Started Now";

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nav_items_keep_declared_order() {
        let labels: Vec<_> = NAV_ITEMS.iter().map(|item| item.label).collect();
        assert_eq!(labels, vec!["Products", "Solutions", "Resources", "Contact"]);
    }

    #[test]
    fn every_nav_target_is_a_page_anchor() {
        let anchors = [PRODUCTS_ANCHOR, SOLUTIONS_ANCHOR, RESOURCES_ANCHOR, CONTACT_ANCHOR];
        let hrefs: Vec<_> = NAV_ITEMS.iter().map(|item| item.href.to_string()).collect();
        let expected: Vec<_> = anchors.iter().map(|anchor| format!("#{}", anchor)).collect();
        assert_eq!(hrefs, expected);
    }

    #[test]
    fn feature_titles_are_unique() {
        let mut titles: Vec<_> = FEATURES.iter().map(|f| f.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), FEATURES.len());
    }
}
