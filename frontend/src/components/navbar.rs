use std::rc::Rc;

use log::debug;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::animation::{Easing, Transition, VisualState};
use crate::components::hamburger::Hamburger;
use crate::config;
use crate::content::{NavItem, BRAND_NAME, NAV_ITEMS};
use crate::hooks::use_mounted;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Toggle,
    LinkActivated,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }

    pub fn apply(self, action: MenuAction) -> Self {
        match (self, action) {
            (MenuState::Closed, MenuAction::Toggle) => MenuState::Open,
            (MenuState::Open, MenuAction::Toggle) => MenuState::Closed,
            (_, MenuAction::LinkActivated) => MenuState::Closed,
        }
    }
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            return self;
        }
        debug!("Menu {:?} -> {:?} on {:?}", *self, next, action);
        Rc::new(next)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    Narrow,
    Wide,
}

impl Layout {
    pub fn from_width(width: f64) -> Self {
        if width >= config::WIDE_BREAKPOINT_PX {
            Layout::Wide
        } else {
            Layout::Narrow
        }
    }
}

/// What the bar shows for a given layout and menu state.
#[derive(Debug, PartialEq, Eq)]
pub struct NavView<'a> {
    pub row: Option<&'a [NavItem]>,
    pub toggle: bool,
    pub panel: Option<&'a [NavItem]>,
}

pub fn nav_view(layout: Layout, menu: MenuState, items: &[NavItem]) -> NavView<'_> {
    match layout {
        Layout::Wide => NavView {
            row: Some(items),
            toggle: false,
            panel: None,
        },
        Layout::Narrow => NavView {
            row: None,
            toggle: true,
            panel: menu.is_open().then_some(items),
        },
    }
}

fn row_link_transition(index: usize) -> Transition {
    Transition::new(VisualState::above(10.0), VisualState::RESTING)
        .with_duration(0.3)
        .with_delay(index as f64 * 0.1 + 0.3)
}

fn panel_link_transition(index: usize) -> Transition {
    Transition::new(VisualState::transparent(), VisualState::RESTING)
        .with_duration(0.3)
        .with_delay(index as f64 * 0.1)
        .with_easing(Easing::Linear)
}

/// Styles for the mobile panel and each of its links, either on the
/// panel's first paint or after its mount frame.
fn panel_styles(links: usize, mounted: bool) -> (String, Vec<String>) {
    let panel = Transition::new(VisualState::above(10.0), VisualState::RESTING).with_duration(0.3);
    let links = (0..links)
        .map(|index| panel_link_transition(index).style(mounted))
        .collect();
    (panel.style(mounted), links)
}

#[derive(Properties, PartialEq)]
pub struct NavPanelProps {
    pub items: &'static [NavItem],
    pub on_link: Callback<MouseEvent>,
}

/// Mobile link list. It is mounted afresh on every open, so its entrance
/// replays each time.
#[function_component(NavPanel)]
pub fn nav_panel(props: &NavPanelProps) -> Html {
    let mounted = use_mounted();
    let (panel_style, link_styles) = panel_styles(props.items.len(), mounted);

    html! {
        <div class="nav-panel" style={panel_style}>
            {
                props.items.iter().zip(link_styles).map(|(item, style)| {
                    html! {
                        <a
                            key={item.label}
                            href={item.href}
                            class="nav-panel-link"
                            style={style}
                            onclick={props.on_link.clone()}
                        >
                            {item.label}
                        </a>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let menu = use_reducer_eq(MenuState::default);
    let (width, _) = use_window_size();
    let mounted = use_mounted();

    let toggle_menu = {
        let menu = menu.dispatcher();
        Callback::from(move |_: MouseEvent| menu.dispatch(MenuAction::Toggle))
    };

    let close_menu = {
        let menu = menu.dispatcher();
        Callback::from(move |_: MouseEvent| menu.dispatch(MenuAction::LinkActivated))
    };

    let entrance = Transition::new(VisualState::above(20.0), VisualState::RESTING)
        .with_duration(0.5)
        .with_easing(Easing::EaseInOut);

    let view = nav_view(Layout::from_width(width), *menu, NAV_ITEMS);

    html! {
        <nav class="top-nav" style={entrance.style(mounted)}>
            <div class="nav-content">
                <a href="#" class="nav-logo">{BRAND_NAME}</a>
                {
                    if let Some(items) = view.row {
                        html! {
                            <div class="nav-row">
                                {
                                    items.iter().enumerate().map(|(index, item)| {
                                        html! {
                                            <a
                                                key={item.label}
                                                href={item.href}
                                                class="nav-link"
                                                style={row_link_transition(index).style(mounted)}
                                                onclick={close_menu.clone()}
                                            >
                                                {item.label}
                                            </a>
                                        }
                                    }).collect::<Html>()
                                }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                {
                    if view.toggle {
                        html! { <Hamburger toggled={menu.is_open()} on_toggle={toggle_menu} /> }
                    } else {
                        html! {}
                    }
                }
            </div>
            {
                if let Some(items) = view.panel {
                    html! { <NavPanel items={items} on_link={close_menu.clone()} /> }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 50;
                        background: rgba(255, 255, 255, 0.8);
                        backdrop-filter: blur(12px);
                        border-bottom: 1px solid #f3f4f6;
                    }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 2rem;
                        height: 4rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-logo {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #1e3a8a;
                        text-decoration: none;
                        transition: transform 0.2s ease;
                    }
                    .nav-logo:hover {
                        transform: scale(1.05);
                    }
                    .nav-row {
                        display: flex;
                        gap: 2rem;
                    }
                    .nav-link {
                        color: #374151;
                        font-weight: 500;
                        text-decoration: none;
                    }
                    .nav-link:hover {
                        color: #3b82f6;
                    }
                    .nav-panel {
                        position: absolute;
                        left: 0;
                        width: 100%;
                        box-sizing: border-box;
                        padding: 1rem 1rem 1rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        background: rgba(255, 255, 255, 0.95);
                        backdrop-filter: blur(4px);
                    }
                    .nav-panel-link {
                        color: #374151;
                        font-size: 1.125rem;
                        font-weight: 500;
                        padding: 0.5rem 0;
                        text-decoration: none;
                    }
                    .nav-panel-link:hover {
                        color: #2563eb;
                    }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn labels(items: Option<&[NavItem]>) -> Vec<&'static str> {
        items.unwrap_or_default().iter().map(|item| item.label).collect()
    }

    #[test]
    fn menu_starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn toggle_on_fresh_bar_opens_the_panel() {
        let menu = MenuState::default().apply(MenuAction::Toggle);
        assert!(menu.is_open());

        let view = nav_view(Layout::Narrow, menu, NAV_ITEMS);
        assert!(view.toggle);
        assert_eq!(labels(view.panel), vec!["Products", "Solutions", "Resources", "Contact"]);
    }

    #[test]
    fn closed_menu_hides_the_panel_but_keeps_the_toggle() {
        let view = nav_view(Layout::Narrow, MenuState::Closed, NAV_ITEMS);
        assert!(view.toggle);
        assert_eq!(view.panel, None);
        assert_eq!(view.row, None);
    }

    #[test]
    fn selecting_a_link_closes_the_menu() {
        let open = MenuState::default().apply(MenuAction::Toggle);
        let resources = NAV_ITEMS.iter().find(|item| item.label == "Resources");
        assert!(resources.is_some());
        assert_eq!(open.apply(MenuAction::LinkActivated), MenuState::Closed);
    }

    #[test]
    fn selecting_a_link_while_closed_stays_closed() {
        assert_eq!(MenuState::Closed.apply(MenuAction::LinkActivated), MenuState::Closed);
    }

    #[test]
    fn repeated_toggles_alternate() {
        let mut menu = MenuState::default();
        let mut seen = Vec::new();
        for _ in 0..4 {
            menu = menu.apply(MenuAction::Toggle);
            seen.push(menu.is_open());
        }
        assert_eq!(seen, vec![true, false, true, false]);
    }

    #[test]
    fn reducer_keeps_identity_when_nothing_changes() {
        let closed = Rc::new(MenuState::Closed);
        let same = closed.clone().reduce(MenuAction::LinkActivated);
        assert!(Rc::ptr_eq(&closed, &same));

        let open = closed.reduce(MenuAction::Toggle);
        assert_eq!(*open, MenuState::Open);
    }

    #[test]
    fn wide_layout_shows_every_entry_in_order_regardless_of_menu() {
        for menu in [MenuState::Closed, MenuState::Open] {
            let view = nav_view(Layout::Wide, menu, NAV_ITEMS);
            assert!(!view.toggle);
            assert_eq!(view.panel, None);
            assert_eq!(labels(view.row), vec!["Products", "Solutions", "Resources", "Contact"]);
        }
    }

    #[test]
    fn layout_breaks_at_large_screens() {
        assert_eq!(Layout::from_width(375.0), Layout::Narrow);
        assert_eq!(Layout::from_width(1023.9), Layout::Narrow);
        assert_eq!(Layout::from_width(1024.0), Layout::Wide);
        assert_eq!(Layout::from_width(1440.0), Layout::Wide);
    }

    #[test]
    fn row_links_stagger_after_the_bar() {
        let delays: Vec<f64> = (0..NAV_ITEMS.len())
            .map(|i| (row_link_transition(i).delay * 10.0).round() / 10.0)
            .collect();
        assert_eq!(delays, vec![0.3, 0.4, 0.5, 0.6]);
    }

    #[test]
    fn panel_opened_after_page_load_is_first_painted_hidden() {
        let view = nav_view(Layout::Narrow, MenuState::Closed.apply(MenuAction::Toggle), NAV_ITEMS);
        let items = view.panel.unwrap_or_default();
        assert_eq!(items.len(), NAV_ITEMS.len());

        // The panel counts its own mount frame, so a fresh open starts from `false`
        let (panel, links) = panel_styles(items.len(), false);
        assert!(panel.starts_with("opacity: 0; transform: translate(0px, -10px)"));
        assert_eq!(links.len(), NAV_ITEMS.len());
        for link in &links {
            assert!(link.starts_with("opacity: 0;"), "link first painted as: {}", link);
        }
    }

    #[test]
    fn panel_links_fade_in_one_after_another() {
        let (panel, links) = panel_styles(NAV_ITEMS.len(), true);
        assert!(panel.starts_with("opacity: 1; transform: translate(0px, 0px)"));
        let expected = ["0s", "0.1s", "0.2s", "0.3s"];
        for (link, delay) in links.iter().zip(expected) {
            assert!(link.starts_with("opacity: 1;"));
            assert!(link.ends_with(&format!("transform 0.3s linear {};", delay)), "{}", link);
        }
    }
}
