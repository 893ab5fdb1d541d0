use yew::prelude::*;

const OPEN_COLOR: &str = "#3B82F6";
const CLOSED_COLOR: &str = "#1E3A8A";

#[derive(Properties, PartialEq)]
pub struct HamburgerProps {
    pub toggled: bool,
    pub on_toggle: Callback<MouseEvent>,
}

pub fn bar_color(toggled: bool) -> &'static str {
    if toggled {
        OPEN_COLOR
    } else {
        CLOSED_COLOR
    }
}

/// Three-bar menu button that folds into a cross while `toggled`.
#[function_component(Hamburger)]
pub fn hamburger(props: &HamburgerProps) -> Html {
    let HamburgerProps { toggled, on_toggle } = props;
    let bar_style = format!("background: {};", bar_color(*toggled));
    let label = if *toggled { "Close menu" } else { "Open menu" };

    html! {
        <>
        <button
            class={classes!("burger-menu", (*toggled).then(|| "open"))}
            onclick={on_toggle.clone()}
            aria-label={label}
            aria-expanded={toggled.to_string()}
        >
            <span style={bar_style.clone()}></span>
            <span style={bar_style.clone()}></span>
            <span style={bar_style}></span>
        </button>
        <style>
            {r#"
                .burger-menu {
                    position: relative;
                    width: 40px;
                    height: 40px;
                    padding: 0;
                    border: none;
                    background: transparent;
                    cursor: pointer;
                    z-index: 50;
                }
                .burger-menu span {
                    position: absolute;
                    left: 8px;
                    width: 24px;
                    height: 2px;
                    border-radius: 2px;
                    transition: transform 0.3s ease, opacity 0.2s ease, background 0.3s ease;
                }
                .burger-menu span:nth-child(1) { top: 12px; }
                .burger-menu span:nth-child(2) { top: 19px; }
                .burger-menu span:nth-child(3) { top: 26px; }
                .burger-menu.open span:nth-child(1) {
                    transform: translateY(7px) rotate(45deg);
                }
                .burger-menu.open span:nth-child(2) {
                    opacity: 0;
                }
                .burger-menu.open span:nth-child(3) {
                    transform: translateY(-7px) rotate(-45deg);
                }
            "#}
        </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colour_follows_toggle_state() {
        assert_eq!(bar_color(true), "#3B82F6");
        assert_eq!(bar_color(false), "#1E3A8A");
    }
}
