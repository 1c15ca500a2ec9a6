use dioxus::prelude::*;

use crate::features::theme::ThemeMode;

#[derive(Props, PartialEq, Clone)]
pub struct ThemeToggleProps {
    pub mode: ThemeMode,
    pub on_toggle: EventHandler<()>,
}

#[component]
pub fn ThemeToggle(props: ThemeToggleProps) -> Element {
    rsx! {
        button {
            class: "theme-toggle",
            r#type: "button",
            title: "{props.mode.toggle_label()}",
            "aria-label": "{props.mode.toggle_label()}",
            "aria-pressed": "{props.mode.is_dark()}",
            onclick: move |_| props.on_toggle.call(()),
            span {
                class: if props.mode.is_dark() { "theme-icon sun" } else { "theme-icon moon" },
                "{props.mode.toggle_icon()}"
            }
        }
    }
}
