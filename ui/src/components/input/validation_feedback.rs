use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct FieldErrorMessageProps {
    pub error: Option<String>,
}

/// Inline error text under a field; renders nothing while the field is valid
#[component]
pub fn FieldErrorMessage(props: FieldErrorMessageProps) -> Element {
    match props.error {
        Some(message) => rsx! {
            span {
                class: "field-error",
                role: "alert",
                "⚠ {message}"
            }
        },
        None => rsx! {},
    }
}
