use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct TermsCheckboxProps {
    pub accepted: bool,
    pub on_change: EventHandler<bool>,
    pub on_blur: EventHandler<()>,
}

#[component]
pub fn TermsCheckbox(props: TermsCheckboxProps) -> Element {
    rsx! {
        div {
            class: "terms-row",
            input {
                id: "accepted_terms",
                name: "accepted_terms",
                class: "terms-checkbox",
                r#type: "checkbox",
                checked: props.accepted,
                onchange: move |evt| props.on_change.call(evt.checked()),
                onblur: move |_| props.on_blur.call(())
            }
            label {
                r#for: "accepted_terms",
                class: "terms-label",
                "I accept the terms and conditions"
            }
        }
    }
}
