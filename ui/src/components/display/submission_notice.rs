use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct SubmissionNoticeProps {
    pub message: Option<String>,
}

#[component]
pub fn SubmissionNotice(props: SubmissionNoticeProps) -> Element {
    match props.message {
        Some(message) => rsx! {
            div {
                class: "submission-notice",
                role: "status",
                "✓ {message}"
            }
        },
        None => rsx! {},
    }
}
