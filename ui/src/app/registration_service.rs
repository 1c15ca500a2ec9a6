use dioxus::prelude::*;

use crate::components::display::{SubmissionNotice, ThemeToggle};
use crate::components::forms::RegistrationForm;
use crate::features::registration::{FormController, FormRules, RegistrationAction, SubmitOutcome};
use crate::features::theme::{apply_theme, ThemeMode};
use crate::services::config::RegistrationConfig;
use crate::services::submission::ConsoleSink;
use crate::console_info;

const REGISTRATION_CSS: Asset = asset!("/assets/styling/registration.css");

#[component]
pub fn RegistrationService() -> Element {
    let rules = use_hook(|| {
        FormRules::from_config(&RegistrationConfig::default()).map_err(|err| err.to_string())
    });
    let mut theme = use_signal(ThemeMode::default);

    let toggle_theme = move |_: ()| {
        let next = theme().toggle();
        theme.set(next);
        if let Err(err) = apply_theme(next) {
            err.log("Theme");
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: REGISTRATION_CSS }

        div {
            class: "registration-service-container {theme().container_class()}",

            div {
                class: "registration-content",

                ThemeToggle {
                    mode: theme(),
                    on_toggle: toggle_theme
                }

                {
                    match rules {
                        Ok(rules) => rsx! { RegistrationPanel { rules } },
                        Err(message) => rsx! {
                            div {
                                class: "config-error",
                                "Form configuration error: {message}"
                            }
                        },
                    }
                }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
struct RegistrationPanelProps {
    rules: FormRules,
}

#[component]
fn RegistrationPanel(props: RegistrationPanelProps) -> Element {
    let rules = props.rules;
    let mut state = use_signal(move || FormController::new(rules));
    let mut notice = use_signal(|| None::<String>);

    // Dispatch function for actions - using in-place reduction to preserve Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: RegistrationAction| {
        notice.set(None);
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    let on_submit = EventHandler::new(move |_: ()| {
        let outcome = state.with_mut(|s| s.submit(&ConsoleSink));
        match outcome {
            Ok(SubmitOutcome::Submitted(_)) => {
                notice.set(Some("Registration sent".to_string()));
            }
            Ok(SubmitOutcome::Rejected { errors }) => {
                console_info!("[Registration] Fix {} field(s) before submitting", errors);
            }
            Err(err) => {
                err.log("Registration");
            }
        }
    });

    rsx! {
        SubmissionNotice { message: notice() }

        RegistrationForm {
            state: state,
            dispatch: dispatch,
            on_submit: on_submit
        }
    }
}
