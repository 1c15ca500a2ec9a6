use dioxus::prelude::*;

use crate::components::forms::{CountrySelector, FileSelector, TermsCheckbox};
use crate::components::input::{FieldErrorMessage, InputType, ValidatedInput};
use crate::features::registration::*;
use crate::utils::validation::{field_input_class, field_input_style};

#[derive(Props, PartialEq, Clone)]
pub struct RegistrationFormProps {
    pub state: Signal<FormController>,
    pub dispatch: EventHandler<RegistrationAction>,
    pub on_submit: EventHandler<()>,
}

fn error_of(state: Signal<FormController>, field: FieldName) -> Option<String> {
    state.read().error(field).map(str::to_string)
}

fn input_class(state: Signal<FormController>, field: FieldName) -> String {
    field_input_class(state.read().error(field)).to_string()
}

fn input_style(state: Signal<FormController>, field: FieldName) -> String {
    field_input_style(state.read().error(field)).to_string()
}

#[component]
pub fn RegistrationForm(props: RegistrationFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let on_submit = props.on_submit;
    let values = state.read().values().clone();

    rsx! {
        form {
            class: "registration-form",
            novalidate: true,
            onsubmit: move |evt| {
                evt.prevent_default();
                on_submit.call(());
            },

            h2 {
                class: "form-title",
                "Create your account"
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    r#for: "name",
                    "Name:"
                }
                ValidatedInput {
                    name: FieldName::Name.as_str().to_string(),
                    value: values.name.clone(),
                    placeholder: "Your name".to_string(),
                    input_type: InputType::Text,
                    input_class: input_class(state, FieldName::Name),
                    input_style: input_style(state, FieldName::Name),
                    on_change: move |name: String| dispatch.call(RegistrationAction::SetName(name)),
                    on_blur: move |_| dispatch.call(RegistrationAction::BlurField(FieldName::Name))
                }
                FieldErrorMessage { error: error_of(state, FieldName::Name) }
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    r#for: "email",
                    "Email Address:"
                }
                ValidatedInput {
                    name: FieldName::Email.as_str().to_string(),
                    value: values.email.clone(),
                    placeholder: "your.email@example.com".to_string(),
                    input_type: InputType::Email,
                    input_class: input_class(state, FieldName::Email),
                    input_style: input_style(state, FieldName::Email),
                    on_change: move |email: String| dispatch.call(RegistrationAction::SetEmail(email)),
                    on_blur: move |_| dispatch.call(RegistrationAction::BlurField(FieldName::Email))
                }
                FieldErrorMessage { error: error_of(state, FieldName::Email) }
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    r#for: "birth_date",
                    "Birth Date:"
                }
                ValidatedInput {
                    name: FieldName::BirthDate.as_str().to_string(),
                    value: values.birth_date.clone(),
                    placeholder: "YYYY-MM-DD".to_string(),
                    input_type: InputType::Date,
                    input_class: input_class(state, FieldName::BirthDate),
                    input_style: input_style(state, FieldName::BirthDate),
                    on_change: move |date: String| dispatch.call(RegistrationAction::SetBirthDate(date)),
                    on_blur: move |_| dispatch.call(RegistrationAction::BlurField(FieldName::BirthDate))
                }
                FieldErrorMessage { error: error_of(state, FieldName::BirthDate) }
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    r#for: "password",
                    "Password:"
                }
                ValidatedInput {
                    name: FieldName::Password.as_str().to_string(),
                    value: values.password.clone(),
                    placeholder: "Enter a password".to_string(),
                    input_type: InputType::Password,
                    input_class: input_class(state, FieldName::Password),
                    input_style: input_style(state, FieldName::Password),
                    on_change: move |password: String| dispatch.call(RegistrationAction::SetPassword(password)),
                    on_blur: move |_| dispatch.call(RegistrationAction::BlurField(FieldName::Password))
                }
                FieldErrorMessage { error: error_of(state, FieldName::Password) }
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    r#for: "confirm_password",
                    "Confirm Password:"
                }
                ValidatedInput {
                    name: FieldName::ConfirmPassword.as_str().to_string(),
                    value: values.confirm_password.clone(),
                    placeholder: "Repeat the password".to_string(),
                    input_type: InputType::Password,
                    input_class: input_class(state, FieldName::ConfirmPassword),
                    input_style: input_style(state, FieldName::ConfirmPassword),
                    on_change: move |confirm: String| dispatch.call(RegistrationAction::SetConfirmPassword(confirm)),
                    on_blur: move |_| dispatch.call(RegistrationAction::BlurField(FieldName::ConfirmPassword))
                }
                FieldErrorMessage { error: error_of(state, FieldName::ConfirmPassword) }
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    r#for: "country",
                    "Country:"
                }
                CountrySelector {
                    selected: values.country,
                    on_change: move |country: Country| dispatch.call(RegistrationAction::SetCountry(country))
                }

                // Province is only rendered while its rules are active
                if state.read().is_active(FieldName::Province) {
                    ValidatedInput {
                        name: FieldName::Province.as_str().to_string(),
                        value: values.province.clone(),
                        placeholder: "Province".to_string(),
                        input_type: InputType::Text,
                        input_class: input_class(state, FieldName::Province),
                        input_style: input_style(state, FieldName::Province),
                        on_change: move |province: String| dispatch.call(RegistrationAction::SetProvince(province)),
                        on_blur: move |_| dispatch.call(RegistrationAction::BlurField(FieldName::Province))
                    }
                    FieldErrorMessage { error: error_of(state, FieldName::Province) }
                }
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    r#for: "file",
                    "Upload file name:"
                }
                FileSelector {
                    file_name: values.file_name.clone(),
                    on_select: move |files: Vec<String>| dispatch.call(RegistrationAction::SelectFiles(files))
                }
            }

            div {
                class: "input-section",
                TermsCheckbox {
                    accepted: values.accepted_terms,
                    on_change: move |accepted: bool| dispatch.call(RegistrationAction::SetAcceptedTerms(accepted)),
                    on_blur: move |_| dispatch.call(RegistrationAction::BlurField(FieldName::AcceptedTerms))
                }
                FieldErrorMessage { error: error_of(state, FieldName::AcceptedTerms) }
            }

            div {
                class: "button-section",
                button {
                    class: "submit-button",
                    r#type: "submit",
                    "Submit"
                }
            }
        }
    }
}
