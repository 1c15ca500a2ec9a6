pub mod country_selector;
pub mod file_selector;
pub mod registration_form;
pub mod terms_checkbox;

pub use country_selector::*;
pub use file_selector::*;
pub use registration_form::*;
pub use terms_checkbox::*;
