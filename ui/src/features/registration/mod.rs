pub mod controller;
pub mod form_validation;
pub mod rules;
pub mod types;

pub use controller::*;
pub use form_validation::*;
pub use rules::*;
pub use types::*;
