//! This crate contains the registration form: its state model, validation
//! rules, theme toggle and the Dioxus components that render them.

pub mod app;
pub use app::RegistrationService;

pub mod components;
pub mod features;
pub mod services;
pub mod utils;
