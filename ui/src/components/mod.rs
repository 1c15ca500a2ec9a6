//! User Interface Components
//!
//! This module contains the Dioxus components of the registration page:
//!
//! - **forms**: The registration form and its composite fields (country, file, terms)
//! - **display**: Theme toggle and submission notice
//! - **input**: Validated input fields and inline error messages

pub mod display;
pub mod forms;
pub mod input;
