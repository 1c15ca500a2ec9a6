pub mod registration;
pub mod theme;
