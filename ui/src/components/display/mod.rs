pub mod submission_notice;
pub mod theme_toggle;

pub use submission_notice::*;
pub use theme_toggle::*;
