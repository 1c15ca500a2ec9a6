//! Light/dark theme state
//!
//! Two states, flipped only by an explicit toggle. The dark state is marked by
//! a single `dark` class on the document root; nothing is persisted.

#[cfg(all(feature = "web", target_arch = "wasm32"))]
use crate::services::errors::RegistrationError;
use crate::services::errors::RegistrationResult;

/// Class placed on `<html>` while the dark theme is active
pub const DARK_CLASS: &str = "dark";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// Background class for the page container
    pub fn container_class(&self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-light",
            ThemeMode::Dark => "theme-dark",
        }
    }

    /// Icon shown on the toggle button: the mode a click switches to
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            ThemeMode::Light => "🌙",
            ThemeMode::Dark => "☀️",
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Switch to dark mode",
            ThemeMode::Dark => "Switch to light mode",
        }
    }
}

/// Adds or removes the dark marker on the document root element
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub fn apply_theme(mode: ThemeMode) -> RegistrationResult<()> {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
        .ok_or_else(|| RegistrationError::Dom {
            operation: "apply theme".to_string(),
            reason: "document root element unavailable".to_string(),
        })?;

    let classes = root.class_list();
    let result = if mode.is_dark() {
        classes.add_1(DARK_CLASS)
    } else {
        classes.remove_1(DARK_CLASS)
    };

    result.map_err(|err| RegistrationError::Dom {
        operation: format!("toggle '{}' class", DARK_CLASS),
        reason: format!("{:?}", err),
    })
}

/// Without a browser document there is no root element to mark
#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub fn apply_theme(_mode: ThemeMode) -> RegistrationResult<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
        assert!(!ThemeMode::default().is_dark());
    }

    #[test]
    fn test_toggle_flips_between_two_states() {
        let mode = ThemeMode::Light.toggle();
        assert_eq!(mode, ThemeMode::Dark);
        assert_eq!(mode.toggle(), ThemeMode::Light);
        assert_eq!(mode.toggle().toggle(), ThemeMode::Dark);
    }

    #[test]
    fn test_presentation_follows_mode() {
        assert_eq!(ThemeMode::Light.container_class(), "theme-light");
        assert_eq!(ThemeMode::Dark.container_class(), "theme-dark");
        assert_eq!(ThemeMode::Light.toggle_icon(), "🌙");
        assert_eq!(ThemeMode::Dark.toggle_icon(), "☀️");
    }

    #[test]
    fn test_apply_theme_is_noop_off_browser() {
        assert!(apply_theme(ThemeMode::Dark).is_ok());
        assert!(apply_theme(ThemeMode::Light).is_ok());
    }
}
