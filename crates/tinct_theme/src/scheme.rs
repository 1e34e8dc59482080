//! Color scheme state: light/dark selection, system detection, and the
//! persisted user preference.

use std::fs;
use std::io;
use std::path::PathBuf;

/// Light or dark rendition of the theme.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Query the host environment's ambient color-scheme preference.
///
/// Honors a `TINCT_COLOR_SCHEME` override (useful for embedders and
/// headless runs), then falls back to desktop hints; unknown environments
/// read as light.
pub fn detect_system_color_scheme() -> ColorScheme {
    detect_from(
        std::env::var("TINCT_COLOR_SCHEME").ok().as_deref(),
        std::env::var("GTK_THEME").ok().as_deref(),
    )
}

fn detect_from(override_var: Option<&str>, gtk_theme: Option<&str>) -> ColorScheme {
    if let Some(scheme) = override_var.and_then(ColorScheme::from_name) {
        return scheme;
    }
    if gtk_theme.is_some_and(|theme| theme.to_ascii_lowercase().contains("dark")) {
        return ColorScheme::Dark;
    }
    ColorScheme::Light
}

/// File name the preference is stored under.
const PREFERENCE_KEY: &str = "theme";

/// Durable store for the user's light/dark preference.
///
/// The preference lives under the fixed key `"theme"` with the values
/// `"dark"`/`"light"`. On cold start, a missing value falls back to
/// [`detect_system_color_scheme`].
#[derive(Clone, Debug)]
pub struct SchemePreference {
    dir: PathBuf,
}

impl SchemePreference {
    /// Store rooted at the platform config directory.
    pub fn in_config_dir() -> Option<Self> {
        dirs::config_dir().map(|dir| Self::at(dir.join("tinct")))
    }

    /// Store rooted at an explicit directory.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self) -> PathBuf {
        self.dir.join(PREFERENCE_KEY)
    }

    /// The persisted scheme, or the system preference when nothing valid is
    /// stored.
    pub fn load(&self) -> ColorScheme {
        match fs::read_to_string(self.path()) {
            Ok(stored) => match ColorScheme::from_name(stored.trim()) {
                Some(scheme) => scheme,
                None => {
                    tracing::warn!(
                        stored = stored.trim(),
                        "unrecognized persisted color scheme, falling back to detection"
                    );
                    detect_system_color_scheme()
                }
            },
            Err(_) => detect_system_color_scheme(),
        }
    }

    /// Persist the scheme.
    pub fn store(&self, scheme: ColorScheme) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        tracing::debug!(scheme = scheme.name(), "persisting color scheme preference");
        fs::write(self.path(), scheme.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tinct-{label}-{}", std::process::id()))
    }

    #[test]
    fn toggle_flips_between_the_two_schemes() {
        assert_eq!(ColorScheme::Light.toggle(), ColorScheme::Dark);
        assert_eq!(ColorScheme::Dark.toggle(), ColorScheme::Light);
    }

    #[test]
    fn names_round_trip() {
        assert_eq!(ColorScheme::from_name("dark"), Some(ColorScheme::Dark));
        assert_eq!(ColorScheme::from_name("light"), Some(ColorScheme::Light));
        assert_eq!(ColorScheme::from_name("auto"), None);
    }

    #[test]
    fn detection_prefers_the_override_then_desktop_hints() {
        assert_eq!(detect_from(Some("dark"), None), ColorScheme::Dark);
        assert_eq!(detect_from(Some("light"), Some("Adwaita-dark")), ColorScheme::Light);
        assert_eq!(detect_from(None, Some("Adwaita-dark")), ColorScheme::Dark);
        assert_eq!(detect_from(None, Some("Adwaita")), ColorScheme::Light);
        assert_eq!(detect_from(None, None), ColorScheme::Light);
    }

    #[test]
    fn stored_preference_round_trips() {
        let store = SchemePreference::at(scratch_dir("scheme-roundtrip"));
        store.store(ColorScheme::Dark).unwrap();
        assert_eq!(store.load(), ColorScheme::Dark);
        store.store(ColorScheme::Light).unwrap();
        assert_eq!(store.load(), ColorScheme::Light);
    }

    #[test]
    fn garbage_in_the_store_falls_back_to_detection() {
        let store = SchemePreference::at(scratch_dir("scheme-garbage"));
        fs::create_dir_all(scratch_dir("scheme-garbage")).unwrap();
        fs::write(scratch_dir("scheme-garbage").join("theme"), "mauve").unwrap();
        // Detection in a bare test environment reads as light.
        assert_eq!(store.load(), detect_system_color_scheme());
    }
}
