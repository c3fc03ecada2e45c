//! Theme mode shared by the shell and persisted preferences.

/// Theme mode for the shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light theme mode.
    #[default]
    Light,
    /// Dark theme mode.
    Dark,
}

impl ThemeMode {
    /// String identifier used in CSS datasets and storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored identifier, accepting the prefixed CSS theme names too.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" | "trainer-light" => Some(Self::Light),
            "dark" | "trainer-dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The opposite mode, used by the shell toggle.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}
