//! Theme domain model.
//!
//! Plain value types shared by the resolver, the browser seams, and the
//! toggle component. Everything here is pure and natively testable.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Binary visual mode currently considered authoritative for the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// The opposite theme.
    pub fn flipped(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Literal value persisted to storage (`"dark"` / `"light"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// Where the currently resolved theme came from.
///
/// Once a theme is `Stored` (the user clicked the toggle at least once, in
/// this or a previous visit), OS preference changes must never override it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeSource {
    Stored,
    System,
}

/// The user's persisted choice, if any.
///
/// `Unset` covers both a first visit and unavailable storage; storage
/// failures are never distinguished from absence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StoredPreference {
    Dark,
    Light,
    #[default]
    Unset,
}

impl StoredPreference {
    /// Parse a raw storage value. Unknown or missing values are `Unset`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            Some("light") => Self::Light,
            _ => Self::Unset,
        }
    }

    /// The explicit theme, if one was stored.
    pub fn theme(self) -> Option<Theme> {
        match self {
            Self::Dark => Some(Theme::Dark),
            Self::Light => Some(Theme::Light),
            Self::Unset => None,
        }
    }
}

/// Glyph shown on the toggle button.
///
/// Signals the action, not the state: a sun while the page is dark
/// ("switch to light"), a moon while it is light ("switch to dark").
pub fn toggle_icon(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "\u{263c}",
        Theme::Light => "\u{263e}",
    }
}

/// Accessible label and tooltip for the toggle button.
///
/// Like [`toggle_icon`], describes the action the click performs.
pub fn toggle_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "Switch to light mode",
        Theme::Light => "Switch to dark mode",
    }
}
