//! Preference resolver: the theme state machine.
//!
//! `ThemeController` owns the four seams the theme logic touches — the
//! persistent preference store, the OS color-scheme signal, the inversion
//! engine, and the override stylesheet — plus the resolver state itself.
//! There are no module-level theme variables; callers hold the controller
//! and drive it through the transition methods below.
//!
//! DESIGN
//! ======
//! Lifecycle: `Uninitialized` → `begin_wait` → `Initializing` → (engine
//! gate ready) → `resolve` → `Resolved { theme, source }`. After that only
//! two events mutate state: a toggle click (always wins, becomes `Stored`)
//! and an OS preference change (honored only while the source is still
//! `System`). A resolver whose gate gave up stays `Initializing` forever
//! and ignores everything, which leaves the page undecorated.

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;

use crate::state::theme::{StoredPreference, Theme, ThemeSource};
use crate::util::overrides;

/// Persistent client-side preference store.
///
/// Both operations are best-effort: implementations must swallow storage
/// failures (quota, privacy mode, disabled storage) and never panic or
/// propagate an error.
pub trait PreferenceStore {
    fn get(&self) -> StoredPreference;
    fn set(&mut self, theme: Theme);
}

/// Live OS/browser color-scheme preference.
pub trait SystemScheme {
    fn current(&self) -> Theme;
}

/// Fixed configuration passed to the inversion engine on every enable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineSettings {
    pub brightness: u32,
    pub contrast: u32,
    pub sepia: u32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self { brightness: 100, contrast: 100, sepia: 0 }
    }
}

/// External color-inversion engine.
///
/// Failures are reported, not thrown: the resolver treats them as
/// non-fatal and logs at most.
pub trait InversionEngine {
    fn enable(&mut self, settings: &EngineSettings) -> Result<(), String>;
    fn disable(&mut self) -> Result<(), String>;
}

/// Destination for the manual accent-color overrides.
///
/// Implementations must be idempotent: repeated `set_css` calls reuse one
/// style element, never create a second.
pub trait OverrideSink {
    fn set_css(&mut self, css: &str);
}

/// Resolver lifecycle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolverState {
    Uninitialized,
    /// Waiting on the engine gate. Permanent if the gate gives up.
    Initializing,
    Resolved { theme: Theme, source: ThemeSource },
}

/// Owns the theme state machine and its collaborators.
pub struct ThemeController<S, Q, E, O> {
    store: S,
    system: Q,
    engine: E,
    overrides: O,
    state: ResolverState,
}

impl<S, Q, E, O> ThemeController<S, Q, E, O>
where
    S: PreferenceStore,
    Q: SystemScheme,
    E: InversionEngine,
    O: OverrideSink,
{
    pub fn new(store: S, system: Q, engine: E, overrides: O) -> Self {
        Self {
            store,
            system,
            engine,
            overrides,
            state: ResolverState::Uninitialized,
        }
    }

    pub fn state(&self) -> ResolverState {
        self.state
    }

    /// The currently resolved theme, if initialization has completed.
    pub fn theme(&self) -> Option<Theme> {
        match self.state {
            ResolverState::Resolved { theme, .. } => Some(theme),
            _ => None,
        }
    }

    /// Transition 1: page is ready, the engine gate wait has started.
    pub fn begin_wait(&mut self) {
        if self.state == ResolverState::Uninitialized {
            self.state = ResolverState::Initializing;
        }
    }

    /// Transition 2: the engine is available; resolve and apply.
    ///
    /// Stored preference wins; otherwise the live system preference is
    /// adopted. Returns the resolved theme so the caller can render the
    /// toggle control. Calling again after resolution is a no-op that
    /// reports the already-resolved theme.
    pub fn resolve(&mut self) -> Theme {
        if let ResolverState::Resolved { theme, .. } = self.state {
            return theme;
        }
        let (theme, source) = match self.store.get().theme() {
            Some(stored) => (stored, ThemeSource::Stored),
            None => (self.system.current(), ThemeSource::System),
        };
        self.apply(theme);
        self.state = ResolverState::Resolved { theme, source };
        theme
    }

    /// Transition 3: user clicked the toggle control.
    ///
    /// Flips the theme, applies it, persists it, and marks the source as
    /// `Stored` so future OS changes are ignored. Returns the new theme,
    /// or `None` if initialization has not completed (no control exists
    /// to click in that case, so this is purely defensive ordering).
    pub fn toggle(&mut self) -> Option<Theme> {
        let ResolverState::Resolved { theme, .. } = self.state else {
            return None;
        };
        let next = theme.flipped();
        self.apply(next);
        self.store.set(next);
        self.state = ResolverState::Resolved { theme: next, source: ThemeSource::Stored };
        Some(next)
    }

    /// Transition 4: the OS color-scheme preference changed.
    ///
    /// Honored only while the resolved theme is still system-sourced; an
    /// explicit user choice shields the page from OS changes permanently.
    /// Returns the adopted theme, or `None` when the event is ignored.
    pub fn system_changed(&mut self, new: Theme) -> Option<Theme> {
        let ResolverState::Resolved { source: ThemeSource::System, .. } = self.state else {
            return None;
        };
        self.apply(new);
        self.state = ResolverState::Resolved { theme: new, source: ThemeSource::System };
        Some(new)
    }

    /// Apply a theme: drive the engine and the override stylesheet.
    ///
    /// Idempotent and total. An engine failure is logged and otherwise
    /// ignored — theming is a non-critical enhancement and must never
    /// block page interaction.
    fn apply(&mut self, theme: Theme) {
        let result = match theme {
            Theme::Dark => self.engine.enable(&EngineSettings::default()),
            Theme::Light => self.engine.disable(),
        };
        if let Err(e) = result {
            leptos::logging::warn!("theme engine apply failed: {e}");
        }
        self.overrides.set_css(overrides::css_for(theme));
    }
}
