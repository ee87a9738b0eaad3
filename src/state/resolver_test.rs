use super::*;
use std::cell::RefCell;
use std::rc::Rc;

// =============================================================
// Fake seams
//
// Each fake shares its observable side with the test through an
// Rc handle so assertions can run while the controller owns the
// fake itself.
// =============================================================

#[derive(Clone, Default)]
struct FakeStore {
    value: Rc<RefCell<StoredPreference>>,
    writes: Rc<RefCell<Vec<Theme>>>,
    broken: bool,
}

impl FakeStore {
    fn with(value: StoredPreference) -> Self {
        let store = Self::default();
        *store.value.borrow_mut() = value;
        store
    }

    /// Models a storage backend that throws on every access.
    fn broken() -> Self {
        Self { broken: true, ..Self::default() }
    }
}

impl PreferenceStore for FakeStore {
    fn get(&self) -> StoredPreference {
        if self.broken {
            StoredPreference::Unset
        } else {
            *self.value.borrow()
        }
    }

    fn set(&mut self, theme: Theme) {
        if self.broken {
            return;
        }
        *self.value.borrow_mut() = StoredPreference::parse(Some(theme.as_str()));
        self.writes.borrow_mut().push(theme);
    }
}

#[derive(Clone)]
struct FakeSystem {
    current: Rc<RefCell<Theme>>,
}

impl FakeSystem {
    fn preferring(theme: Theme) -> Self {
        Self { current: Rc::new(RefCell::new(theme)) }
    }
}

impl SystemScheme for FakeSystem {
    fn current(&self) -> Theme {
        *self.current.borrow()
    }
}

#[derive(Clone, Default)]
struct FakeEngine {
    calls: Rc<RefCell<Vec<String>>>,
    fail: bool,
}

impl InversionEngine for FakeEngine {
    fn enable(&mut self, settings: &EngineSettings) -> Result<(), String> {
        self.calls.borrow_mut().push(format!(
            "enable b{} c{} s{}",
            settings.brightness, settings.contrast, settings.sepia
        ));
        if self.fail { Err("boom".to_owned()) } else { Ok(()) }
    }

    fn disable(&mut self) -> Result<(), String> {
        self.calls.borrow_mut().push("disable".to_owned());
        if self.fail { Err("boom".to_owned()) } else { Ok(()) }
    }
}

#[derive(Clone, Default)]
struct FakeSink {
    css: Rc<RefCell<String>>,
    sets: Rc<RefCell<u32>>,
}

impl OverrideSink for FakeSink {
    fn set_css(&mut self, css: &str) {
        *self.css.borrow_mut() = css.to_owned();
        *self.sets.borrow_mut() += 1;
    }
}

type TestController = ThemeController<FakeStore, FakeSystem, FakeEngine, FakeSink>;

struct Harness {
    store: FakeStore,
    system: FakeSystem,
    engine: FakeEngine,
    sink: FakeSink,
}

impl Harness {
    fn new(stored: StoredPreference, system: Theme) -> (Self, TestController) {
        let harness = Harness {
            store: FakeStore::with(stored),
            system: FakeSystem::preferring(system),
            engine: FakeEngine::default(),
            sink: FakeSink::default(),
        };
        let controller = ThemeController::new(
            harness.store.clone(),
            harness.system.clone(),
            harness.engine.clone(),
            harness.sink.clone(),
        );
        (harness, controller)
    }
}

// =============================================================
// Initial resolution
// =============================================================

#[test]
fn first_visit_falls_back_to_system_preference() {
    let (h, mut c) = Harness::new(StoredPreference::Unset, Theme::Dark);
    c.begin_wait();

    assert_eq!(c.resolve(), Theme::Dark);
    assert_eq!(
        c.state(),
        ResolverState::Resolved { theme: Theme::Dark, source: ThemeSource::System }
    );
    // Dark apply: engine enabled with the fixed settings, overrides filled.
    assert_eq!(h.engine.calls.borrow().as_slice(), ["enable b100 c100 s0"]);
    let css = h.sink.css.borrow();
    for selector in overrides::OVERRIDE_SELECTORS {
        assert!(css.contains(selector), "missing rule for {selector}");
    }
}

#[test]
fn stored_preference_wins_over_system() {
    let (h, mut c) = Harness::new(StoredPreference::Light, Theme::Dark);
    c.begin_wait();

    assert_eq!(c.resolve(), Theme::Light);
    assert_eq!(
        c.state(),
        ResolverState::Resolved { theme: Theme::Light, source: ThemeSource::Stored }
    );
    assert_eq!(h.engine.calls.borrow().as_slice(), ["disable"]);
    assert!(h.sink.css.borrow().is_empty());
}

#[test]
fn stored_dark_resolves_dark_regardless_of_system() {
    let (_h, mut c) = Harness::new(StoredPreference::Dark, Theme::Light);
    c.begin_wait();
    assert_eq!(c.resolve(), Theme::Dark);
}

#[test]
fn broken_storage_degrades_to_system_preference() {
    let system = FakeSystem::preferring(Theme::Dark);
    let mut c = ThemeController::new(
        FakeStore::broken(),
        system,
        FakeEngine::default(),
        FakeSink::default(),
    );
    c.begin_wait();
    assert_eq!(c.resolve(), Theme::Dark);
}

#[test]
fn resolve_twice_is_a_noop() {
    let (h, mut c) = Harness::new(StoredPreference::Unset, Theme::Light);
    c.begin_wait();
    assert_eq!(c.resolve(), Theme::Light);
    assert_eq!(c.resolve(), Theme::Light);
    // Second resolve must not re-read or re-apply anything.
    assert_eq!(h.engine.calls.borrow().len(), 1);
    assert_eq!(*h.sink.sets.borrow(), 1);
}

// =============================================================
// Gate gave up: no resolution, events ignored
// =============================================================

#[test]
fn unresolved_controller_ignores_toggle_and_system_events() {
    let (h, mut c) = Harness::new(StoredPreference::Unset, Theme::Dark);
    c.begin_wait();

    assert_eq!(c.toggle(), None);
    assert_eq!(c.system_changed(Theme::Dark), None);
    assert_eq!(c.state(), ResolverState::Initializing);
    assert!(h.engine.calls.borrow().is_empty());
    assert_eq!(*h.sink.sets.borrow(), 0);
    assert!(h.store.writes.borrow().is_empty());
}

// =============================================================
// Toggle clicks
// =============================================================

#[test]
fn toggle_flips_applies_and_persists() {
    let (h, mut c) = Harness::new(StoredPreference::Unset, Theme::Light);
    c.begin_wait();
    c.resolve();

    assert_eq!(c.toggle(), Some(Theme::Dark));
    assert_eq!(
        c.state(),
        ResolverState::Resolved { theme: Theme::Dark, source: ThemeSource::Stored }
    );
    assert_eq!(h.store.writes.borrow().as_slice(), [Theme::Dark]);
    assert!(h.sink.css.borrow().contains(overrides::ACCENT));
}

#[test]
fn toggle_round_trip_restores_theme_and_keeps_stored_source() {
    for (stored, system) in [
        (StoredPreference::Unset, Theme::Dark),
        (StoredPreference::Unset, Theme::Light),
        (StoredPreference::Dark, Theme::Light),
        (StoredPreference::Light, Theme::Dark),
    ] {
        let (h, mut c) = Harness::new(stored, system);
        c.begin_wait();
        let initial = c.resolve();

        let after_one = c.toggle();
        assert_eq!(after_one, Some(initial.flipped()));
        assert_eq!(
            c.state(),
            ResolverState::Resolved { theme: initial.flipped(), source: ThemeSource::Stored }
        );

        let after_two = c.toggle();
        assert_eq!(after_two, Some(initial));
        assert_eq!(
            c.state(),
            ResolverState::Resolved { theme: initial, source: ThemeSource::Stored }
        );
        assert_eq!(h.store.writes.borrow().as_slice(), [initial.flipped(), initial]);
    }
}

// =============================================================
// System signal changes
// =============================================================

#[test]
fn manual_choice_shields_from_system_changes() {
    let (h, mut c) = Harness::new(StoredPreference::Light, Theme::Light);
    c.begin_wait();
    c.resolve();
    let applies_before = h.engine.calls.borrow().len();

    assert_eq!(c.system_changed(Theme::Dark), None);
    assert_eq!(
        c.state(),
        ResolverState::Resolved { theme: Theme::Light, source: ThemeSource::Stored }
    );
    assert_eq!(h.engine.calls.borrow().len(), applies_before);
}

#[test]
fn toggle_then_system_change_is_ignored() {
    let (_h, mut c) = Harness::new(StoredPreference::Unset, Theme::Light);
    c.begin_wait();
    c.resolve();
    c.toggle();

    assert_eq!(c.system_changed(Theme::Light), None);
    assert_eq!(c.theme(), Some(Theme::Dark));
}

#[test]
fn system_sourced_theme_follows_os_changes() {
    let (h, mut c) = Harness::new(StoredPreference::Unset, Theme::Dark);
    c.begin_wait();
    c.resolve();

    // The OS flips to light and the change event fires.
    *h.system.current.borrow_mut() = Theme::Light;
    assert_eq!(c.system_changed(Theme::Light), Some(Theme::Light));
    assert_eq!(
        c.state(),
        ResolverState::Resolved { theme: Theme::Light, source: ThemeSource::System }
    );
    // Light apply clears the overrides and disables the engine.
    assert!(h.sink.css.borrow().is_empty());
    assert_eq!(h.engine.calls.borrow().last().map(String::as_str), Some("disable"));
    // The OS change must not create a stored preference.
    assert!(h.store.writes.borrow().is_empty());
}

#[test]
fn system_change_keeps_following_later_changes() {
    let (_h, mut c) = Harness::new(StoredPreference::Unset, Theme::Dark);
    c.begin_wait();
    c.resolve();

    assert_eq!(c.system_changed(Theme::Light), Some(Theme::Light));
    assert_eq!(c.system_changed(Theme::Dark), Some(Theme::Dark));
    assert_eq!(
        c.state(),
        ResolverState::Resolved { theme: Theme::Dark, source: ThemeSource::System }
    );
}

// =============================================================
// Apply semantics
// =============================================================

#[test]
fn repeated_apply_with_same_theme_is_idempotent() {
    let (h, mut c) = Harness::new(StoredPreference::Unset, Theme::Dark);
    c.begin_wait();
    c.resolve();

    // Same value arriving again from the OS is re-applied, and the sink
    // receives identical content; there is only ever one stylesheet.
    assert_eq!(c.system_changed(Theme::Dark), Some(Theme::Dark));
    let css = h.sink.css.borrow().clone();
    assert_eq!(css.as_str(), overrides::css_for(Theme::Dark));
}

#[test]
fn engine_failure_is_nonfatal() {
    let engine = FakeEngine { fail: true, ..FakeEngine::default() };
    let sink = FakeSink::default();
    let mut c = ThemeController::new(
        FakeStore::with(StoredPreference::Dark),
        FakeSystem::preferring(Theme::Light),
        engine.clone(),
        sink.clone(),
    );
    c.begin_wait();

    // Resolution still completes and the overrides are still written.
    assert_eq!(c.resolve(), Theme::Dark);
    assert_eq!(c.theme(), Some(Theme::Dark));
    assert!(!sink.css.borrow().is_empty());

    // Interaction keeps working after the failure.
    assert_eq!(c.toggle(), Some(Theme::Light));
}
