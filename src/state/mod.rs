//! Theme state modules.
//!
//! DESIGN
//! ======
//! Everything under `state/` is pure Rust with no browser types, so the
//! state machine is tested natively. Browser collaborators plug in through
//! the traits in `resolver` and live under `util/`.

pub mod resolver;
pub mod theme;
