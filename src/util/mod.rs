//! Browser seams and small helpers.
//!
//! `gate` and `overrides` are pure and natively tested; the rest wrap
//! browser APIs behind the traits in [`crate::state::resolver`], with
//! silent fallbacks on the native build.

pub mod dark_reader;
pub mod gate;
pub mod media;
pub mod overrides;
pub mod storage;
pub mod styles;
