//! One-shot page decorations.
//!
//! DESIGN
//! ======
//! Everything here runs once at startup, touches the DOM, and keeps no
//! state afterwards: no persistence, no async coordination, no competing
//! update sources. The pure computations live ungated and are tested
//! natively; the DOM walkers exist only on the browser build. Event
//! listeners registered here are leaked deliberately — the page lifetime
//! bounds them.

pub mod badges;
pub mod headings;
pub mod images;
pub mod links;
pub mod scroll;

/// Run every decoration. Called once from [`crate::boot`].
#[cfg(feature = "csr")]
pub fn decorate_page() {
    images::lazy_load_images();
    images::install_lightbox();
    links::harden_external_links();
    scroll::install_back_to_top();
    scroll::install_reading_progress();
    badges::label_code_blocks();
    headings::warn_on_level_jumps();
}
