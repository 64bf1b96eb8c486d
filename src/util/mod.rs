//! Utility helpers shared across behavior modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `dom` isolates the browser calls so behavior modules read as wiring;
//! `debounce` holds timer bookkeeping that is testable without a browser.

pub mod debounce;
#[cfg(feature = "hydrate")]
pub mod dom;
