//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by screen (`listing` for the grid, `form` for the create
//! dialog) and kept as plain structs behind `RwSignal`s so the transitions
//! are testable without a browser.

pub mod form;
pub mod listing;
