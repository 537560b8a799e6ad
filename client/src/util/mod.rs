//! Pure helpers shared by components.

pub mod format;
