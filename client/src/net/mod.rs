//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the REST endpoints; request and response types come from the
//! shared `listings` crate so the wire schema lives in one place.

pub mod api;
