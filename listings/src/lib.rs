//! Shared listing model for the space rental API.
//!
//! This crate owns the JSON representation used by `server`, `client`, and
//! `cli`: the `Space` record, create/update payloads, list queries, and the
//! `detail` error body. Validation rules live here too so the web form can
//! run exactly the checks the server enforces before a request is sent.

pub mod datetime;
pub mod detail;
pub mod pagination;
pub mod query;
pub mod space;
pub mod space_type;
pub mod validate;

pub use detail::{Detail, ErrorBody, FieldError, LocPart, field_errors};
pub use query::{ListFilter, SpaceListResponse, SpaceQuery};
pub use space::{NewSpace, PriceUnit, Space, SpaceChanges, SpaceCreate, SpaceUpdate};
pub use space_type::{SpaceType, UnknownSpaceType};
pub use validate::ValidationErrors;

/// Country applied when a create payload omits one.
pub const DEFAULT_COUNTRY: &str = "US";
