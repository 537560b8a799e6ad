//! Timestamp parsing and serde helpers.
//!
//! Timestamps go out as RFC 3339. Incoming values also accept the shapes an
//! HTML `datetime-local` or `date` input produces, read as UTC.

use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid datetime: {0:?}")]
pub struct DateTimeParseError(pub String);

/// Parse an RFC 3339 timestamp, a naive `YYYY-MM-DDTHH:MM[:SS[.fff]]`, or a
/// bare `YYYY-MM-DD`.
///
/// # Errors
///
/// Returns [`DateTimeParseError`] when none of the accepted shapes match.
pub fn parse_timestamp(raw: &str) -> Result<OffsetDateTime, DateTimeParseError> {
    let raw = raw.trim();
    if let Ok(ts) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Ok(ts);
    }

    let with_subseconds = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]");
    let with_seconds = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    let with_minutes = format_description!("[year]-[month]-[day]T[hour]:[minute]");
    let naive_formats: [&[BorrowedFormatItem<'static>]; 3] = [with_subseconds, with_seconds, with_minutes];
    for format in naive_formats {
        if let Ok(naive) = PrimitiveDateTime::parse(raw, format) {
            return Ok(naive.assume_utc());
        }
    }

    let date_only = format_description!("[year]-[month]-[day]");
    if let Ok(date) = Date::parse(raw, date_only) {
        return Ok(date.midnight().assume_utc());
    }

    Err(DateTimeParseError(raw.to_owned()))
}

/// Render a timestamp as RFC 3339.
///
/// # Errors
///
/// Fails only for years outside the RFC 3339 range.
pub fn format_timestamp(ts: OffsetDateTime) -> Result<String, time::error::Format> {
    ts.format(&Rfc3339)
}

/// `#[serde(with = "...")]` module for required timestamps.
pub mod rfc3339 {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::OffsetDateTime;

    /// # Errors
    ///
    /// Propagates formatting failures as serializer errors.
    pub fn serialize<S: Serializer>(ts: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        let text = super::format_timestamp(*ts).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&text)
    }

    /// # Errors
    ///
    /// Fails when the string is not an accepted timestamp shape.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<OffsetDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }

    /// Same as the parent module for `Option<OffsetDateTime>`.
    pub mod option {
        use serde::{Deserialize, Deserializer, Serializer};
        use time::OffsetDateTime;

        /// # Errors
        ///
        /// Propagates formatting failures as serializer errors.
        pub fn serialize<S: Serializer>(ts: &Option<OffsetDateTime>, serializer: S) -> Result<S::Ok, S::Error> {
            match ts {
                Some(ts) => super::serialize(ts, serializer),
                None => serializer.serialize_none(),
            }
        }

        /// # Errors
        ///
        /// Fails when a present string is not an accepted timestamp shape.
        pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<OffsetDateTime>, D::Error> {
            match Option::<String>::deserialize(deserializer)? {
                Some(raw) if !raw.trim().is_empty() => super::super::parse_timestamp(&raw)
                    .map(Some)
                    .map_err(serde::de::Error::custom),
                _ => Ok(None),
            }
        }
    }
}

#[cfg(test)]
#[path = "datetime_test.rs"]
mod tests;
