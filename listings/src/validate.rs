//! Field rules for listing payloads.
//!
//! DESIGN
//! ======
//! A `Validator` walks a payload field by field and collects every failure
//! instead of stopping at the first, so a form can highlight all bad inputs
//! at once. Each failure is a `FieldError` located under a scope (`body` for
//! JSON payloads, `query` for list parameters). The same rules run on the
//! server and in the web form.

use time::OffsetDateTime;

use crate::datetime::parse_timestamp;
use crate::detail::{ErrorBody, FieldError};
use crate::space_type::SpaceType;

/// Character-count bounds for a text field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextRule {
    pub field: &'static str,
    pub min: usize,
    pub max: usize,
}

pub const TITLE: TextRule = TextRule { field: "title", min: 5, max: 200 };
pub const DESCRIPTION: TextRule = TextRule { field: "description", min: 20, max: 2000 };
pub const LOCATION: TextRule = TextRule { field: "location", min: 5, max: 200 };
pub const ADDRESS: TextRule = TextRule { field: "address", min: 10, max: 500 };
pub const CITY: TextRule = TextRule { field: "city", min: 2, max: 100 };
pub const STATE: TextRule = TextRule { field: "state", min: 2, max: 50 };
pub const ZIP_CODE: TextRule = TextRule { field: "zip_code", min: 5, max: 20 };
pub const COUNTRY: TextRule = TextRule { field: "country", min: 0, max: 50 };

pub const PRICE_FIELDS: [&str; 4] = ["price_per_hour", "price_per_day", "price_per_week", "price_per_month"];

pub const MSG_FIELD_REQUIRED: &str = "Field required";
pub const MSG_NO_PRICE: &str = "Provide exactly one price (hourly, daily, weekly, or monthly)";
pub const MSG_MANY_PRICES: &str = "Provide only one price (hourly, daily, weekly, or monthly)";

/// Every failure found in one payload.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{}", summarize(.0))]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    #[must_use]
    pub fn into_body(self) -> ErrorBody {
        ErrorBody::fields(self.0)
    }
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|err| {
            let loc = err.loc.iter().map(ToString::to_string).collect::<Vec<_>>().join(".");
            format!("{loc}: {}", err.msg)
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Collects field errors for one payload scope.
#[derive(Debug)]
pub struct Validator {
    scope: &'static str,
    errors: Vec<FieldError>,
}

impl Validator {
    #[must_use]
    pub fn body() -> Self {
        Self { scope: "body", errors: Vec::new() }
    }

    #[must_use]
    pub fn query() -> Self {
        Self { scope: "query", errors: Vec::new() }
    }

    pub fn push(&mut self, field: &str, msg: impl Into<String>, kind: &str) {
        self.errors.push(FieldError::new(&[self.scope, field], msg, kind));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// # Errors
    ///
    /// Returns the collected errors when any were recorded.
    pub fn check(&self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(ValidationErrors(self.errors.clone())) }
    }

    #[must_use]
    pub fn into_errors(self) -> ValidationErrors {
        ValidationErrors(self.errors)
    }

    /// Trimmed text that must be present and within `rule`.
    pub fn required_text(&mut self, rule: &TextRule, value: Option<&str>) -> Option<String> {
        let Some(value) = value else {
            self.push(rule.field, MSG_FIELD_REQUIRED, "missing");
            return None;
        };
        self.text(rule, value)
    }

    /// Trimmed text checked against `rule` only when present.
    pub fn optional_text(&mut self, rule: &TextRule, value: Option<&str>) -> Option<String> {
        value.and_then(|value| self.text(rule, value))
    }

    fn text(&mut self, rule: &TextRule, value: &str) -> Option<String> {
        let trimmed = value.trim();
        let chars = trimmed.chars().count();
        if chars < rule.min {
            let unit = if rule.min == 1 { "character" } else { "characters" };
            self.push(rule.field, format!("String should have at least {} {unit}", rule.min), "string_too_short");
            return None;
        }
        if chars > rule.max {
            let unit = if rule.max == 1 { "character" } else { "characters" };
            self.push(rule.field, format!("String should have at most {} {unit}", rule.max), "string_too_long");
            return None;
        }
        Some(trimmed.to_owned())
    }

    pub fn required_space_type(&mut self, value: Option<&str>) -> Option<SpaceType> {
        let Some(value) = value else {
            self.push("space_type", MSG_FIELD_REQUIRED, "missing");
            return None;
        };
        self.space_type(value)
    }

    pub fn space_type(&mut self, value: &str) -> Option<SpaceType> {
        match value.parse::<SpaceType>() {
            Ok(kind) => Some(kind),
            Err(err) => {
                self.push("space_type", format!("Value error, {err}"), "value_error");
                None
            }
        }
    }

    /// A price that, when present, must be finite and at least one cent once
    /// rounded to cents.
    pub fn price(&mut self, field: &str, value: Option<f64>) -> Option<f64> {
        let rounded = (value? * 100.0).round() / 100.0;
        if !rounded.is_finite() || rounded <= 0.0 {
            self.push(field, "Input should be greater than 0", "greater_than");
            return None;
        }
        Some(rounded)
    }

    /// A count that, when present, must be above zero.
    pub fn positive_int(&mut self, field: &str, value: Option<i32>) -> Option<i32> {
        let value = value?;
        if value <= 0 {
            self.push(field, "Input should be greater than 0", "greater_than");
            return None;
        }
        Some(value)
    }

    pub fn non_negative(&mut self, field: &str, value: Option<f64>) -> Option<f64> {
        let value = value?;
        if !value.is_finite() || value < 0.0 {
            self.push(field, "Input should be greater than or equal to 0", "greater_than_equal");
            return None;
        }
        Some(value)
    }

    pub fn timestamp(&mut self, field: &str, value: Option<&str>) -> Option<OffsetDateTime> {
        let value = value.filter(|raw| !raw.trim().is_empty())?;
        match parse_timestamp(value) {
            Ok(ts) => Some(ts),
            Err(_) => {
                self.push(field, "Input should be a valid datetime", "datetime_parsing");
                None
            }
        }
    }

    /// Exactly one of the four prices must be set.
    pub fn single_price(&mut self, prices: [Option<f64>; 4]) {
        match prices.iter().filter(|price| price.is_some()).count() {
            0 => self.push(PRICE_FIELDS[0], MSG_NO_PRICE, "value_error"),
            1 => {}
            _ => self.push(PRICE_FIELDS[0], MSG_MANY_PRICES, "value_error"),
        }
    }

    /// The availability window must not end before it starts.
    pub fn window(&mut self, from: Option<OffsetDateTime>, until: Option<OffsetDateTime>) {
        if let (Some(from), Some(until)) = (from, until)
            && from > until
        {
            self.push("available_until", "available_until must not be before available_from", "value_error");
        }
    }
}

/// Trim entries, drop blanks, and remove duplicates keeping the first.
#[must_use]
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !out.iter().any(|existing| existing == tag) {
            out.push(tag.to_owned());
        }
    }
    out
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
