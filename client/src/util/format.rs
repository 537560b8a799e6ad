//! Display formatting for listing cards.
//!
//! Kept free of Leptos types so every helper is unit-testable natively.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use listings::Space;
use time::OffsetDateTime;
use time::macros::format_description;

/// Amenity tags shown on a card before collapsing into "+N more".
pub const AMENITY_PREVIEW: usize = 3;

/// US-dollar amount with thousands separators, e.g. `$1,800.00`.
pub fn format_price(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cents = cents as u64;
    let dollars = (cents / 100).to_string();

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{:02}", cents % 100)
}

/// Leading price with its unit, e.g. `("$15.00", "/hour")`.
pub fn price_parts(space: &Space) -> Option<(String, String)> {
    space
        .primary_price()
        .map(|(unit, price)| (format_price(price), format!("/{}", unit.suffix())))
}

pub fn format_area(sqft: i32) -> String {
    format!("{sqft} sq ft")
}

pub fn format_capacity(people: i32) -> String {
    if people == 1 { "Up to 1 person".to_owned() } else { format!("Up to {people} people") }
}

/// First few amenities plus an overflow label when some are hidden.
pub fn amenity_preview(amenities: &[String]) -> (&[String], Option<String>) {
    if amenities.len() <= AMENITY_PREVIEW {
        return (amenities, None);
    }
    let hidden = amenities.len() - AMENITY_PREVIEW;
    (&amenities[..AMENITY_PREVIEW], Some(format!("+{hidden} more")))
}

/// Short calendar date, e.g. `Mar 5, 2025`.
pub fn format_date(ts: OffsetDateTime) -> String {
    let fmt = format_description!("[month repr:short] [day padding:none], [year]");
    ts.format(fmt).unwrap_or_default()
}

pub fn availability_window(from: Option<OffsetDateTime>, until: Option<OffsetDateTime>) -> Option<String> {
    match (from, until) {
        (Some(from), Some(until)) => Some(format!("{} to {}", format_date(from), format_date(until))),
        (Some(from), None) => Some(format!("From {}", format_date(from))),
        (None, Some(until)) => Some(format!("Until {}", format_date(until))),
        (None, None) => None,
    }
}

pub fn availability_label(is_available: bool) -> &'static str {
    if is_available { "Available" } else { "Unavailable" }
}
