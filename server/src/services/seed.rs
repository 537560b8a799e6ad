//! Sample listings for local development.
//!
//! Seeding only runs against an empty table so restarts never duplicate
//! rows. Samples go through the same validation as API payloads.

use listings::SpaceCreate;
use sqlx::PgPool;
use tracing::info;

use super::space::{self, SpaceError};

/// Insert the sample listings when the table is empty. Returns how many
/// rows were inserted.
///
/// # Errors
///
/// Returns a database error, or [`SpaceError::Invalid`] if a sample no
/// longer passes validation.
pub async fn seed_sample_spaces(pool: &PgPool) -> Result<usize, SpaceError> {
    let existing = space::count_spaces(pool).await?;
    if existing > 0 {
        info!(existing, "spaces table not empty; skipping sample data");
        return Ok(0);
    }

    let samples = sample_spaces();
    for sample in &samples {
        let new = sample.validate().map_err(SpaceError::Invalid)?;
        space::create_space(pool, &new).await?;
    }
    info!(count = samples.len(), "inserted sample spaces");
    Ok(samples.len())
}

#[allow(clippy::too_many_arguments)]
fn sample(
    title: &str,
    description: &str,
    space_type: &str,
    location: &str,
    address: &str,
    city: &str,
    state: &str,
    zip_code: &str,
) -> SpaceCreate {
    SpaceCreate {
        title: Some(title.to_owned()),
        description: Some(description.to_owned()),
        space_type: Some(space_type.to_owned()),
        location: Some(location.to_owned()),
        address: Some(address.to_owned()),
        city: Some(city.to_owned()),
        state: Some(state.to_owned()),
        zip_code: Some(zip_code.to_owned()),
        country: Some("US".to_owned()),
        is_available: Some(true),
        available_from: Some("2024-01-01".to_owned()),
        available_until: Some("2024-12-31".to_owned()),
        ..SpaceCreate::default()
    }
}

fn tags(items: &[&str]) -> Option<Vec<String>> {
    Some(items.iter().map(|item| (*item).to_owned()).collect())
}

#[must_use]
pub fn sample_spaces() -> Vec<SpaceCreate> {
    vec![
        SpaceCreate {
            price_per_hour: Some(15.0),
            area_sqft: Some(400),
            max_capacity: Some(4),
            amenities: tags(&["Security Camera", "WiFi", "Parking", "Electricity"]),
            ..sample(
                "Spacious 2-Car Garage in Downtown",
                "Perfect for storage or workshop. Clean, dry, and secure garage space with easy access.",
                "garage",
                "Downtown District",
                "123 Main Street",
                "San Francisco",
                "CA",
                "94102",
            )
        },
        SpaceCreate {
            price_per_day: Some(200.0),
            area_sqft: Some(800),
            max_capacity: Some(50),
            amenities: tags(&["Outdoor Seating", "Garden", "Restroom Access", "Parking"]),
            ..sample(
                "Beautiful Backyard for Events",
                "Large, well-maintained backyard perfect for parties, gatherings, or outdoor events.",
                "backyard",
                "Residential Area",
                "456 Oak Avenue",
                "Los Angeles",
                "CA",
                "90210",
            )
        },
        SpaceCreate {
            price_per_month: Some(1800.0),
            area_sqft: Some(300),
            max_capacity: Some(2),
            amenities: tags(&["Climate Control", "Security", "Easy Access"]),
            is_available: Some(false),
            ..sample(
                "Secure Basement Storage",
                "Dry, secure basement space perfect for storage. Climate controlled and easily accessible.",
                "basement",
                "Suburban Area",
                "789 Pine Street",
                "Seattle",
                "WA",
                "98101",
            )
        },
        SpaceCreate {
            price_per_day: Some(400.0),
            area_sqft: Some(2000),
            max_capacity: Some(100),
            amenities: tags(&["Loading Dock", "High Ceilings", "Security", "Parking", "Restrooms"]),
            ..sample(
                "Modern Warehouse Space",
                "Large warehouse space with loading dock access. High ceilings and excellent lighting.",
                "warehouse",
                "Industrial District",
                "321 Industrial Blvd",
                "Chicago",
                "IL",
                "60601",
            )
        },
        SpaceCreate {
            price_per_hour: Some(20.0),
            area_sqft: Some(250),
            max_capacity: Some(8),
            amenities: tags(&["Natural Light", "WiFi", "Heating", "Quiet"]),
            ..sample(
                "Cozy Attic Studio",
                "Charming attic space perfect for creative work, small meetings, or quiet storage.",
                "attic",
                "Historic District",
                "555 Heritage Lane",
                "Boston",
                "MA",
                "02101",
            )
        },
        SpaceCreate {
            price_per_hour: Some(8.0),
            area_sqft: Some(200),
            max_capacity: Some(1),
            amenities: tags(&["Covered", "Security", "24/7 Access", "EV Charging"]),
            ..sample(
                "Premium Parking Space",
                "Covered parking space in prime downtown location. Perfect for daily commuters.",
                "parking_space",
                "Financial District",
                "777 Business Plaza",
                "New York",
                "NY",
                "10001",
            )
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sample_passes_validation() {
        for sample in sample_spaces() {
            let title = sample.title.clone().unwrap_or_default();
            assert!(sample.validate().is_ok(), "sample {title:?} should validate");
        }
    }

    #[test]
    fn samples_cover_every_space_type_but_other() {
        let kinds: Vec<_> = sample_spaces()
            .iter()
            .filter_map(|s| s.validate().ok())
            .map(|new| new.space_type)
            .collect();
        assert_eq!(kinds.len(), 6);
        assert!(!kinds.contains(&listings::SpaceType::Other));
    }
}
