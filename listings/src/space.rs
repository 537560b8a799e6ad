//! The `Space` record and its create/update payloads.

use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;

use crate::space_type::SpaceType;
use crate::validate::{self, ValidationErrors, Validator, normalize_tags};

// =============================================================================
// RECORD
// =============================================================================

/// A listing as returned by the API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Space {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub space_type: SpaceType,
    pub location: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub price_per_hour: Option<f64>,
    pub price_per_day: Option<f64>,
    pub price_per_week: Option<f64>,
    pub price_per_month: Option<f64>,
    pub area_sqft: Option<i32>,
    pub max_capacity: Option<i32>,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub is_available: bool,
    #[serde(default, with = "crate::datetime::rfc3339::option")]
    pub available_from: Option<OffsetDateTime>,
    #[serde(default, with = "crate::datetime::rfc3339::option")]
    pub available_until: Option<OffsetDateTime>,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(with = "crate::datetime::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(default, with = "crate::datetime::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

/// Billing period of a price.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PriceUnit {
    Hour,
    Day,
    Week,
    Month,
}

impl PriceUnit {
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

impl Space {
    /// Set prices, shortest period first.
    #[must_use]
    pub fn prices(&self) -> Vec<(PriceUnit, f64)> {
        [
            (PriceUnit::Hour, self.price_per_hour),
            (PriceUnit::Day, self.price_per_day),
            (PriceUnit::Week, self.price_per_week),
            (PriceUnit::Month, self.price_per_month),
        ]
        .into_iter()
        .filter_map(|(unit, price)| price.map(|price| (unit, price)))
        .collect()
    }

    /// The price a listing card leads with.
    #[must_use]
    pub fn primary_price(&self) -> Option<(PriceUnit, f64)> {
        self.prices().into_iter().next()
    }

    /// Re-check the cross-field rules after an update has been merged in.
    ///
    /// # Errors
    ///
    /// Returns field errors when the merged record breaks the pricing or
    /// availability-window rules.
    pub fn check_invariants(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::body();
        v.single_price([self.price_per_hour, self.price_per_day, self.price_per_week, self.price_per_month]);
        v.window(self.available_from, self.available_until);
        v.check()
    }
}

// =============================================================================
// CREATE
// =============================================================================

/// Create payload as it arrives on the wire.
///
/// Every field is optional here so that a missing field is reported as a
/// field error by [`SpaceCreate::validate`] rather than a parse failure.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SpaceCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_hour: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_day: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_week: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_month: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_sqft: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_capacity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_until: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<String>>,
}

/// A create payload that passed validation.
#[derive(Clone, Debug, PartialEq)]
pub struct NewSpace {
    pub title: String,
    pub description: String,
    pub space_type: SpaceType,
    pub location: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub price_per_hour: Option<f64>,
    pub price_per_day: Option<f64>,
    pub price_per_week: Option<f64>,
    pub price_per_month: Option<f64>,
    pub area_sqft: Option<i32>,
    pub max_capacity: Option<i32>,
    pub amenities: Vec<String>,
    pub is_available: bool,
    pub available_from: Option<OffsetDateTime>,
    pub available_until: Option<OffsetDateTime>,
    pub photos: Vec<String>,
}

impl SpaceCreate {
    /// Check every field and produce a typed [`NewSpace`].
    ///
    /// # Errors
    ///
    /// Returns all field errors found, located under `body`.
    pub fn validate(&self) -> Result<NewSpace, ValidationErrors> {
        let mut v = Validator::body();

        let title = v.required_text(&validate::TITLE, self.title.as_deref());
        let description = v.required_text(&validate::DESCRIPTION, self.description.as_deref());
        let space_type = v.required_space_type(self.space_type.as_deref());
        let location = v.required_text(&validate::LOCATION, self.location.as_deref());
        let address = v.required_text(&validate::ADDRESS, self.address.as_deref());
        let city = v.required_text(&validate::CITY, self.city.as_deref());
        let state = v.required_text(&validate::STATE, self.state.as_deref());
        let zip_code = v.required_text(&validate::ZIP_CODE, self.zip_code.as_deref());
        let country = v
            .optional_text(&validate::COUNTRY, self.country.as_deref())
            .filter(|country| !country.is_empty())
            .unwrap_or_else(|| crate::DEFAULT_COUNTRY.to_owned());

        let raw_prices = [self.price_per_hour, self.price_per_day, self.price_per_week, self.price_per_month];
        let price_per_hour = v.price("price_per_hour", self.price_per_hour);
        let price_per_day = v.price("price_per_day", self.price_per_day);
        let price_per_week = v.price("price_per_week", self.price_per_week);
        let price_per_month = v.price("price_per_month", self.price_per_month);
        v.single_price(raw_prices);

        let area_sqft = v.positive_int("area_sqft", self.area_sqft);
        let max_capacity = v.positive_int("max_capacity", self.max_capacity);

        let available_from = v.timestamp("available_from", self.available_from.as_deref());
        let available_until = v.timestamp("available_until", self.available_until.as_deref());
        v.window(available_from, available_until);

        let (
            Some(title),
            Some(description),
            Some(space_type),
            Some(location),
            Some(address),
            Some(city),
            Some(state),
            Some(zip_code),
        ) = (title, description, space_type, location, address, city, state, zip_code)
        else {
            return Err(v.into_errors());
        };
        v.check()?;

        Ok(NewSpace {
            title,
            description,
            space_type,
            location,
            address,
            city,
            state,
            zip_code,
            country,
            price_per_hour,
            price_per_day,
            price_per_week,
            price_per_month,
            area_sqft,
            max_capacity,
            amenities: normalize_tags(self.amenities.as_deref().unwrap_or_default()),
            is_available: self.is_available.unwrap_or(true),
            available_from,
            available_until,
            photos: normalize_tags(self.photos.as_deref().unwrap_or_default()),
        })
    }
}

// =============================================================================
// UPDATE
// =============================================================================

/// Distinguish an absent field (`None`) from an explicit `null` (`Some(None)`).
fn explicit_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Partial update payload. Absent fields are left unchanged; nullable
/// fields may be cleared with an explicit `null`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SpaceUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "explicit_null", skip_serializing_if = "Option::is_none")]
    pub price_per_hour: Option<Option<f64>>,
    #[serde(default, deserialize_with = "explicit_null", skip_serializing_if = "Option::is_none")]
    pub price_per_day: Option<Option<f64>>,
    #[serde(default, deserialize_with = "explicit_null", skip_serializing_if = "Option::is_none")]
    pub price_per_week: Option<Option<f64>>,
    #[serde(default, deserialize_with = "explicit_null", skip_serializing_if = "Option::is_none")]
    pub price_per_month: Option<Option<f64>>,
    #[serde(default, deserialize_with = "explicit_null", skip_serializing_if = "Option::is_none")]
    pub area_sqft: Option<Option<i32>>,
    #[serde(default, deserialize_with = "explicit_null", skip_serializing_if = "Option::is_none")]
    pub max_capacity: Option<Option<i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
    #[serde(default, deserialize_with = "explicit_null", skip_serializing_if = "Option::is_none")]
    pub available_from: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit_null", skip_serializing_if = "Option::is_none")]
    pub available_until: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<String>>,
}

/// A validated update, ready to merge into a stored [`Space`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpaceChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub space_type: Option<SpaceType>,
    pub location: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub price_per_hour: Option<Option<f64>>,
    pub price_per_day: Option<Option<f64>>,
    pub price_per_week: Option<Option<f64>>,
    pub price_per_month: Option<Option<f64>>,
    pub area_sqft: Option<Option<i32>>,
    pub max_capacity: Option<Option<i32>>,
    pub amenities: Option<Vec<String>>,
    pub is_available: Option<bool>,
    pub available_from: Option<Option<OffsetDateTime>>,
    pub available_until: Option<Option<OffsetDateTime>>,
    pub photos: Option<Vec<String>>,
}

impl SpaceUpdate {
    /// Check the fields that are present.
    ///
    /// # Errors
    ///
    /// Returns all field errors found, located under `body`.
    pub fn validate(&self) -> Result<SpaceChanges, ValidationErrors> {
        let mut v = Validator::body();

        let changes = SpaceChanges {
            title: v.optional_text(&validate::TITLE, self.title.as_deref()),
            description: v.optional_text(&validate::DESCRIPTION, self.description.as_deref()),
            space_type: self.space_type.as_deref().and_then(|raw| v.space_type(raw)),
            location: v.optional_text(&validate::LOCATION, self.location.as_deref()),
            address: v.optional_text(&validate::ADDRESS, self.address.as_deref()),
            city: v.optional_text(&validate::CITY, self.city.as_deref()),
            state: v.optional_text(&validate::STATE, self.state.as_deref()),
            zip_code: v.optional_text(&validate::ZIP_CODE, self.zip_code.as_deref()),
            country: v.optional_text(&validate::COUNTRY, self.country.as_deref()),
            price_per_hour: self.price_per_hour.map(|price| v.price("price_per_hour", price)),
            price_per_day: self.price_per_day.map(|price| v.price("price_per_day", price)),
            price_per_week: self.price_per_week.map(|price| v.price("price_per_week", price)),
            price_per_month: self.price_per_month.map(|price| v.price("price_per_month", price)),
            area_sqft: self.area_sqft.map(|area| v.positive_int("area_sqft", area)),
            max_capacity: self.max_capacity.map(|cap| v.positive_int("max_capacity", cap)),
            amenities: self.amenities.as_deref().map(normalize_tags),
            is_available: self.is_available,
            available_from: self
                .available_from
                .as_ref()
                .map(|raw| v.timestamp("available_from", raw.as_deref())),
            available_until: self
                .available_until
                .as_ref()
                .map(|raw| v.timestamp("available_until", raw.as_deref())),
            photos: self.photos.as_deref().map(normalize_tags),
        };

        v.check()?;
        Ok(changes)
    }
}

impl SpaceChanges {
    /// Merge into `space`. Does not touch `updated_at`.
    pub fn apply_to(&self, space: &mut Space) {
        fn set<T: Clone>(target: &mut T, value: Option<&T>) {
            if let Some(value) = value {
                *target = value.clone();
            }
        }

        set(&mut space.title, self.title.as_ref());
        set(&mut space.description, self.description.as_ref());
        set(&mut space.space_type, self.space_type.as_ref());
        set(&mut space.location, self.location.as_ref());
        set(&mut space.address, self.address.as_ref());
        set(&mut space.city, self.city.as_ref());
        set(&mut space.state, self.state.as_ref());
        set(&mut space.zip_code, self.zip_code.as_ref());
        set(&mut space.country, self.country.as_ref());
        set(&mut space.price_per_hour, self.price_per_hour.as_ref());
        set(&mut space.price_per_day, self.price_per_day.as_ref());
        set(&mut space.price_per_week, self.price_per_week.as_ref());
        set(&mut space.price_per_month, self.price_per_month.as_ref());
        set(&mut space.area_sqft, self.area_sqft.as_ref());
        set(&mut space.max_capacity, self.max_capacity.as_ref());
        set(&mut space.amenities, self.amenities.as_ref());
        set(&mut space.is_available, self.is_available.as_ref());
        set(&mut space.available_from, self.available_from.as_ref());
        set(&mut space.available_until, self.available_until.as_ref());
        set(&mut space.photos, self.photos.as_ref());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
#[path = "space_test.rs"]
mod tests;
