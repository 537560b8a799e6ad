#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;

use listings::{Detail, SpaceCreate, SpaceType, field_errors};

use crate::net::api::ApiError;

pub const MSG_NO_PRICE: &str = "Please provide exactly one price (hourly, daily, weekly, or monthly).";
pub const MSG_MANY_PRICES: &str =
    "Please provide only one price option. Choose either hourly, daily, weekly, or monthly pricing.";
pub const MSG_FIX_FIELDS: &str = "Please fix the errors below and try again.";
pub const MSG_CREATE_FAILED: &str = "Failed to create space. Please try again.";

/// Raw form inputs. Numeric inputs use `0` for "not provided".
#[derive(Clone, Debug, PartialEq)]
pub struct FormValues {
    pub title: String,
    pub description: String,
    pub space_type: SpaceType,
    pub location: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub price_per_hour: f64,
    pub price_per_day: f64,
    pub price_per_week: f64,
    pub price_per_month: f64,
    pub area_sqft: i32,
    pub max_capacity: i32,
    pub amenities: Vec<String>,
    pub is_available: bool,
    /// `datetime-local` input value, empty when unset.
    pub available_from: String,
    pub available_until: String,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            space_type: SpaceType::Garage,
            location: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            country: listings::DEFAULT_COUNTRY.to_owned(),
            price_per_hour: 0.0,
            price_per_day: 0.0,
            price_per_week: 0.0,
            price_per_month: 0.0,
            area_sqft: 0,
            max_capacity: 1,
            amenities: Vec::new(),
            is_available: true,
            available_from: String::new(),
            available_until: String::new(),
        }
    }
}

/// Create-form state: inputs, amenity entry, and errors to display.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    pub values: FormValues,
    pub amenity_input: String,
    pub field_errors: BTreeMap<String, String>,
    pub general_error: Option<String>,
    pub submitting: bool,
}

/// Parse a number input; blank or unparsable input counts as `0`.
pub fn number_input<T: std::str::FromStr + Default>(raw: &str) -> T {
    raw.trim().parse().unwrap_or_default()
}

fn positive_f64(value: f64) -> Option<f64> {
    (value.is_finite() && value > 0.0).then_some(value)
}

fn positive_i32(value: i32) -> Option<i32> {
    (value > 0).then_some(value)
}

fn non_empty(value: &str) -> Option<String> {
    (!value.trim().is_empty()).then(|| value.to_owned())
}

impl FormState {
    pub fn field_error(&self, field: &str) -> Option<String> {
        self.field_errors.get(field).cloned()
    }

    /// Add the typed amenity unless it is blank or already listed.
    pub fn add_amenity(&mut self) {
        let amenity = self.amenity_input.trim();
        if amenity.is_empty() || self.values.amenities.iter().any(|a| a == amenity) {
            return;
        }
        self.values.amenities.push(amenity.to_owned());
        self.amenity_input.clear();
    }

    pub fn remove_amenity(&mut self, amenity: &str) {
        self.values.amenities.retain(|a| a != amenity);
    }

    /// The payload as sent: non-positive numbers and empty dates omitted.
    pub fn payload(&self) -> SpaceCreate {
        let v = &self.values;
        SpaceCreate {
            title: Some(v.title.clone()),
            description: Some(v.description.clone()),
            space_type: Some(v.space_type.as_str().to_owned()),
            location: Some(v.location.clone()),
            address: Some(v.address.clone()),
            city: Some(v.city.clone()),
            state: Some(v.state.clone()),
            zip_code: Some(v.zip_code.clone()),
            country: Some(v.country.clone()),
            price_per_hour: positive_f64(v.price_per_hour),
            price_per_day: positive_f64(v.price_per_day),
            price_per_week: positive_f64(v.price_per_week),
            price_per_month: positive_f64(v.price_per_month),
            area_sqft: positive_i32(v.area_sqft),
            max_capacity: positive_i32(v.max_capacity),
            amenities: Some(v.amenities.clone()),
            is_available: Some(v.is_available),
            available_from: non_empty(&v.available_from),
            available_until: non_empty(&v.available_until),
            photos: Some(Vec::new()),
        }
    }

    /// Validate locally and return the payload to send, or record errors
    /// and return `None`.
    ///
    /// The price rule is checked first and reported as a general message;
    /// the remaining checks are the server's own rules, keyed by field.
    pub fn prepare_submit(&mut self) -> Option<SpaceCreate> {
        self.field_errors.clear();
        self.general_error = None;

        let payload = self.payload();
        let provided = [payload.price_per_hour, payload.price_per_day, payload.price_per_week, payload.price_per_month]
            .iter()
            .filter(|price| price.is_some())
            .count();
        match provided {
            0 => {
                self.general_error = Some(MSG_NO_PRICE.to_owned());
                return None;
            }
            1 => {}
            _ => {
                self.general_error = Some(MSG_MANY_PRICES.to_owned());
                return None;
            }
        }

        if let Err(errors) = payload.validate() {
            self.field_errors = field_errors(&errors.0);
            self.general_error = Some(MSG_FIX_FIELDS.to_owned());
            return None;
        }

        self.submitting = true;
        Some(payload)
    }

    /// Show a failed create: field errors from a `detail` list, a plain
    /// `detail` message as-is, anything else as a generic failure.
    pub fn apply_api_error(&mut self, err: &ApiError) {
        self.submitting = false;
        match err.body().map(|body| &body.detail) {
            Some(Detail::Fields(errors)) if !field_errors(errors).is_empty() => {
                self.field_errors = field_errors(errors);
                self.general_error = Some(MSG_FIX_FIELDS.to_owned());
            }
            Some(Detail::Message(message)) => {
                self.field_errors.clear();
                self.general_error = Some(message.clone());
            }
            _ => {
                self.field_errors.clear();
                self.general_error = Some(MSG_CREATE_FAILED.to_owned());
            }
        }
    }

    /// Back to a blank form after a successful create.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
