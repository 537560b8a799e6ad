//! List query parameters and the paginated list response.

use serde::{Deserialize, Serialize};

use crate::pagination::{DEFAULT_PAGE, DEFAULT_PER_PAGE, MAX_PER_PAGE};
use crate::space::Space;
use crate::space_type::SpaceType;
use crate::validate::{ValidationErrors, Validator};

/// Query string for `GET /spaces`, as sent by clients.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SpaceQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// A validated list query with defaults applied and blank filters dropped.
#[derive(Clone, Debug, PartialEq)]
pub struct ListFilter {
    pub page: u32,
    pub per_page: u32,
    pub space_type: Option<SpaceType>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub is_available: Option<bool>,
    pub search: Option<String>,
}

impl Default for ListFilter {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            space_type: None,
            city: None,
            state: None,
            min_price: None,
            max_price: None,
            is_available: None,
            search: None,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned)
}

impl SpaceQuery {
    /// Apply defaults and bounds.
    ///
    /// # Errors
    ///
    /// Returns field errors located under `query`.
    pub fn validate(&self) -> Result<ListFilter, ValidationErrors> {
        let mut v = Validator::query();

        let page = match self.page {
            None => Some(DEFAULT_PAGE),
            Some(page) if page < 1 => {
                v.push("page", "Input should be greater than or equal to 1", "greater_than_equal");
                None
            }
            Some(page) => match u32::try_from(page) {
                Ok(page) => Some(page),
                Err(_) => {
                    v.push("page", format!("Input should be less than or equal to {}", u32::MAX), "less_than_equal");
                    None
                }
            },
        };
        let per_page = match self.per_page {
            None => Some(DEFAULT_PER_PAGE),
            Some(per_page) if per_page < 1 => {
                v.push("per_page", "Input should be greater than or equal to 1", "greater_than_equal");
                None
            }
            Some(per_page) => match u32::try_from(per_page) {
                Ok(per_page) if per_page <= MAX_PER_PAGE => Some(per_page),
                _ => {
                    v.push(
                        "per_page",
                        format!("Input should be less than or equal to {MAX_PER_PAGE}"),
                        "less_than_equal",
                    );
                    None
                }
            },
        };

        let space_type = non_blank(self.space_type.as_deref()).and_then(|raw| v.space_type(&raw));
        let min_price = v.non_negative("min_price", self.min_price);
        let max_price = v.non_negative("max_price", self.max_price);

        v.check()?;
        let (Some(page), Some(per_page)) = (page, per_page) else {
            return Err(v.into_errors());
        };

        Ok(ListFilter {
            page,
            per_page,
            space_type,
            city: non_blank(self.city.as_deref()),
            state: non_blank(self.state.as_deref()),
            min_price,
            max_price,
            is_available: self.is_available,
            search: non_blank(self.search.as_deref()),
        })
    }

    /// Non-blank parameters as `(name, value)` pairs for a query string.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("per_page", per_page.to_string()));
        }
        let texts = [
            ("space_type", self.space_type.as_deref()),
            ("city", self.city.as_deref()),
            ("state", self.state.as_deref()),
        ];
        for (name, value) in texts {
            if let Some(value) = non_blank(value) {
                pairs.push((name, value));
            }
        }
        if let Some(min) = self.min_price {
            pairs.push(("min_price", min.to_string()));
        }
        if let Some(max) = self.max_price {
            pairs.push(("max_price", max.to_string()));
        }
        if let Some(available) = self.is_available {
            pairs.push(("is_available", available.to_string()));
        }
        if let Some(search) = non_blank(self.search.as_deref()) {
            pairs.push(("search", search));
        }
        pairs
    }
}

/// One page of listings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpaceListResponse {
    pub spaces: Vec<Space>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u32,
}

impl SpaceListResponse {
    #[must_use]
    pub fn new(spaces: Vec<Space>, total: u64, filter: &ListFilter) -> Self {
        Self {
            spaces,
            total,
            page: filter.page,
            per_page: filter.per_page,
            total_pages: crate::pagination::total_pages(total, filter.per_page),
        }
    }
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;
