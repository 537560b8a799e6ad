//! Kinds of rentable space.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("space_type must be one of: {}", SpaceType::allowed_list())]
pub struct UnknownSpaceType(pub String);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpaceType {
    #[default]
    Garage,
    Backyard,
    Basement,
    Attic,
    Warehouse,
    ParkingSpace,
    Other,
}

impl SpaceType {
    /// Every variant in form-select order.
    pub const ALL: [Self; 7] = [
        Self::Garage,
        Self::Backyard,
        Self::Basement,
        Self::Attic,
        Self::Warehouse,
        Self::ParkingSpace,
        Self::Other,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Garage => "garage",
            Self::Backyard => "backyard",
            Self::Basement => "basement",
            Self::Attic => "attic",
            Self::Warehouse => "warehouse",
            Self::ParkingSpace => "parking_space",
            Self::Other => "other",
        }
    }

    /// Human-facing title, e.g. `Parking Space`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Garage => "Garage",
            Self::Backyard => "Backyard",
            Self::Basement => "Basement",
            Self::Attic => "Attic",
            Self::Warehouse => "Warehouse",
            Self::ParkingSpace => "Parking Space",
            Self::Other => "Other",
        }
    }

    /// Case-insensitive lookup by wire name. Surrounding whitespace is not
    /// stripped, so `" garage"` is unknown.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let lowered = raw.to_ascii_lowercase();
        Self::ALL.into_iter().find(|kind| kind.as_str() == lowered)
    }

    /// Wire names sorted alphabetically and comma-joined, for error messages.
    #[must_use]
    pub fn allowed_list() -> String {
        let mut names = Self::ALL.map(Self::as_str);
        names.sort_unstable();
        names.join(", ")
    }
}

impl fmt::Display for SpaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpaceType {
    type Err = UnknownSpaceType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownSpaceType(s.to_owned()))
    }
}

#[cfg(test)]
#[path = "space_type_test.rs"]
mod tests;
