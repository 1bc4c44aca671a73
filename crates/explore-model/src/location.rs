//! Place hierarchy selected in the explore view.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ModelError, Result};

/// Name used for the whole world.
pub const WORLD: &str = "World";

/// Separator between a country and one of its divisions.
pub const DIVISION_SEPARATOR: &str = "--";

/// Continental regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    Africa,
    Asia,
    Europe,
    NorthAmerica,
    Oceania,
    SouthAmerica,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Africa,
        Region::Asia,
        Region::Europe,
        Region::NorthAmerica,
        Region::Oceania,
        Region::SouthAmerica,
    ];

    /// Returns the display name, which is also the URL spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Africa => "Africa",
            Region::Asia => "Asia",
            Region::Europe => "Europe",
            Region::NorthAmerica => "North America",
            Region::Oceania => "Oceania",
            Region::SouthAmerica => "South America",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = ModelError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|region| region.as_str() == s)
            .ok_or_else(|| ModelError::unknown("region", s))
    }
}

/// A place at one level of the world / region / country / division hierarchy.
///
/// Country and division names are validated on construction so that every
/// value survives the single-segment URL form unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LocationSelector {
    #[default]
    World,
    Region(Region),
    Country(String),
    Division { country: String, division: String },
}

impl LocationSelector {
    pub fn region(region: Region) -> Self {
        Self::Region(region)
    }

    pub fn country(name: impl Into<String>) -> Result<Self> {
        Ok(Self::Country(validate_country(name.into())?))
    }

    pub fn division(country: impl Into<String>, division: impl Into<String>) -> Result<Self> {
        let country = validate_country(country.into())?;
        let division = division.into();
        if division.is_empty() {
            return Err(ModelError::EmptyLocationName);
        }
        Ok(Self::Division { country, division })
    }

    /// Country this selector lies in, if it is at country level or below.
    pub fn country_name(&self) -> Option<&str> {
        match self {
            Self::Country(country) | Self::Division { country, .. } => Some(country.as_str()),
            Self::World | Self::Region(_) => None,
        }
    }

    /// Human readable name of the most specific level.
    pub fn display_name(&self) -> String {
        match self {
            Self::World => WORLD.to_string(),
            Self::Region(region) => region.as_str().to_string(),
            Self::Country(country) => country.clone(),
            Self::Division { country, division } => format!("{division} ({country})"),
        }
    }
}

fn validate_country(name: String) -> Result<String> {
    if name.is_empty() {
        return Err(ModelError::EmptyLocationName);
    }
    if name == WORLD || name.parse::<Region>().is_ok() {
        return Err(ModelError::ReservedCountryName { name });
    }
    if name.contains(DIVISION_SEPARATOR) || name.ends_with('-') {
        return Err(ModelError::InvalidCountryName { name });
    }
    Ok(name)
}
