//! Company rows and their display shape
//!
//! The gateway returns each company with its industry and location embedded
//! as nested objects. The API flattens those into plain display strings.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Embedded relation as returned by the gateway.
///
/// Only a JSON object that decodes as `T` becomes a `Row`. Arrays from a
/// to-many relationship, bare scalars and objects of the wrong shape land in
/// `Unexpected`.
#[derive(Debug, Clone)]
pub enum Embedded<T> {
    Row(T),
    Unexpected,
}

impl<T> Embedded<T> {
    pub fn row(&self) -> Option<&T> {
        match self {
            Self::Row(row) => Some(row),
            Self::Unexpected => None,
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Embedded<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if !value.is_object() {
            return Ok(Self::Unexpected);
        }
        Ok(match serde_json::from_value(value) {
            Ok(row) => Self::Row(row),
            Err(_) => Self::Unexpected,
        })
    }
}

/// `industry(name)` embed
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmbeddedIndustry {
    #[serde(default)]
    pub name: String,
}

/// `location(city, state, country)` embed
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmbeddedLocation {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: String,
}

impl EmbeddedLocation {
    /// No city, state or country at all, as with an empty `{}` embed
    pub fn is_empty(&self) -> bool {
        self.city.is_empty()
            && self.country.is_empty()
            && self.state.as_deref().map_or(true, str::is_empty)
    }
}

/// Raw `company` row with embedded relations
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub products: Option<String>,
    #[serde(default)]
    pub founding_year: Option<i64>,
    #[serde(default)]
    pub total_funding: Option<i64>,
    #[serde(default)]
    pub arr: Option<i64>,
    #[serde(default)]
    pub valuation: Option<i64>,
    #[serde(default)]
    pub industry: Option<Embedded<EmbeddedIndustry>>,
    #[serde(default)]
    pub location: Option<Embedded<EmbeddedLocation>>,
}

/// Company as served by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRead {
    pub id: i64,
    pub name: String,
    /// Industry name, empty when the company has none
    pub industry: String,
    /// "City, Country" or "City, State, Country"
    pub location: String,
    pub products: String,
    pub founding_year: Option<i64>,
    /// USD
    pub total_funding: Option<i64>,
    /// Annual recurring revenue, USD
    pub arr: Option<i64>,
    /// USD
    pub valuation: Option<i64>,
}

impl From<CompanyRecord> for CompanyRead {
    fn from(raw: CompanyRecord) -> Self {
        let industry = raw
            .industry
            .as_ref()
            .and_then(Embedded::row)
            .map(|industry| industry.name.clone())
            .unwrap_or_default();

        let location = raw
            .location
            .as_ref()
            .and_then(Embedded::row)
            .filter(|location| !location.is_empty())
            .map(format_location)
            .unwrap_or_default();

        Self {
            id: raw.id,
            name: raw.name,
            industry,
            location,
            products: raw.products.unwrap_or_default(),
            founding_year: raw.founding_year,
            total_funding: raw.total_funding,
            arr: raw.arr,
            valuation: raw.valuation,
        }
    }
}

/// Format a location as "City, State, Country", or "City, Country" when the
/// state is missing or empty.
pub fn format_location(location: &EmbeddedLocation) -> String {
    match location.state.as_deref() {
        Some(state) if !state.is_empty() => {
            format!("{}, {}, {}", location.city, state, location.country)
        }
        _ => format!("{}, {}", location.city, location.country),
    }
}

/// Optional equality filters for the company listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompanyFilter {
    pub industry_id: Option<i64>,
    pub location_id: Option<i64>,
}
