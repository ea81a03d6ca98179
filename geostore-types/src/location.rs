use geo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Two-letter ISO 3166-1 alpha-2 country code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode([u8; 2]);

impl CountryCode {
    /// Parse a code; anything but two ASCII letters is rejected. Lowercase input is
    /// normalized to uppercase.
    ///
    /// ```
    /// use geostore_types::location::CountryCode;
    ///
    /// assert_eq!(CountryCode::new("no").unwrap().as_str(), "NO");
    /// assert!(CountryCode::new("NOR").is_none());
    /// ```
    pub fn new(code: &str) -> Option<Self> {
        let bytes = code.as_bytes();
        if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return None;
        }
        Some(Self([
            bytes[0].to_ascii_uppercase(),
            bytes[1].to_ascii_uppercase(),
        ]))
    }

    pub fn from_bytes(bytes: [u8; 2]) -> Option<Self> {
        std::str::from_utf8(&bytes).ok().and_then(Self::new)
    }

    pub fn as_bytes(&self) -> [u8; 2] {
        self.0
    }

    pub fn as_str(&self) -> &str {
        // Construction only admits ASCII letters.
        std::str::from_utf8(&self.0).unwrap_or("??")
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for CountryCode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value).ok_or_else(|| format!("invalid country code '{}'", value))
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.as_str().to_string()
    }
}

/// A gazetteer entry. Immutable once imported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Upstream geoname id.
    pub id: u32,
    /// Display name, already resolved to the preferred language.
    pub name: String,
    pub country: Option<CountryCode>,
    pub latitude: f64,
    pub longitude: f64,
    /// Key into the feature code table.
    pub feature_code: u16,
    pub population: Option<u64>,
    /// Key into the timezone table.
    pub timezone: u16,
}

impl Location {
    pub fn new(id: u32, name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            name: name.into(),
            country: None,
            latitude,
            longitude,
            feature_code: 0,
            population: None,
            timezone: 0,
        }
    }

    pub fn with_country(mut self, country: CountryCode) -> Self {
        self.country = Some(country);
        self
    }

    pub fn with_feature_code(mut self, feature_code: u16) -> Self {
        self.feature_code = feature_code;
        self
    }

    pub fn with_population(mut self, population: u64) -> Self {
        self.population = Some(population);
        self
    }

    pub fn with_timezone(mut self, timezone: u16) -> Self {
        self.timezone = timezone;
        self
    }

    /// Position as a `geo` point (x = longitude, y = latitude).
    pub fn point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_code_normalizes_case() {
        let code = CountryCode::new("us").unwrap();
        assert_eq!(code.as_str(), "US");
        assert_eq!(code.as_bytes(), *b"US");
    }

    #[test]
    fn test_country_code_rejects_garbage() {
        assert!(CountryCode::new("").is_none());
        assert!(CountryCode::new("U1").is_none());
        assert!(CountryCode::new("USA").is_none());
        assert!(CountryCode::from_bytes([0, 0]).is_none());
    }

    #[test]
    fn test_location_builder() {
        let location = Location::new(1, "Somewhere", 10.0, 20.0)
            .with_feature_code(7)
            .with_timezone(3);
        assert_eq!(location.point().y(), 10.0);
        assert_eq!(location.feature_code, 7);
        assert_eq!(location.timezone, 3);
        assert!(location.population.is_none());
    }
}
