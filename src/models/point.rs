//! Stop type.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::distance::haversine_km;

/// A named stop with geographic coordinates.
///
/// Besides the required `name`, `address`, `lat` and `lon`, a point carries
/// an open set of passthrough attributes (for example an `is_airbnb` flag)
/// that the engine preserves but never reads.
///
/// # Examples
///
/// ```
/// use open_route::models::Point;
///
/// let p = Point::new("Office", "Main St 1", 50.85, 4.35)
///     .with_attribute("is_airbnb", false);
/// assert_eq!(p.name(), "Office");
/// assert_eq!(p.attribute("is_airbnb"), Some(&serde_json::Value::Bool(false)));
/// assert!(p.has_valid_coordinates());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    name: String,
    #[serde(default)]
    address: String,
    lat: f64,
    lon: f64,
    #[serde(flatten)]
    attributes: Map<String, Value>,
}

impl Point {
    /// Creates a point with no passthrough attributes.
    pub fn new(name: impl Into<String>, address: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            lat,
            lon,
            attributes: Map::new(),
        }
    }

    /// Attaches a passthrough attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Identity of this point within one optimization call.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Looks up a passthrough attribute.
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// All passthrough attributes.
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// Returns `true` if latitude lies in [-90, 90] and longitude in [-180, 180].
    ///
    /// NaN and infinite values are rejected.
    pub fn has_valid_coordinates(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }

    /// Great-circle distance to another point in kilometers.
    pub fn distance_to(&self, other: &Point) -> f64 {
        haversine_km(self.lat, self.lon, other.lat, other.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_new() {
        let p = Point::new("A", "Rue 1", 50.0, 4.0);
        assert_eq!(p.name(), "A");
        assert_eq!(p.address(), "Rue 1");
        assert_eq!(p.lat(), 50.0);
        assert_eq!(p.lon(), 4.0);
        assert!(p.attributes().is_empty());
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let p = Point::new("A", "", 50.851, 4.378);
        assert_eq!(p.distance_to(&p), 0.0);
    }

    #[test]
    fn test_distance_symmetric() {
        let a = Point::new("A", "", 50.851, 4.378);
        let b = Point::new("B", "", 50.817, 4.386);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-12);
        assert!(a.distance_to(&b) > 0.0);
    }

    #[test]
    fn test_coordinate_validation() {
        assert!(Point::new("A", "", 90.0, 180.0).has_valid_coordinates());
        assert!(Point::new("A", "", -90.0, -180.0).has_valid_coordinates());
        assert!(!Point::new("A", "", 90.5, 0.0).has_valid_coordinates());
        assert!(!Point::new("A", "", 0.0, -180.1).has_valid_coordinates());
        assert!(!Point::new("A", "", f64::NAN, 0.0).has_valid_coordinates());
        assert!(!Point::new("A", "", 0.0, f64::INFINITY).has_valid_coordinates());
    }

    #[test]
    fn test_passthrough_attributes_round_trip() {
        let json = r#"{"name":"Artan 112","address":"Rue Artan 112","lat":50.85,"lon":4.38,"is_airbnb":true}"#;
        let p: Point = serde_json::from_str(json).expect("valid point");
        assert_eq!(p.attribute("is_airbnb"), Some(&Value::Bool(true)));

        let back = serde_json::to_value(&p).expect("serializable");
        assert_eq!(back["is_airbnb"], Value::Bool(true));
        assert_eq!(back["name"], Value::String("Artan 112".to_string()));
    }

    #[test]
    fn test_missing_address_defaults_to_empty() {
        let p: Point =
            serde_json::from_str(r#"{"name":"X","lat":1.0,"lon":2.0}"#).expect("valid point");
        assert_eq!(p.address(), "");
    }
}
