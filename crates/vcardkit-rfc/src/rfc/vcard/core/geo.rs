//! Geographic position (GEO property and GEO parameter).

use std::fmt::Write as _;

use crate::error::{RfcError, RfcResult};

/// A WGS 84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
}

impl GeoCoordinate {
    /// Creates a coordinate.
    ///
    /// ## Errors
    /// Returns an invalid-argument error if the latitude lies outside
    /// -90..=90, the longitude outside -180..=180, or either is not finite.
    pub fn new(latitude: f64, longitude: f64) -> RfcResult<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(RfcError::InvalidArgument(format!(
                "latitude out of range: {latitude}"
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(RfcError::InvalidArgument(format!(
                "longitude out of range: {longitude}"
            )));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Parses any of the notations found in the wild:
    /// `geo:lat,lon[;u=…]`, `lat;lon` and `lat,lon`.
    ///
    /// Returns `None` for text that is not a valid position.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let s = value.trim();
        let s = match s.get(..4) {
            Some(scheme) if scheme.eq_ignore_ascii_case("geo:") => &s[4..],
            _ => s,
        };
        // Drop URI parameters (`;u=35`, `;crs=wgs84`) after the coordinates.
        let s = if let Some(pos) = s.find(";u=").or_else(|| s.find(";crs=")) {
            &s[..pos]
        } else {
            s
        };

        let (lat, lon) = s.split_once(',').or_else(|| s.split_once(';'))?;
        let latitude: f64 = lat.trim().parse().ok()?;
        // `geo:` URIs may carry an altitude as third coordinate.
        let lon = lon.split(',').next().unwrap_or(lon);
        let longitude: f64 = lon.trim().parse().ok()?;

        Self::new(latitude, longitude).ok()
    }

    /// Appends the `geo:` URI form (RFC 5870).
    pub fn append_uri(&self, builder: &mut String) {
        builder.push_str("geo:");
        self.append_pair(builder, ',');
    }

    /// Appends `lat<separator>lon` with six decimals.
    pub fn append_pair(&self, builder: &mut String, separator: char) {
        write!(builder, "{:.6}{separator}{:.6}", self.latitude, self.longitude).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_out_of_range() {
        assert!(GeoCoordinate::new(90.5, 0.0).is_err());
        assert!(GeoCoordinate::new(0.0, -180.1).is_err());
        assert!(GeoCoordinate::new(f64::NAN, 0.0).is_err());
        assert!(GeoCoordinate::new(-90.0, 180.0).is_ok());
    }

    #[test]
    fn parse_geo_uri() {
        let geo = GeoCoordinate::parse("geo:37.386013,-122.082932").unwrap();
        assert!((geo.latitude() - 37.386_013).abs() < 1e-9);
        assert!((geo.longitude() + 122.082_932).abs() < 1e-9);
    }

    #[test]
    fn parse_geo_uri_with_uncertainty() {
        let geo = GeoCoordinate::parse("GEO:48.2,16.37;u=20").unwrap();
        assert!((geo.longitude() - 16.37).abs() < 1e-9);
    }

    #[test]
    fn parse_semicolon_pair() {
        let geo = GeoCoordinate::parse("37.386013;-122.082932").unwrap();
        assert!((geo.latitude() - 37.386_013).abs() < 1e-9);
    }

    #[test]
    fn parse_invalid_returns_none() {
        assert!(GeoCoordinate::parse("somewhere").is_none());
        assert!(GeoCoordinate::parse("geo:95,10").is_none());
    }

    #[test]
    fn append_forms() {
        let geo = GeoCoordinate::new(37.5, -122.25).unwrap();
        let mut uri = String::new();
        geo.append_uri(&mut uri);
        assert_eq!(uri, "geo:37.500000,-122.250000");

        let mut pair = String::new();
        geo.append_pair(&mut pair, ';');
        assert_eq!(pair, "37.500000;-122.250000");
    }
}
