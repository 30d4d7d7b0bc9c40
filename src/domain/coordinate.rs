use serde::Deserialize;

/// A geographic point in degrees. The range is not validated.
#[derive(Clone, Copy, Default, Debug, PartialEq, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate { latitude, longitude }
    }

    /// GeoJSON positions are ordered longitude first.
    pub fn from_lon_lat([longitude, latitude]: [f64; 2]) -> Self {
        Coordinate::new(latitude, longitude)
    }

    pub fn midpoint(&self, other: &Coordinate) -> Coordinate {
        Coordinate {
            latitude: (self.latitude + other.latitude) / 2.0,
            longitude: (self.longitude + other.longitude) / 2.0,
        }
    }

    pub fn offset(&self, delta: &Coordinate) -> Coordinate {
        Coordinate {
            latitude: self.latitude + delta.latitude,
            longitude: self.longitude + delta.longitude,
        }
    }

    pub fn lat_lon(&self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }

    pub fn lon_lat(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }
}
