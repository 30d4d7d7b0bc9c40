use crate::domain::Coordinate;

/// Ordered path between two points. An empty route means the routing service could not deliver one.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct Route {
    coordinates: Vec<Coordinate>,
}

impl Route {
    pub fn new(coordinates: Vec<Coordinate>) -> Self {
        Route { coordinates }
    }

    pub fn empty() -> Self {
        Route::default()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    pub fn lat_lon_path(&self) -> Vec<[f64; 2]> {
        self.coordinates().iter().map(Coordinate::lat_lon).collect()
    }

    pub fn lon_lat_path(&self) -> Vec<[f64; 2]> {
        self.coordinates().iter().map(Coordinate::lon_lat).collect()
    }
}

impl FromIterator<Coordinate> for Route {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        Route::new(iter.into_iter().collect())
    }
}
