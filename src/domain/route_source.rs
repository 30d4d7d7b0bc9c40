use crate::domain::{Coordinate, Route};
use crate::osrm::RouteFetchError;
use async_trait::async_trait;
use std::fmt::Debug;

#[async_trait]
pub trait RouteSource: Debug + Send + Sync {
    /// Recoverable failures yield an empty route, only malformed answers are errors.
    async fn route(&self, start: &Coordinate, end: &Coordinate) -> Result<Route, RouteFetchError>;
}
