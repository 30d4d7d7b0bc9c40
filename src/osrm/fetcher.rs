use crate::app_config::Routing;
use crate::domain::{Coordinate, Route, RouteSource};
use crate::osrm::route_response::RouteResponse;
use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{error, info, instrument, warn};

#[derive(Debug)]
pub struct OsrmRouteSource {
    client: Client,
    url: String,
    profile: String,
}

impl OsrmRouteSource {
    pub fn new(client: Client, routing: &Routing) -> Self {
        OsrmRouteSource {
            client,
            url: routing.url().to_string(),
            profile: routing.profile().to_string(),
        }
    }

    fn route_url(&self, start: &Coordinate, end: &Coordinate) -> String {
        format!(
            "{}/route/v1/{}/{},{};{},{}?overview=full&geometries=geojson",
            self.url, self.profile, start.longitude, start.latitude, end.longitude, end.latitude
        )
    }

    async fn request(&self, url: &str) -> Result<String, reqwest::Error> {
        self.client.get(url).send().await?.error_for_status()?.text().await
    }
}

#[async_trait]
impl RouteSource for OsrmRouteSource {
    #[instrument(skip(self))]
    async fn route(&self, start: &Coordinate, end: &Coordinate) -> Result<Route, RouteFetchError> {
        info!("🛣️ Fetching route...");

        let url = self.route_url(start, end);
        let body = match self.request(&url).await {
            Ok(body) => body,
            Err(e) => {
                error!(url, "❌ Error fetching route data: {}", e);
                return Ok(Route::empty());
            }
        };

        let response = serde_json::from_str::<RouteResponse>(&body)?;
        if response.code != "Ok" {
            warn!(
                code = response.code,
                "⚠️ Fetching route... failed, {}",
                response.message.as_deref().unwrap_or("no message")
            );
            return Ok(Route::empty());
        }

        let first = response.routes.into_iter().next().ok_or(RouteFetchError::NoRoutes)?;
        let route = first.geometry.coordinates.into_iter().map(Coordinate::from_lon_lat).collect::<Route>();

        info!("🛣️ Fetching route... OK, {} points", route.len());
        Ok(route)
    }
}

#[derive(Error, Debug)]
pub enum RouteFetchError {
    #[error("malformed route response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
    #[error("route response contains no routes")]
    NoRoutes,
}
