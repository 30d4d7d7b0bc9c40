mod client;
mod fetcher;
mod route_response;

pub use client::new_client;
pub use fetcher::{OsrmRouteSource, RouteFetchError};
