mod coordinate;
mod route;
mod route_source;

pub use coordinate::Coordinate;
pub use route::Route;
pub use route_source::RouteSource;
