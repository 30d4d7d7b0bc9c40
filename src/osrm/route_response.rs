use serde::Deserialize;

// API: https://project-osrm.org/docs/v5.24.0/api/#route-service
#[derive(Debug, Deserialize)]
pub struct RouteResponse {
    pub code: String,
    pub message: Option<String>,
    #[serde(default)]
    pub routes: Vec<RouteGet>,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct RouteGet {
    pub geometry: Geometry,
    pub distance: Option<f64>, // meters
    pub duration: Option<f64>, // seconds
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub r#type: String,
    pub coordinates: Vec<[f64; 2]>, // [longitude, latitude]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserializes_a_route_response() -> Result<(), serde_json::Error> {
        let response = serde_json::from_str::<RouteResponse>(include_str!("../../tests/resources/osrm_route_response.json"))?;

        assert_eq!(response.code, "Ok");
        assert_eq!(response.routes.len(), 2);
        assert_eq!(response.routes[0].geometry.r#type, "LineString");
        assert_eq!(response.routes[0].geometry.coordinates, vec![[13.405, 52.52], [13.40, 52.518], [13.3777, 52.5159]]);
        assert_eq!(response.routes[0].distance, Some(2113.4));
        Ok(())
    }

    #[test]
    fn routes_default_to_empty_for_an_error_code() -> Result<(), serde_json::Error> {
        let response = serde_json::from_str::<RouteResponse>(r#"{ "code": "NoRoute", "message": "Impossible route between points" }"#)?;

        assert_eq!(response.code, "NoRoute");
        assert_eq!(response.message.as_deref(), Some("Impossible route between points"));
        assert!(response.routes.is_empty());
        Ok(())
    }
}
