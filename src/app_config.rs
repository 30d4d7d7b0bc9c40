use crate::domain::Coordinate;
use config::{Config, ConfigError};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    routing: Routing,
    map: Map,
    tracker: Tracker,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("ROUTE_TRACKER").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn routing(&self) -> &Routing {
        &self.routing
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }
}

#[derive(Debug, Deserialize)]
pub struct Routing {
    url: String,
    profile: String,
    #[serde(default, with = "humantime_serde")]
    timeout: Option<Duration>,
}

impl Routing {
    pub fn url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Map {
    output: String,
    tile_url: String,
    tile_attribution: String,
    zoom: u8,
    #[serde(with = "humantime_serde")]
    refresh: Duration,
    #[serde(with = "humantime_serde")]
    playback_step: Duration,
}

impl Map {
    pub fn output(&self) -> &Path {
        Path::new(&self.output)
    }

    pub fn tile_url(&self) -> &str {
        &self.tile_url
    }

    pub fn tile_attribution(&self) -> &str {
        &self.tile_attribution
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn refresh(&self) -> Duration {
        self.refresh
    }

    pub fn playback_step(&self) -> Duration {
        self.playback_step
    }
}

#[derive(Debug, Deserialize)]
pub struct Tracker {
    #[serde(with = "humantime_serde")]
    interval: Duration,
    start: Coordinate,
    end: Coordinate,
    step: Coordinate,
}

impl Tracker {
    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn start(&self) -> Coordinate {
        self.start
    }

    pub fn end(&self) -> Coordinate {
        self.end
    }

    pub fn step(&self) -> Coordinate {
        self.step
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                routing: Routing {
                    url: "http://localhost:5000".to_string(),
                    profile: "driving".to_string(),
                    timeout: None,
                },
                map: Map {
                    output: "map.html".to_string(),
                    tile_url: "http://localhost:8080/styles/klokantech-basic/{z}/{x}/{y}.png".to_string(),
                    tile_attribution: "offline map".to_string(),
                    zoom: 15,
                    refresh: Duration::from_secs(1),
                    playback_step: Duration::from_secs(1),
                },
                tracker: Tracker {
                    interval: Duration::from_secs(5),
                    start: Coordinate::new(52.52, 13.405),
                    end: Coordinate::new(52.5159, 13.3777),
                    step: Coordinate::new(0.001, 0.001),
                },
            },
        }
    }

    pub fn routing_url(mut self, url: String) -> Self {
        self.config.routing.url = url;
        self
    }

    pub fn output(mut self, output: &Path) -> Self {
        self.config.map.output = output.to_string_lossy().into_owned();
        self
    }

    pub fn interval(mut self, interval: Duration) -> Self {
        self.config.tracker.interval = interval;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserializes_the_shipped_configuration() -> Result<(), ConfigError> {
        let config: AppConfig = Config::builder()
            .add_source(config::File::from_str(include_str!("../config.toml"), FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        assert_eq!(config.routing().url(), "http://localhost:5000");
        assert_eq!(config.routing().profile(), "driving");
        assert_eq!(config.routing().timeout(), None);
        assert_eq!(config.map().output(), Path::new("map.html"));
        assert_eq!(config.map().zoom(), 15);
        assert_eq!(config.map().refresh(), Duration::from_secs(1));
        assert_eq!(config.map().playback_step(), Duration::from_secs(1));
        assert_eq!(config.tracker().interval(), Duration::from_secs(5));
        assert_eq!(config.tracker().start(), Coordinate::new(52.52, 13.405));
        assert_eq!(config.tracker().end(), Coordinate::new(52.5159, 13.3777));
        assert_eq!(config.tracker().step(), Coordinate::new(0.001, 0.001));

        Ok(())
    }

    #[test]
    fn routing_url_ignores_a_trailing_slash() -> Result<(), ConfigError> {
        let config: AppConfig = Config::builder()
            .add_source(config::File::from_str(include_str!("../config.toml"), FileFormat::Toml))
            .set_override("routing.url", "http://osrm:5000/")?
            .set_override("routing.timeout", "2s")?
            .build()?
            .try_deserialize()?;

        assert_eq!(config.routing().url(), "http://osrm:5000");
        assert_eq!(config.routing().timeout(), Some(Duration::from_secs(2)));

        Ok(())
    }
}
