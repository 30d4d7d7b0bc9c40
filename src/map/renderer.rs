use crate::app_config::Map;
use crate::domain::{Coordinate, Route};
use crate::map::document::{Layer, MapDocument};
use crate::map::playback::{self, Playback};
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tokio::fs;
use tracing::{debug, info, instrument};

const TITLE: &str = "Route tracker";

#[derive(Debug, Clone)]
pub struct MapRenderer {
    settings: Map,
}

impl MapRenderer {
    pub fn new(settings: Map) -> Self {
        MapRenderer { settings }
    }

    pub fn build(&self, route: &Route, start: &Coordinate, end: &Coordinate) -> MapDocument {
        let mut document = MapDocument::new(TITLE, start.midpoint(end), self.settings.zoom());

        document.add_layer(Layer::Tiles {
            url: self.settings.tile_url().to_string(),
            attribution: self.settings.tile_attribution().to_string(),
        });
        document.add_layer(Layer::Marker {
            at: *start,
            tooltip: "Start Point".to_string(),
            color: "green".to_string(),
        });
        document.add_layer(Layer::Marker {
            at: *end,
            tooltip: "End Point".to_string(),
            color: "red".to_string(),
        });

        if !route.is_empty() {
            document.add_layer(Layer::Polyline {
                points: route.lat_lon_path(),
                color: "blue".to_string(),
            });
        }

        document
    }

    /// Builds the map, injects the playback and overwrites the output file.
    #[instrument(skip_all, fields(points = route.len()))]
    pub async fn render(&self, route: &Route, start: &Coordinate, end: &Coordinate) -> Result<PathBuf, RenderError> {
        let mut document = self.build(route, start, end);
        let playback = Playback {
            refresh: self.settings.refresh(),
            step: self.settings.playback_step(),
        };
        playback::inject(&mut document, route, start, playback)?;
        debug!("🗺️ Built map with {} layer(s)", document.layers().len());

        let html = document.render()?;
        let path = self.settings.output().to_path_buf();
        fs::write(&path, html).await.map_err(|e| RenderError::Io {
            source: e,
            path: path.clone(),
        })?;

        info!("🗺️ Map has been saved to {}", path.display());
        Ok(path)
    }
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("unable to serialize the map: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("unable to write '{}': {}", path.display(), source)]
    Io { source: io::Error, path: PathBuf },
}
