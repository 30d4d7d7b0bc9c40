use crate::app_config;
use crate::domain::{Coordinate, Route, RouteSource};
use crate::map::{MapRenderer, RenderError};
use crate::osrm::RouteFetchError;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::watch::Receiver;
use tokio::time::sleep;
use tracing::{debug, info, instrument};

/// Owns the moving destination and drives fetch, render and move on a fixed interval.
#[derive(Debug)]
pub struct Tracker {
    source: Box<dyn RouteSource>,
    renderer: MapRenderer,
    start: Coordinate,
    end: Coordinate,
    step: Coordinate,
    interval: Duration,
}

impl Tracker {
    pub fn new(source: Box<dyn RouteSource>, renderer: MapRenderer, settings: &app_config::Tracker) -> Self {
        Tracker {
            source,
            renderer,
            start: settings.start(),
            end: settings.end(),
            step: settings.step(),
            interval: settings.interval(),
        }
    }

    pub fn end(&self) -> Coordinate {
        self.end
    }

    #[instrument(skip(self), fields(end = ?self.end))]
    pub async fn tick(&mut self) -> Result<Route, TrackerError> {
        let route = self.source.route(&self.start, &self.end).await?;
        self.renderer.render(&route, &self.start, &self.end).await?;

        self.end = self.end.offset(&self.step);
        debug!("📍 Moved destination to {:?}", self.end);
        Ok(route)
    }

    /// Ticks until `shutdown` turns true or its sender goes away. The signal also cuts the pause short.
    #[instrument(skip_all)]
    pub async fn run(&mut self, mut shutdown: Receiver<bool>) -> Result<(), TrackerError> {
        loop {
            if *shutdown.borrow() {
                break;
            }

            self.tick().await?;

            tokio::select! {
                _ = sleep(self.interval) => {}
                changed = shutdown.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
            }
        }

        info!("🛑 Tracker stopped, destination at {:?}", self.end());
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error(transparent)]
    Fetch(#[from] RouteFetchError),
    #[error(transparent)]
    Render(#[from] RenderError),
}
