//! Hand-off to the map renderer.
//!
//! A [`MapScene`] is built once from resolved geometry and passed to the
//! presentation layer. Every overlay carries its own color and stroke style,
//! so drawing one is a direct read of its fields.

pub mod region;
pub mod style;

pub use region::MapRegion;
pub use style::{LineCap, RouteOverlay, StrokeStyle};

use crate::config::ResolverConfig;
use crate::models::types::RouteGeometry;

#[derive(Debug, Clone)]
pub struct MapScene {
    overlays: Vec<RouteOverlay>,
    region: MapRegion,
}

impl MapScene {
    /// One overlay per non-empty polyline, in route then run order
    pub fn new(geometries: Vec<RouteGeometry>, region: MapRegion) -> Self {
        let style = StrokeStyle::default();
        let overlays = geometries
            .into_iter()
            .flat_map(|geometry| {
                let RouteGeometry {
                    route_id,
                    color,
                    polylines,
                } = geometry;

                polylines
                    .into_iter()
                    .enumerate()
                    .filter(|(_, line)| !line.0.is_empty())
                    .map(move |(run_index, line)| RouteOverlay {
                        route_id: route_id.clone(),
                        run_index,
                        line,
                        color,
                        style,
                    })
            })
            .collect();

        Self { overlays, region }
    }

    /// Build a scene whose region is fitted to the geometry, falling back to
    /// [`MapRegion::default`] when there is nothing to show
    pub fn from_geometries(geometries: Vec<RouteGeometry>, config: &ResolverConfig) -> Self {
        let region = MapRegion::fit(&geometries, config.region_padding).unwrap_or_default();
        Self::new(geometries, region)
    }

    pub fn with_style(mut self, style: StrokeStyle) -> Self {
        for overlay in &mut self.overlays {
            overlay.style = style;
        }
        self
    }

    pub fn overlays(&self) -> &[RouteOverlay] {
        &self.overlays
    }

    pub fn region(&self) -> MapRegion {
        self.region
    }
}
