use geo::{BoundingRect, Coord, Point, Rect};

use crate::models::types::RouteGeometry;

/// Visible map area: a center plus the span shown in each axis, in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapRegion {
    pub center: Point,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl MapRegion {
    /// Smallest span a fitted region may have, so a single station still
    /// gets a usable zoom level
    pub const MIN_SPAN: f64 = 0.005;

    pub fn new(center: Point, latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            center,
            latitude_delta,
            longitude_delta,
        }
    }

    /// Region around every point of `geometries`, grown by `padding` (a
    /// fraction of the extent). `None` if there are no points.
    pub fn fit(geometries: &[RouteGeometry], padding: f64) -> Option<Self> {
        let bounds = geometries
            .iter()
            .flat_map(|geometry| &geometry.polylines)
            .filter_map(|line| line.bounding_rect())
            .reduce(union)?;

        let scale = 1.0 + padding.max(0.0);
        Some(Self::new(
            bounds.center().into(),
            (bounds.height() * scale).max(Self::MIN_SPAN),
            (bounds.width() * scale).max(Self::MIN_SPAN),
        ))
    }

    pub fn latitude(&self) -> f64 {
        self.center.y()
    }

    pub fn longitude(&self) -> f64 {
        self.center.x()
    }
}

impl Default for MapRegion {
    /// Lower Manhattan and western Queens
    fn default() -> Self {
        Self::new(Point::new(-73.935242, 40.730610), 0.10, 0.10)
    }
}

fn union(a: Rect, b: Rect) -> Rect {
    Rect::new(
        Coord {
            x: a.min().x.min(b.min().x),
            y: a.min().y.min(b.min().y),
        },
        Coord {
            x: a.max().x.max(b.max().x),
            y: a.max().y.max(b.max().y),
        },
    )
}
