use geo::LineString;
use palette::Srgba;

use crate::identifiers::RouteIdentifier;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

impl LineCap {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Screen-space width in points
    pub width: f32,
    pub cap: LineCap,
}

impl StrokeStyle {
    pub fn new(width: f32, cap: LineCap) -> Self {
        Self { width, cap }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::new(2.0, LineCap::Round)
    }
}

/// One drawable polyline. The renderer strokes `line` with `color` as is.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteOverlay {
    pub route_id: RouteIdentifier,
    pub run_index: usize,
    pub line: LineString<f64>,
    pub color: Srgba<f32>,
    pub style: StrokeStyle,
}
