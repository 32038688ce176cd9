//! Core data types and errors for route geometry.

use std::path::PathBuf;

use geo::{CoordsIter, LineString};
use palette::Srgba;

use crate::identifiers::*;

// ============================================================================
// Data Structures
// ============================================================================

/// Renderable geometry for one route
///
/// One polyline per run, in run order. Coordinates follow the `geo`
/// convention: `x` is longitude, `y` is latitude.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteGeometry {
    pub route_id: RouteIdentifier,
    pub color: Srgba<f32>,
    pub polylines: Vec<LineString<f64>>,
}

impl RouteGeometry {
    /// Polylines as `(latitude, longitude)` pairs, the order map widgets expect
    pub fn lat_lon_polylines(&self) -> Vec<Vec<(f64, f64)>> {
        self.polylines
            .iter()
            .map(|line| line.coords().map(|c| (c.y, c.x)).collect())
            .collect()
    }

    /// Total number of points across all polylines
    pub fn point_count(&self) -> usize {
        self.polylines.iter().map(|line| line.coords_count()).sum()
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Failure while loading the reference documents.
///
/// These are initialization errors: the application cannot run without its
/// bundled station and route catalogs.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Missing resource: {}", path.display())]
    MissingResource { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed document {document}: {source}")]
    Malformed {
        document: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Station {station} has no {field}")]
    MissingCoordinate {
        station: StationIdentifier,
        field: &'static str,
    },
}

/// Failure while resolving geometry against loaded catalogs
#[derive(Debug, thiserror::Error)]
pub enum TransitError {
    #[error("Route not found: {0}")]
    RouteNotFound(RouteIdentifier),

    #[error("Station not found: {station} (referenced by route {route})")]
    StationNotFound {
        route: RouteIdentifier,
        station: StationIdentifier,
    },
}

pub type Result<T> = std::result::Result<T, TransitError>;
