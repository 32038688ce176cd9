//! # route-map-transit
//!
//! Route map geometry derived from static station and route catalogs.
//!
//! ## Features
//!
//! - **Static catalogs**: station positions with curve waypoints, and routes
//!   as ordered station runs, loaded once from JSON
//! - **Gap filling**: runs that skip stations are repaired from the station
//!   catalog's adjacency
//! - **Polyline resolution**: one polyline per run, a plain concatenation of
//!   stored points
//! - **Scene hand-off**: colored stroke overlays and an initial map region
//!   for the renderer
//!
//! ## Example
//!
//! ```
//! use route_map_transit::prelude::*;
//!
//! let stations = r#"{
//!     "A09": { "latitude": 40.850, "longitude": -73.940,
//!              "south": { "A10": [[-73.9395, 40.848]] } },
//!     "A10": { "latitude": 40.845, "longitude": -73.938 }
//! }"#;
//! let routes = r##"{
//!     "routes": { "A": { "color": "#2185d0", "routings": { "south": [["A09S", "A10S"]] } } }
//! }"##;
//!
//! let provider =
//!     StaticTransitProvider::from_json_str(stations, routes, &ResolverConfig::default()).unwrap();
//!
//! let geometry = provider.resolve_route(&RouteIdentifier::new("A")).unwrap();
//! assert_eq!(geometry.polylines.len(), 1);
//! assert_eq!(geometry.point_count(), 3);
//!
//! let scene = MapScene::from_geometries(vec![geometry], provider.config());
//! assert_eq!(scene.overlays().len(), 1);
//! ```

pub mod config;
pub mod geometry;
pub mod identifiers;
pub mod models;
pub mod provider;
pub mod render;

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::{LookupPolicy, ResolverConfig};
    pub use crate::geometry::{expand_run, fill_gaps, resolve_all_routes, resolve_route};
    pub use crate::identifiers::*;
    pub use crate::models::{color::*, traits::*, types::*};
    pub use crate::provider::{RouteImpl, StaticTransitProvider, StationImpl};
    pub use crate::render::{LineCap, MapRegion, MapScene, RouteOverlay, StrokeStyle};
}

pub use prelude::*;
