//! In-memory transit provider backed by the two reference documents.
//!
//! Stations and routes are kept in catalog order so that "first neighbor"
//! and batch resolution follow the documents exactly.

use std::path::Path;
use std::sync::Arc;

use geo::{Coord, Point};
use indexmap::IndexMap;

use crate::config::ResolverConfig;
use crate::geometry::resolver;
use crate::identifiers::*;
use crate::models::{traits::*, types::*};
use crate::provider::documents;

// ============================================================================
// Concrete Implementations of Traits
// ============================================================================

#[derive(Clone, Debug)]
pub struct StationImpl {
    pub id: StationIdentifier,
    pub location: Point,
    /// Waypoints toward each southern neighbor, `x` = longitude
    pub south: IndexMap<StationIdentifier, Vec<Coord>>,
}

impl TransitStation for StationImpl {
    fn id(&self) -> &StationIdentifier {
        &self.id
    }

    fn location(&self) -> Point {
        self.location
    }

    fn has_south_paths(&self) -> bool {
        !self.south.is_empty()
    }

    fn has_south_neighbor(&self, neighbor: &StationIdentifier) -> bool {
        self.south.contains_key(neighbor)
    }

    fn first_south_neighbor(&self) -> Option<&StationIdentifier> {
        self.south.keys().next()
    }

    fn south_waypoints(&self, neighbor: &StationIdentifier) -> Option<&[Coord]> {
        self.south.get(neighbor).map(Vec::as_slice)
    }
}

#[derive(Clone, Debug)]
pub struct RouteImpl {
    pub id: RouteIdentifier,
    pub color: Arc<str>,
    pub runs: Vec<Vec<String>>,
}

impl Route for RouteImpl {
    fn id(&self) -> &RouteIdentifier {
        &self.id
    }

    fn color(&self) -> &str {
        &self.color
    }

    fn runs(&self) -> &[Vec<String>] {
        &self.runs
    }
}

// ============================================================================
// Static Provider
// ============================================================================

/// In-memory provider over the station and route catalogs
///
/// This type is cheap to clone since all data is stored in `Arc`s.
#[derive(Clone, Default)]
pub struct StaticTransitProvider {
    station_map: IndexMap<StationIdentifier, Arc<StationImpl>>,
    route_map: IndexMap<RouteIdentifier, Arc<RouteImpl>>,
    config: ResolverConfig,
}

impl StaticTransitProvider {
    /// Create a new empty provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Build provider from already parsed data, keeping the given order
    pub fn from_data(stations: Vec<StationImpl>, routes: Vec<RouteImpl>) -> Self {
        let station_map = stations
            .into_iter()
            .map(|s| (s.id.clone(), Arc::new(s)))
            .collect();

        let route_map = routes
            .into_iter()
            .map(|r| (r.id.clone(), Arc::new(r)))
            .collect();

        Self {
            station_map,
            route_map,
            config: ResolverConfig::default(),
        }
    }

    /// Load both catalogs from JSON files on disk
    pub fn from_documents(
        stations_path: &Path,
        routes_path: &Path,
        config: &ResolverConfig,
    ) -> std::result::Result<Self, CatalogError> {
        let stations = documents::read_stations_file(stations_path, config.lookup)?;
        let routes = documents::read_routes_file(routes_path)?;

        tracing::info!(
            stations = stations.len(),
            routes = routes.len(),
            stations_path = %stations_path.display(),
            routes_path = %routes_path.display(),
            "loaded catalogs"
        );

        Ok(Self::from_data(stations, routes).with_config(config.clone()))
    }

    /// Load both catalogs from JSON text
    pub fn from_json_str(
        stations_json: &str,
        routes_json: &str,
        config: &ResolverConfig,
    ) -> std::result::Result<Self, CatalogError> {
        let stations =
            documents::parse_stations(stations_json, documents::STATION_DOCUMENT, config.lookup)?;
        let routes = documents::parse_routes(routes_json, documents::ROUTE_DOCUMENT)?;

        Ok(Self::from_data(stations, routes).with_config(config.clone()))
    }

    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn station_count(&self) -> usize {
        self.station_map.len()
    }

    pub fn route_ids(&self) -> impl Iterator<Item = &RouteIdentifier> {
        self.route_map.keys()
    }

    /// Resolve one route with this provider's config
    pub fn resolve_route(&self, id: &RouteIdentifier) -> Result<RouteGeometry> {
        resolver::resolve_route(self, id, &self.config)
    }

    /// Resolve every route in catalog order with this provider's config
    pub fn resolve_all_routes(&self) -> Result<Vec<RouteGeometry>> {
        resolver::resolve_all_routes(self, &self.config)
    }
}

impl TransitProvider for StaticTransitProvider {
    fn get_station(&self, id: &StationIdentifier) -> Option<Arc<dyn TransitStation>> {
        self.station_map
            .get(id)
            .map(|s| s.clone() as Arc<dyn TransitStation>)
    }

    fn get_route(&self, id: &RouteIdentifier) -> Option<Arc<dyn Route>> {
        self.route_map.get(id).map(|r| r.clone() as Arc<dyn Route>)
    }

    fn all_routes(&self) -> Vec<Arc<dyn Route>> {
        self.route_map
            .values()
            .map(|r| r.clone() as Arc<dyn Route>)
            .collect()
    }
}
