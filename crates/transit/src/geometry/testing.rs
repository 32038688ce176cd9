//! Catalog builders shared by the geometry tests.

use geo::{Coord, Point};
use indexmap::IndexMap;

use crate::identifiers::*;
use crate::provider::{RouteImpl, StaticTransitProvider, StationImpl};

pub(crate) fn station(id: &str, latitude: f64, longitude: f64) -> StationImpl {
    StationImpl {
        id: StationIdentifier::new(id),
        location: Point::new(longitude, latitude),
        south: IndexMap::new(),
    }
}

impl StationImpl {
    /// Add a southern neighbor, waypoints given as stored: `[lon, lat]`
    pub(crate) fn south(mut self, neighbor: &str, waypoints: &[[f64; 2]]) -> Self {
        let waypoints = waypoints.iter().map(|&[x, y]| Coord { x, y }).collect();
        self.south.insert(StationIdentifier::new(neighbor), waypoints);
        self
    }
}

pub(crate) fn route(id: &str, color: &str, runs: &[&[&str]]) -> RouteImpl {
    RouteImpl {
        id: RouteIdentifier::new(id),
        color: color.into(),
        runs: runs
            .iter()
            .map(|run| run.iter().map(|entry| entry.to_string()).collect())
            .collect(),
    }
}

pub(crate) fn provider(stations: Vec<StationImpl>) -> StaticTransitProvider {
    StaticTransitProvider::from_data(stations, Vec::new())
}

pub(crate) fn ids(keys: &[&str]) -> Vec<StationIdentifier> {
    keys.iter().map(StationIdentifier::new).collect()
}
