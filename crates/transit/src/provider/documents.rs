//! Loading of the `station-data` and `route-map-data` JSON documents.
//!
//! Waypoints inside a station's `south` object are stored as
//! `[longitude, latitude]`, the reverse of the top-level `latitude` and
//! `longitude` fields. They are read into `geo::Coord` with `x` = longitude.

use std::io::ErrorKind;
use std::path::Path;

use geo::{Coord, Point};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::config::LookupPolicy;
use crate::identifiers::*;
use crate::models::types::CatalogError;
use crate::provider::static_provider::{RouteImpl, StationImpl};

pub const STATION_DOCUMENT: &str = "station-data";
pub const ROUTE_DOCUMENT: &str = "route-map-data";

#[derive(Debug, Deserialize)]
struct StationRecord {
    latitude: Option<f64>,
    longitude: Option<f64>,
    south: Option<IndexMap<StationIdentifier, Vec<[f64; 2]>>>,
}

#[derive(Debug, Deserialize)]
struct RouteRecord {
    color: String,
    routings: Routings,
}

#[derive(Debug, Deserialize)]
struct Routings {
    #[serde(default)]
    south: Vec<Vec<String>>,
}

impl StationRecord {
    fn into_station(
        self,
        id: StationIdentifier,
        policy: LookupPolicy,
    ) -> Result<StationImpl, CatalogError> {
        let latitude = coordinate(&id, "latitude", self.latitude, policy)?;
        let longitude = coordinate(&id, "longitude", self.longitude, policy)?;

        let south = self
            .south
            .unwrap_or_default()
            .into_iter()
            .map(|(neighbor, points)| {
                let waypoints = points
                    .into_iter()
                    .map(|[lon, lat]| Coord { x: lon, y: lat })
                    .collect();
                (neighbor, waypoints)
            })
            .collect();

        Ok(StationImpl {
            id,
            location: Point::new(longitude, latitude),
            south,
        })
    }
}

fn coordinate(
    station: &StationIdentifier,
    field: &'static str,
    value: Option<f64>,
    policy: LookupPolicy,
) -> Result<f64, CatalogError> {
    match (value, policy) {
        (Some(value), _) => Ok(value),
        (None, LookupPolicy::Lenient) => {
            warn!(%station, field, "missing coordinate, using 0.0");
            Ok(0.0)
        }
        (None, LookupPolicy::Strict) => Err(CatalogError::MissingCoordinate {
            station: station.clone(),
            field,
        }),
    }
}

fn malformed(document: &str) -> impl FnOnce(serde_json::Error) -> CatalogError + '_ {
    move |source| CatalogError::Malformed {
        document: document.to_owned(),
        source,
    }
}

fn read_document(path: &Path) -> Result<String, CatalogError> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => CatalogError::MissingResource {
            path: path.to_path_buf(),
        },
        _ => CatalogError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Parse a station-data document, keeping document order
pub fn parse_stations(
    json: &str,
    document: &str,
    policy: LookupPolicy,
) -> Result<Vec<StationImpl>, CatalogError> {
    let records: IndexMap<StationIdentifier, StationRecord> =
        serde_json::from_str(json).map_err(malformed(document))?;

    records
        .into_iter()
        .map(|(id, record)| record.into_station(id, policy))
        .collect()
}

/// Parse a route-map-data document, keeping document order.
///
/// Accepts both a bare `{ route: {...} }` mapping and the bundled layout
/// where that mapping sits under a top-level `routes` key.
pub fn parse_routes(json: &str, document: &str) -> Result<Vec<RouteImpl>, CatalogError> {
    let mut value: Value = serde_json::from_str(json).map_err(malformed(document))?;
    if let Some(routes) = take_wrapped_routes(&mut value) {
        value = routes;
    }

    let records: IndexMap<RouteIdentifier, RouteRecord> =
        serde_json::from_value(value).map_err(malformed(document))?;

    Ok(records
        .into_iter()
        .map(|(id, record)| RouteImpl {
            id,
            color: record.color.into(),
            runs: record.routings.south,
        })
        .collect())
}

fn take_wrapped_routes(value: &mut Value) -> Option<Value> {
    let object = value.as_object_mut()?;
    // A route keyed "routes" is a record, not a wrapper
    let wrapped = object
        .get("routes")
        .and_then(Value::as_object)
        .is_some_and(|routes| !routes.contains_key("color") && !routes.contains_key("routings"));

    if wrapped {
        object.remove("routes")
    } else {
        None
    }
}

pub fn read_stations_file(
    path: &Path,
    policy: LookupPolicy,
) -> Result<Vec<StationImpl>, CatalogError> {
    let json = read_document(path)?;
    parse_stations(&json, &path.display().to_string(), policy)
}

pub fn read_routes_file(path: &Path) -> Result<Vec<RouteImpl>, CatalogError> {
    let json = read_document(path)?;
    parse_routes(&json, &path.display().to_string())
}
