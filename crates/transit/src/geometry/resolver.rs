//! Route geometry resolution.
//!
//! A route's polylines are a literal concatenation of stored points: for
//! each station of a gap-filled run, the station's own position followed by
//! its waypoints toward the next station of the run. Nothing is
//! interpolated.

use geo::{Coord, LineString};
use tracing::{debug, warn};

use crate::config::{LookupPolicy, ResolverConfig};
use crate::geometry::gap_fill::fill_gaps;
use crate::identifiers::*;
use crate::models::color::color_from_hex;
use crate::models::traits::*;
use crate::models::types::*;

/// Resolve the geometry of a single route
pub fn resolve_route<P>(
    provider: &P,
    route_id: &RouteIdentifier,
    config: &ResolverConfig,
) -> Result<RouteGeometry>
where
    P: TransitProvider + ?Sized,
{
    let route = provider
        .get_route(route_id)
        .ok_or_else(|| TransitError::RouteNotFound(route_id.clone()))?;

    resolve(provider, route.as_ref(), config)
}

/// Resolve every route, in catalog order
pub fn resolve_all_routes<P>(provider: &P, config: &ResolverConfig) -> Result<Vec<RouteGeometry>>
where
    P: TransitProvider + ?Sized,
{
    provider
        .all_routes()
        .iter()
        .map(|route| resolve(provider, route.as_ref(), config))
        .collect()
}

fn resolve<P>(provider: &P, route: &dyn Route, config: &ResolverConfig) -> Result<RouteGeometry>
where
    P: TransitProvider + ?Sized,
{
    let color = color_from_hex(route.color());

    let polylines = route
        .runs()
        .iter()
        .map(|entries| {
            let run: Vec<StationIdentifier> = entries
                .iter()
                .map(|entry| StationIdentifier::from_run_entry(entry))
                .collect();
            let filled = fill_gaps(provider, &run);
            expand_run(provider, route.id(), &filled, config.lookup)
        })
        .collect::<Result<Vec<_>>>()?;

    let geometry = RouteGeometry {
        route_id: route.id().clone(),
        color,
        polylines,
    };

    debug!(
        route = %geometry.route_id,
        runs = geometry.polylines.len(),
        points = geometry.point_count(),
        "resolved route geometry"
    );

    Ok(geometry)
}

/// Expand a gap-filled run into a polyline.
///
/// Unknown stations are an error under [`LookupPolicy::Strict`] and become a
/// `(0, 0)` point without waypoints under [`LookupPolicy::Lenient`].
pub fn expand_run<P>(
    provider: &P,
    route_id: &RouteIdentifier,
    run: &[StationIdentifier],
    policy: LookupPolicy,
) -> Result<LineString<f64>>
where
    P: TransitProvider + ?Sized,
{
    let mut coords: Vec<Coord> = Vec::with_capacity(run.len());

    for (index, id) in run.iter().enumerate() {
        let Some(station) = provider.get_station(id) else {
            match policy {
                LookupPolicy::Strict => {
                    return Err(TransitError::StationNotFound {
                        route: route_id.clone(),
                        station: id.clone(),
                    })
                }
                LookupPolicy::Lenient => {
                    warn!(route = %route_id, station = %id, "unknown station, using (0, 0)");
                    coords.push(Coord { x: 0.0, y: 0.0 });
                    continue;
                }
            }
        };

        coords.push(station.location().0);

        if let Some(next) = run.get(index + 1) {
            if let Some(waypoints) = station.south_waypoints(next) {
                coords.extend_from_slice(waypoints);
            }
        }
    }

    Ok(LineString::new(coords))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::testing::{route, station};
    use crate::provider::StaticTransitProvider;
    use approx::assert_relative_eq;

    fn coords(line: &LineString<f64>) -> Vec<(f64, f64)> {
        line.coords().map(|c| (c.x, c.y)).collect()
    }

    #[test]
    fn test_two_station_run_with_waypoints() {
        let provider = StaticTransitProvider::from_data(
            vec![
                // latitude, longitude
                station("A09", 40.850, -73.940).south("A10", &[[-73.9395, 40.848], [-73.939, 40.846]]),
                station("A10", 40.845, -73.938),
            ],
            vec![route("A", "#2185d0", &[&["A09S", "A10S"]])],
        );

        let geometry = provider.resolve_route(&RouteIdentifier::new("A")).unwrap();
        assert_eq!(geometry.polylines.len(), 1);

        // Waypoints come out in stored order, longitude in x
        assert_eq!(
            coords(&geometry.polylines[0]),
            vec![
                (-73.940, 40.850),
                (-73.9395, 40.848),
                (-73.939, 40.846),
                (-73.938, 40.845),
            ]
        );

        // Map widgets get (latitude, longitude)
        assert_eq!(geometry.lat_lon_polylines()[0][1], (40.848, -73.9395));
    }

    #[test]
    fn test_waypoints_only_toward_next_station() {
        // B has a path to C, but the run ends at B
        let provider = StaticTransitProvider::from_data(
            vec![
                station("A", 0.0, 0.0).south("B", &[]),
                station("B", 1.0, 1.0).south("C", &[[1.5, 1.5]]),
                station("C", 2.0, 2.0),
            ],
            vec![route("X", "#000000", &[&["AS", "BS"]])],
        );

        let geometry = provider.resolve_route(&RouteIdentifier::new("X")).unwrap();
        assert_eq!(coords(&geometry.polylines[0]), vec![(0.0, 0.0), (1.0, 1.0)]);
    }

    #[test]
    fn test_runs_without_waypoints() {
        let provider = StaticTransitProvider::from_data(
            vec![
                station("A", 0.0, 0.0),
                station("B", 1.0, 1.0),
                station("C", 2.0, 2.0),
            ],
            vec![route(
                "E",
                "#db2828",
                &[&["AN", "BN", "CN"], &["CS", "BS", "AS"]],
            )],
        );

        let geometry = provider.resolve_route(&RouteIdentifier::new("E")).unwrap();
        assert_eq!(geometry.polylines.len(), 2);
        assert!(geometry.polylines.iter().all(|line| line.0.len() == 3));
        assert_eq!(
            coords(&geometry.polylines[1]),
            vec![(2.0, 2.0), (1.0, 1.0), (0.0, 0.0)]
        );
    }

    #[test]
    fn test_gap_filled_run_includes_bridge_waypoints() {
        let provider = StaticTransitProvider::from_data(
            vec![
                station("A", 0.0, 0.0).south("B", &[[0.5, 0.5]]),
                station("B", 1.0, 1.0).south("C", &[[1.5, 1.5]]),
                station("C", 2.0, 2.0),
            ],
            vec![route("Q", "#fbbd08", &[&["A1", "C1"]])],
        );

        let geometry = provider.resolve_route(&RouteIdentifier::new("Q")).unwrap();
        assert_eq!(
            coords(&geometry.polylines[0]),
            vec![(0.0, 0.0), (0.5, 0.5), (1.0, 1.0), (1.5, 1.5), (2.0, 2.0)]
        );
    }

    #[test]
    fn test_greedy_gap_scenario() {
        let provider = StaticTransitProvider::from_data(
            vec![
                station("A", 0.0, 0.0).south("C", &[[1.5, 1.5]]),
                station("B", 1.0, 1.0),
                station("C", 2.0, 2.0),
            ],
            vec![route("G", "#21ba45", &[&["Ax", "Bx", "Cx"]])],
        );

        // Run fills to [A, C, B, C]
        let geometry = provider.resolve_route(&RouteIdentifier::new("G")).unwrap();
        assert_eq!(
            coords(&geometry.polylines[0]),
            vec![(0.0, 0.0), (1.5, 1.5), (2.0, 2.0), (1.0, 1.0), (2.0, 2.0)]
        );
    }

    #[test]
    fn test_color_is_mapped() {
        let provider = StaticTransitProvider::from_data(
            vec![station("A", 0.0, 0.0)],
            vec![route("A", "#2185D0", &[&["AS"]])],
        );

        let geometry = provider.resolve_route(&RouteIdentifier::new("A")).unwrap();
        assert_relative_eq!(geometry.color.red, 0x21 as f32 / 255.0);
        assert_relative_eq!(geometry.color.alpha, 1.0);
    }

    #[test]
    fn test_unknown_route() {
        let provider = StaticTransitProvider::new();
        let err = provider.resolve_route(&RouteIdentifier::new("Z")).unwrap_err();
        assert!(matches!(err, TransitError::RouteNotFound(id) if id.as_str() == "Z"));
    }

    #[test]
    fn test_unknown_station_strict_and_lenient() {
        let stations = vec![station("A", 5.0, 6.0)];
        let routes = vec![route("A", "#2185d0", &[&["AS", "MISSINGS"]])];

        let strict = StaticTransitProvider::from_data(stations.clone(), routes.clone());
        let err = strict.resolve_route(&RouteIdentifier::new("A")).unwrap_err();
        assert!(matches!(
            err,
            TransitError::StationNotFound { ref station, .. } if station.as_str() == "MISSING"
        ));

        let lenient = StaticTransitProvider::from_data(stations, routes)
            .with_config(ResolverConfig::lenient());
        let geometry = lenient.resolve_route(&RouteIdentifier::new("A")).unwrap();
        assert_eq!(coords(&geometry.polylines[0]), vec![(6.0, 5.0), (0.0, 0.0)]);
    }

    #[test]
    fn test_resolve_all_routes_in_catalog_order() {
        let provider = StaticTransitProvider::from_data(
            vec![station("A", 0.0, 0.0), station("B", 1.0, 1.0)],
            vec![
                route("C", "#2185d0", &[&["AS", "BS"]]),
                route("A", "#2185d0", &[&["BS", "AS"]]),
                route("E", "#2185d0", &[]),
            ],
        );

        let geometries = provider.resolve_all_routes().unwrap();
        let ids: Vec<_> = geometries.iter().map(|g| g.route_id.as_str()).collect();
        assert_eq!(ids, ["C", "A", "E"]);
        assert!(geometries[2].polylines.is_empty());
    }

    #[test]
    fn test_resolve_all_fails_on_first_bad_route() {
        let provider = StaticTransitProvider::from_data(
            vec![station("A", 0.0, 0.0)],
            vec![
                route("A", "#2185d0", &[&["AS"]]),
                route("B", "#2185d0", &[&["ZS"]]),
            ],
        );

        assert!(provider.resolve_all_routes().is_err());
    }
}
