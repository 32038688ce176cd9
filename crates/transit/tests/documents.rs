use std::path::{Path, PathBuf};

use approx::assert_relative_eq;
use route_map_transit::prelude::*;

fn data(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn load() -> StaticTransitProvider {
    StaticTransitProvider::from_documents(
        &data("station-data.json"),
        &data("route-map-data.json"),
        &ResolverConfig::default(),
    )
    .unwrap()
}

#[test]
fn test_load_bundled_documents() {
    let provider = load();
    assert_eq!(provider.station_count(), 6);

    let ids: Vec<_> = provider.route_ids().map(|id| id.as_str()).collect();
    assert_eq!(ids, ["A", "C", "S"]);
}

#[test]
fn test_express_run_matches_local_run() {
    let provider = load();
    let geometry = provider.resolve_route(&RouteIdentifier::new("A")).unwrap();

    // The express run A02 -> A09 is filled through every local station
    assert_eq!(geometry.polylines.len(), 2);
    assert_eq!(geometry.polylines[0], geometry.polylines[1]);
    assert_eq!(geometry.polylines[0].0.len(), 11);

    let points = &geometry.lat_lon_polylines()[0];
    assert_eq!(points[0], (40.868072, -73.919899));
    // First waypoint toward A03, stored as [lon, lat]
    assert_eq!(points[1], (40.866500, -73.921500));
    assert_eq!(points[10], (40.840719, -73.939561));
}

#[test]
fn test_resolve_all_routes() {
    let provider = load();
    let geometries = provider.resolve_all_routes().unwrap();

    let counts: Vec<_> = geometries.iter().map(|g| g.point_count()).collect();
    assert_eq!(counts, [22, 3, 4]);

    let gray = geometries[2].color;
    assert_relative_eq!(gray.red, 0x76 as f32 / 255.0);
    assert_relative_eq!(gray.red, gray.blue);
}

#[test]
fn test_scene_from_documents() {
    let provider = load();
    let scene = MapScene::from_geometries(provider.resolve_all_routes().unwrap(), provider.config());

    assert_eq!(scene.overlays().len(), 4);

    let region = scene.region();
    assert!(region.latitude() > 40.840719 && region.latitude() < 40.868072);
    assert!(region.longitude() > -73.939704 && region.longitude() < -73.919899);
}

#[test]
fn test_missing_documents() {
    let err = StaticTransitProvider::from_documents(
        &data("missing-station-data.json"),
        &data("route-map-data.json"),
        &ResolverConfig::default(),
    )
    .err()
    .unwrap();

    assert!(matches!(err, CatalogError::MissingResource { .. }));
    assert!(err.to_string().contains("missing-station-data.json"));
}
