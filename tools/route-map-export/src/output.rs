use anyhow::{Context, Result};
use geo::LineString;
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, Value};
use route_map_transit::models::color::color_to_hex;
use route_map_transit::render::{MapRegion, MapScene, RouteOverlay};
use std::path::Path;

/// Convert a polyline to a GeoJSON LineString (positions are `[lon, lat]`)
fn line_to_geojson(line: &LineString<f64>) -> Value {
    Value::LineString(line.coords().map(|c| vec![c.x, c.y]).collect())
}

/// Create a GeoJSON Feature from an overlay, with simplestyle stroke properties
fn overlay_to_feature(overlay: &RouteOverlay) -> Feature {
    let mut properties = serde_json::Map::new();
    properties.insert("route".to_string(), serde_json::json!(overlay.route_id.as_str()));
    properties.insert("run".to_string(), serde_json::json!(overlay.run_index));
    properties.insert("stroke".to_string(), serde_json::json!(color_to_hex(overlay.color)));
    properties.insert("stroke-opacity".to_string(), serde_json::json!(overlay.color.alpha));
    properties.insert("stroke-width".to_string(), serde_json::json!(overlay.style.width));
    properties.insert(
        "stroke-linecap".to_string(),
        serde_json::json!(overlay.style.cap.as_str()),
    );

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(line_to_geojson(&overlay.line))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

fn region_to_json(region: MapRegion) -> serde_json::Value {
    serde_json::json!({
        "center": [region.longitude(), region.latitude()],
        "latitude_delta": region.latitude_delta,
        "longitude_delta": region.longitude_delta,
    })
}

/// Build a FeatureCollection with one feature per overlay and the initial
/// region as a foreign member
pub fn scene_to_geojson(scene: &MapScene) -> GeoJson {
    let features: Vec<Feature> = scene.overlays().iter().map(overlay_to_feature).collect();

    let mut foreign_members = JsonObject::new();
    foreign_members.insert("region".to_string(), region_to_json(scene.region()));

    GeoJson::from(FeatureCollection {
        bbox: None,
        features,
        foreign_members: Some(foreign_members),
    })
}

/// Write the scene to a GeoJSON file
pub fn write_scene_geojson(scene: &MapScene, output_path: &Path) -> Result<()> {
    log::info!(
        "Writing {} route lines to {}",
        scene.overlays().len(),
        output_path.display()
    );

    let geojson = scene_to_geojson(scene);
    let json_string =
        serde_json::to_string_pretty(&geojson).context("Failed to serialize GeoJSON")?;

    std::fs::write(output_path, json_string)
        .with_context(|| format!("Failed to write GeoJSON to {}", output_path.display()))?;

    Ok(())
}
