use anyhow::{Context, Result};
use clap::Parser;
use route_map_transit::config::{LookupPolicy, ResolverConfig};
use route_map_transit::identifiers::RouteIdentifier;
use route_map_transit::provider::StaticTransitProvider;
use route_map_transit::render::MapScene;
use std::path::PathBuf;

mod output;

use output::write_scene_geojson;

#[derive(Parser, Debug)]
#[command(
    name = "route-map-export",
    author,
    version,
    about = "Resolve route map geometry and write it as styled GeoJSON",
    long_about = "Loads a station catalog and a route catalog, fills gaps in each route's \
                  station runs from the station adjacency data, and writes one colored \
                  LineString feature per run.\n\n\
                  Features carry simplestyle stroke properties; the fitted initial map \
                  region is written as a `region` member of the FeatureCollection."
)]
struct Args {
    /// Station catalog (station-data.json)
    #[arg(short, long)]
    stations: PathBuf,

    /// Route catalog (route-map-data.json)
    #[arg(short, long)]
    routes: PathBuf,

    /// Output GeoJSON file
    #[arg(short, long)]
    output: PathBuf,

    /// Only export these routes, in the given order (repeatable).
    /// Defaults to every route in catalog order.
    #[arg(long = "route", value_name = "ID")]
    route_ids: Vec<String>,

    /// Resolver config file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Use (0, 0) for missing coordinates and unknown stations instead of failing
    #[arg(long)]
    lenient: bool,

    /// Verbose output (show debug messages)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "info" }),
    )
    .format_timestamp(None)
    .init();

    let mut config = match &args.config {
        Some(path) => ResolverConfig::load(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?,
        None => ResolverConfig::default(),
    };
    if args.lenient {
        config.lookup = LookupPolicy::Lenient;
    }

    log::info!("Stations: {}", args.stations.display());
    log::info!("Routes: {}", args.routes.display());
    log::info!("Lookup policy: {:?}", config.lookup);

    let provider = StaticTransitProvider::from_documents(&args.stations, &args.routes, &config)
        .context("Failed to load reference data")?;

    let geometries = if args.route_ids.is_empty() {
        provider
            .resolve_all_routes()
            .context("Failed to resolve route geometry")?
    } else {
        args.route_ids
            .iter()
            .map(|id| {
                provider
                    .resolve_route(&RouteIdentifier::new(id))
                    .with_context(|| format!("Failed to resolve route {id}"))
            })
            .collect::<Result<Vec<_>>>()?
    };

    for geometry in &geometries {
        log::debug!(
            "  Route {}: {} runs, {} points",
            geometry.route_id,
            geometry.polylines.len(),
            geometry.point_count()
        );
    }
    log::info!("Resolved {} routes", geometries.len());

    let scene = MapScene::from_geometries(geometries, &config);
    let region = scene.region();
    log::info!(
        "Region: center ({:.6}, {:.6}), span {:.4} x {:.4}",
        region.latitude(),
        region.longitude(),
        region.latitude_delta,
        region.longitude_delta
    );

    write_scene_geojson(&scene, &args.output)?;

    log::info!("Done");
    Ok(())
}
