//! nationwide — full planning run over the Brazilian tower network.
//!
//! Synthesizes the 17-zone inventory (18,000 towers), computes neighbour
//! density and expansion tiers, plans one maintenance route per zone, and
//! writes `towers.csv`, `routes.csv`, and `route_metrics.csv`.
//!
//! ```text
//! RUST_LOG=debug cargo run --release -p nationwide -- --out ./output
//! cargo run -p nationwide -- --config plan.json --zones zones.csv
//! ```

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use tp_core::PlanConfig;
use tp_output::{CsvWriter, export_run};
use tp_route::RouteOptimizer;
use tp_spatial::{DensityEstimator, EquipmentDemand, ExpansionTier, assign_tiers};
use tp_synth::{CoordinateSynthesizer, InventorySummary};
use tp_zones::{ZoneCatalog, load_catalog_csv};

#[derive(Parser, Debug)]
#[command(author, version, about = "Synthesize the tower network, rank expansion candidates, and plan maintenance routes")]
struct Args {
    /// JSON `PlanConfig`; missing fields take their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Zone catalog CSV.  Defaults to the built-in Brazilian catalog.
    #[arg(long)]
    zones: Option<PathBuf>,

    /// Output directory, created if missing.
    #[arg(long, default_value = "output")]
    out: PathBuf,

    /// Override the configured RNG seed.
    #[arg(long)]
    seed: Option<u64>,
}

fn load_config(args: &Args) -> Result<PlanConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?
        }
        None => PlanConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    if let Some(n) = config.num_threads {
        rayon::ThreadPoolBuilder::new().num_threads(n).build_global()?;
    }

    let catalog = match &args.zones {
        Some(path) => load_catalog_csv(path)?,
        None => ZoneCatalog::brazil()?,
    };
    info!(zones = catalog.len(), towers = catalog.total_target(), seed = config.seed, "starting planning run");
    let t0 = Instant::now();

    // 1. Synthesize towers.
    let table = CoordinateSynthesizer::new(&config).synthesize_catalog(&catalog)?;
    let inventory = InventorySummary::from_table(&table);
    for (region, node) in &inventory.regions {
        info!(region = %region, towers = node.towers, states = node.states.len(), "inventory");
    }

    // 2. Density and expansion tiers.
    let density = DensityEstimator::from_config(&config)?.estimate(&table);
    let tiers = assign_tiers(&table, &density)?;
    let demand = EquipmentDemand::estimate(&table, &tiers)?;
    for tier in ExpansionTier::CANDIDATES {
        let d = &demand.by_tier[&tier];
        info!(tier = %tier, towers = d.towers, antennas = d.equipment.antennas, "expansion tier");
    }

    // 3. Routes.
    let plan = RouteOptimizer::from_config(&config)?.plan_catalog(&catalog, &table);
    let summary = plan.summary();

    // 4. Export.
    fs::create_dir_all(&args.out).with_context(|| format!("creating {}", args.out.display()))?;
    let mut writer = CsvWriter::new(&args.out)?;
    export_run(&mut writer, &table, &density, &tiers, &plan)?;

    info!(
        towers = table.len(),
        candidates = demand.towers,
        routed = summary.towers_routed,
        distance_km = summary.total_distance_km,
        time_hours = summary.total_time_hours,
        empty_zones = summary.empty_zones.len(),
        elapsed_ms = t0.elapsed().as_millis() as u64,
        out = %args.out.display(),
        "planning run complete"
    );
    Ok(())
}
