//! RoverNav - Mission driver for planet-map
//!
//! Replays a planet scenario through the exploration engine: the scenario
//! file plays the ground truth, the binary plays the rover. Each round it
//! scans the current node, asks the decision engine for a heading, and
//! traverses the matching path, until exploration completes, the assigned
//! target is reached, or the step limit runs out.

mod config;
mod error;
mod mission;
mod scenario;

use config::NavConfig;
use error::{NavError, Result};
use mission::Mission;
use scenario::Scenario;

use clap::Parser;
use planet_map::{DecisionEngine, Node};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "rover-nav",
    version,
    about = "Replay a planet scenario through the exploration engine"
)]
struct Args {
    /// Scenario file (YAML ground truth)
    scenario: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the exploration RNG
    #[arg(long)]
    seed: Option<u64>,

    /// Route to this node instead of exploring freely, as "x,y"
    #[arg(long, value_parser = parse_node)]
    target: Option<Node>,

    /// Stop after this many traversal attempts
    #[arg(long)]
    max_steps: Option<usize>,
}

fn parse_node(text: &str) -> std::result::Result<Node, String> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| format!("expected \"x,y\", got {:?}", text))?;
    let x = x.trim().parse().map_err(|e| format!("bad x coordinate: {}", e))?;
    let y = y.trim().parse().map_err(|e| format!("bad y coordinate: {}", e))?;
    Ok(Node::new(x, y))
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rover_nav=info".parse().unwrap())
                .add_directive("planet_map=info".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            NavConfig::load(path)?
        }
        None if Path::new("rover.toml").exists() => {
            info!("Loading configuration from rover.toml");
            NavConfig::load(Path::new("rover.toml"))?
        }
        None => NavConfig::default(),
    };

    info!("RoverNav v{}", env!("CARGO_PKG_VERSION"));

    let scenario_path = args
        .scenario
        .or(config.scenario)
        .ok_or_else(|| NavError::Config("no scenario file given (argument or config)".into()))?;
    let scenario = Scenario::load(&scenario_path)?;
    info!(
        "Scenario \"{}\": {} nodes, {} paths, start {}",
        scenario.name,
        scenario.node_count(),
        scenario.paths.len(),
        scenario.start.node
    );

    // CLI overrides config overrides the scenario's own assignment
    let target = args.target.or(config.target).or(scenario.target);
    if let Some(target) = target {
        info!("Routing towards {}", target);
    }

    let rng = match args.seed.or(config.seed) {
        Some(seed) => {
            info!("Seeding exploration RNG with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };
    let engine = DecisionEngine::from_rng(rng);

    let max_steps = args.max_steps.unwrap_or(config.max_steps);
    let report = Mission::new(scenario, engine, target, max_steps).run()?;

    info!(
        "Mission finished: {} after {} steps, {} nodes visited, parked at {}",
        report.outcome, report.steps, report.nodes_visited, report.final_position
    );
    Ok(())
}
