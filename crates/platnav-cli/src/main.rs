//! platnav CLI - build and inspect platformer navigation graphs.
//!
//! - `platnav graph <level>` - classify a level and dump nodes and edges
//! - `platnav path <level> --from x,y --to x,y` - answer a path query

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, EnvFilter};

use platnav::{NavConfig, PlatformNav, TileMap, Vec2};

#[derive(Parser)]
#[command(name = "platnav")]
#[command(about = "Platformer navigation graph inspector", version)]
struct Cli {
    /// Settings file (YAML); defaults apply when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the graph for a level and dump its nodes and edges
    Graph {
        /// ASCII level file: `#` solid, `.` open
        level: PathBuf,
    },

    /// Query a path between two world positions
    Path {
        /// ASCII level file: `#` solid, `.` open
        level: PathBuf,

        /// Start position, `x,y` in world units
        #[arg(long, value_parser = parse_vec2)]
        from: Vec2,

        /// Destination position, `x,y` in world units
        #[arg(long, value_parser = parse_vec2)]
        to: Vec2,
    },
}

/// CLI settings, loaded from YAML.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct Settings {
    #[serde(default = "default_cell_size")]
    cell_size: f32,

    #[serde(default)]
    nav: NavConfig,
}

fn default_cell_size() -> f32 {
    16.0
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cell_size: default_cell_size(),
            nav: NavConfig::default(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let settings = load_settings(cli.config.as_deref())?;

    match cli.command {
        Commands::Graph { level } => graph_command(&level, &settings),
        Commands::Path { level, from, to } => path_command(&level, &settings, from, to),
    }
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading settings from {}", path.display()))?;
    let settings =
        serde_yaml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    Ok(settings)
}

fn load_nav(level: &Path, settings: &Settings) -> Result<PlatformNav> {
    let text = std::fs::read_to_string(level)
        .with_context(|| format!("reading level from {}", level.display()))?;
    let map = TileMap::from_ascii(&text, settings.cell_size)
        .with_context(|| format!("parsing level {}", level.display()))?;
    tracing::debug!(tiles = map.len(), cell_size = settings.cell_size, "level loaded");

    let nav = PlatformNav::build(&map, settings.nav).context("building navigation graph")?;
    tracing::info!(
        nodes = nav.nodes().len(),
        edges = nav.graph().edge_count(),
        "graph built"
    );
    Ok(nav)
}

fn graph_command(level: &Path, settings: &Settings) -> Result<()> {
    let nav = load_nav(level, settings)?;

    for node in nav.nodes() {
        println!(
            "#{:<4} cell ({:>4},{:>4})  world ({:>8.1},{:>8.1})  {:?}",
            node.id.0, node.cell.x, node.cell.y, node.position.x, node.position.y, node.flags
        );
    }

    for node in nav.nodes() {
        for other in nav.graph().neighbors(node.id) {
            let both_ways = nav.graph().has_edge(other, node.id);
            // Undirected pairs print once, from the lower id.
            if both_ways && other.0 < node.id.0 {
                continue;
            }
            let arrow = if both_ways { "<->" } else { "-->" };
            println!("#{} {} #{}", node.id.0, arrow, other.0);
        }
    }

    Ok(())
}

fn path_command(level: &Path, settings: &Settings, from: Vec2, to: Vec2) -> Result<()> {
    let nav = load_nav(level, settings)?;

    let points = nav.path(from, to);
    if points.is_empty() {
        println!("no path from ({},{}) to ({},{})", from.x, from.y, to.x, to.y);
        return Ok(());
    }

    for (i, point) in points.iter().enumerate() {
        println!(
            "{:>3}: ({:>8.1},{:>8.1})  {:?}",
            i, point.position.x, point.position.y, point.flags
        );
    }

    Ok(())
}

fn parse_vec2(arg: &str) -> Result<Vec2, String> {
    let (x, y) = arg
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{arg}`"))?;
    let x: f32 = x
        .trim()
        .parse()
        .map_err(|_| format!("invalid x coordinate `{x}`"))?;
    let y: f32 = y
        .trim()
        .parse()
        .map_err(|_| format!("invalid y coordinate `{y}`"))?;
    Ok(Vec2::new(x, y))
}
