//! LepaPlan CLI - coverage planning harness.
//!
//! Loads a TOML scene file, plans the coverage path, and writes the path
//! as a JSON document (plus an optional SVG audit file):
//!
//! ```text
//! lepa-plan configs/room.toml --out coverage.json --svg coverage.svg
//! ```

use std::env;
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{error, info};
use serde::Serialize;

use lepa_plan::io::{Scene, SvgConfig, SvgVisualizer};
use lepa_plan::{decompose, CoveragePlanner, Obstacle, PlanStats, Wall, Waypoint};

/// Default scene path when none is given on the command line.
const DEFAULT_SCENE: &str = "configs/room.toml";

/// Parsed command line options.
struct CliOptions {
    scene: PathBuf,
    out: PathBuf,
    svg: Option<PathBuf>,
}

/// Parse command line arguments.
///
/// Supports:
/// - `lepa-plan <scene.toml>` (positional)
/// - `lepa-plan --config <scene.toml>` / `-c <scene.toml>`
/// - `--out <path>` / `-o <path>` for the JSON output (default: coverage.json)
/// - `--svg <path>` for an SVG audit file
fn parse_args() -> Result<CliOptions, String> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut scene: Option<PathBuf> = None;
    let mut out = PathBuf::from("coverage.json");
    let mut svg = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" | "--out" | "-o" | "--svg" => {
                let flag = args[i].clone();
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| format!("{} requires a value", flag))?;
                match flag.as_str() {
                    "--config" | "-c" => scene = Some(PathBuf::from(value)),
                    "--out" | "-o" => out = PathBuf::from(value),
                    _ => svg = Some(PathBuf::from(value)),
                }
                i += 2;
            }
            "--help" | "-h" => {
                println!(
                    "usage: lepa-plan [scene.toml] [--out <path>] [--svg <path>]\n\
                     default scene: {}",
                    DEFAULT_SCENE
                );
                std::process::exit(0);
            }
            arg if !arg.starts_with('-') && scene.is_none() => {
                scene = Some(PathBuf::from(arg));
                i += 1;
            }
            arg => return Err(format!("unknown argument: {}", arg)),
        }
    }

    Ok(CliOptions {
        scene: scene.unwrap_or_else(|| PathBuf::from(DEFAULT_SCENE)),
        out,
        svg,
    })
}

/// Planning inputs, echoed into the output as opaque metadata.
#[derive(Serialize)]
struct SceneMeta<'a> {
    wall: &'a Wall,
    obstacles: &'a [Obstacle],
    resolution: f64,
}

/// The JSON document written for one planning run.
#[derive(Serialize)]
struct PlanDocument<'a> {
    name: &'a str,
    path: Vec<[f64; 2]>,
    meta: SceneMeta<'a>,
    stats: PlanStats,
}

fn run(opts: &CliOptions) -> Result<(), Box<dyn std::error::Error>> {
    info!("LepaPlan v{}", env!("CARGO_PKG_VERSION"));
    info!("Loading scene from {:?}", opts.scene);
    let scene = Scene::load(&opts.scene)?;

    let planner = CoveragePlanner::new(scene.planner.clone());
    let started = Instant::now();
    let result = planner.plan(&scene.wall, &scene.obstacles)?;
    let duration_ms = started.elapsed().as_secs_f64() * 1000.0;

    info!(
        "Planned scene '{}': {} waypoints over a {}x{} grid in {:.2}ms",
        scene.name,
        result.stats.waypoints,
        result.stats.grid_width,
        result.stats.grid_height,
        duration_ms
    );

    let document = PlanDocument {
        name: &scene.name,
        path: result.path.iter().map(|wp| wp.to_array()).collect(),
        meta: SceneMeta {
            wall: &scene.wall,
            obstacles: &scene.obstacles,
            resolution: scene.planner.resolution,
        },
        stats: result.stats,
    };
    std::fs::write(&opts.out, serde_json::to_string_pretty(&document)?)?;
    info!("Path saved to {:?}", opts.out);

    if let Some(ref svg_path) = opts.svg {
        save_svg(&scene, svg_path, result.path)?;
        info!("SVG saved to {:?}", svg_path);
    }

    Ok(())
}

/// Rebuild the occupancy grid for the audit rendering and write the SVG.
fn save_svg(
    scene: &Scene,
    svg_path: &Path,
    path: Vec<Waypoint>,
) -> Result<(), Box<dyn std::error::Error>> {
    let grid = decompose(&scene.wall, &scene.obstacles, &scene.planner)?;

    let title = if scene.name.is_empty() {
        "LepaPlan Coverage".to_string()
    } else {
        format!("LepaPlan Coverage - {}", scene.name)
    };

    SvgVisualizer::new(grid, SvgConfig::default())
        .with_title(title)
        .with_path(path)
        .save(svg_path)?;

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = match parse_args() {
        Ok(opts) => opts,
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(2);
        }
    };

    if let Err(e) = run(&opts) {
        error!("{}", e);
        std::process::exit(1);
    }
}
