use std::path::PathBuf;
use std::time::{Duration, Instant};

use agent_map::{
    Assessment, FixedClock, Heuristic, Map, MapError, Obstacle, Pathfinder, Point, SearchConfig,
};
use clap::Parser;
use serde::Deserialize;

/// Renders a map scenario and finds a safe route across it.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Path to a JSON scenario file.
    scenario: PathBuf,

    /// Give up searching for a route after this many milliseconds.
    #[arg(long, default_value_t = 30_000)]
    timeout_ms: u64,

    /// Estimate remaining cost with the Manhattan distance instead of the octile distance.
    #[arg(long)]
    manhattan: bool,
}

/// A map and the questions to ask about it.
#[derive(Deserialize)]
struct Scenario {
    obstacles: Vec<Obstacle>,
    /// The top-left and bottom-right corners of the area to draw.
    #[serde(default)]
    view: Option<[Point; 2]>,
    #[serde(default)]
    start: Option<Point>,
    #[serde(default)]
    target: Option<Point>,
    /// Pins the hour of day instead of reading the local clock.
    #[serde(default)]
    hour: Option<u32>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let content = std::fs::read_to_string(&args.scenario)?;
    let scenario: Scenario = serde_json::from_str(&content)?;

    let mut map = match scenario.hour {
        Some(hour) => Map::with_clock(FixedClock(hour)),
        None => Map::new(),
    };
    for obstacle in scenario.obstacles {
        map.add_obstacle(obstacle);
    }

    if let Some([top_left, bottom_right]) = scenario.view {
        match map.render(top_left, bottom_right) {
            Ok(grid) => print!("{grid}"),
            Err(err) => println!("Invalid map specification: {err}"),
        }
    }

    let Some(start) = scenario.start else {
        return Ok(());
    };
    println!("{}", Assessment::of(&map, start));

    let Some(target) = scenario.target else {
        return Ok(());
    };
    let config = SearchConfig {
        timeout: Duration::from_millis(args.timeout_ms),
        heuristic: if args.manhattan {
            Heuristic::Manhattan
        } else {
            Heuristic::Octile
        },
    };
    let started = Instant::now();
    match Pathfinder::with_config(&map, config).find_path(start, target) {
        Ok(path) => println!("The following path will take you to the objective:\n{path}"),
        Err(MapError::InvalidRequest { .. }) => println!("Agent, you are already at the objective."),
        Err(MapError::Timeout { .. }) => println!("Can't find safe path"),
        Err(MapError::NoPathFound) => println!("There is no safe path to the objective."),
        Err(err) => return Err(err.into()),
    }
    println!("Search took {:?}", started.elapsed());

    Ok(())
}
