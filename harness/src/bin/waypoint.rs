//! `waypoint`: run search strategies over the maze catalog.
//!
//! ```text
//! waypoint --strategy c --maze -1 --csv results.csv
//! ```
//!
//! Logs go to stderr (`RUST_LOG` overrides the default `info` filter);
//! stdout carries the per-run summaries.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use waypoint_harness::report::{write_csv_file, write_json_file};
use waypoint_harness::runner::{run_catalog, RunRecordV1};
use waypoint_harness::worlds::maze_catalog::{self, MazeCase, CATALOG_SIZE};
use waypoint_search::{SearchPolicyV1, Strategy};

/// Run uninformed and informed search strategies over numbered mazes.
#[derive(Parser, Debug)]
#[command(name = "waypoint", version)]
struct Args {
    /// Strategy: b (breadth-first), d (depth-first), a (A*), g (greedy),
    /// s (bidirectional), or c for all of them
    #[arg(short, long, default_value = "c")]
    strategy: String,

    /// Maze number from 1 to 11, or -1 for every maze
    #[arg(short, long, default_value_t = -1, allow_negative_numbers = true)]
    maze: i64,

    /// Write a CSV table of the runs to this path
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the canonical JSON report to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Load a search policy from a JSON file
    #[arg(long)]
    policy: Option<PathBuf>,

    /// Stop each search after this many expansions (overrides --policy)
    #[arg(long)]
    max_expansions: Option<u64>,

    /// Print each maze before running it, and each run's route after it
    #[arg(long)]
    print_maze: bool,

    /// Suppress the per-run summaries on stdout
    #[arg(short, long)]
    quiet: bool,
}

fn parse_strategies(selector: &str) -> Result<Vec<Strategy>, String> {
    if selector.trim().eq_ignore_ascii_case("c") {
        return Ok(Strategy::ALL.to_vec());
    }
    selector
        .parse::<Strategy>()
        .map(|s| vec![s])
        .map_err(|e| e.to_string())
}

fn select_cases(maze: i64) -> Result<Vec<MazeCase>, String> {
    if maze == -1 {
        return maze_catalog::all_cases().map_err(|e| e.to_string());
    }
    let number = u32::try_from(maze)
        .map_err(|_| format!("invalid maze number {maze} (expected 1..={CATALOG_SIZE} or -1)"))?;
    maze_catalog::case(number)
        .map(|case| vec![case])
        .map_err(|e| e.to_string())
}

fn load_policy(args: &Args) -> Result<SearchPolicyV1, String> {
    let mut policy = match &args.policy {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("reading {}: {e}", path.display()))?;
            serde_json::from_str(&text).map_err(|e| format!("parsing {}: {e}", path.display()))?
        }
        None => SearchPolicyV1::default(),
    };
    if let Some(max) = args.max_expansions {
        policy.max_expansions = Some(max);
    }
    policy.validate().map_err(|e| e.to_string())?;
    Ok(policy)
}

fn print_summary(record: &RunRecordV1) {
    println!("{}", record.run);
    println!(
        "  Nodes allocated: {}  Frontier high water: {}",
        record.stats.nodes_allocated, record.stats.frontier_high_water
    );
    println!("  Elapsed time: {:.4}s", record.elapsed.as_secs_f64());
    println!("  Path length: {}", record.path_length);
    if record.strategy.is_informed() {
        println!(
            "  Reached replacements: {}  Stale pops: {}",
            record.stats.reached_replacements, record.stats.stale_pops
        );
    }
    println!("  Path: {:?}", record.path);
}

fn run(args: &Args) -> Result<(), String> {
    let strategies = parse_strategies(&args.strategy)?;
    let cases = select_cases(args.maze)?;
    let policy = load_policy(args)?;

    let mut records = Vec::new();
    for case in &cases {
        info!(maze = case.number, label = case.label, "running maze");
        if args.print_maze {
            println!("Maze {}: {}", case.number, case.label);
            print!("{}", case.problem.render());
        }
        let runs = run_catalog(std::slice::from_ref(case), &strategies, &policy)
            .map_err(|e| e.to_string())?;
        if !args.quiet {
            runs.iter().for_each(print_summary);
        }
        if args.print_maze {
            for record in runs.iter().filter(|r| r.found_path()) {
                println!("Route {}:", record.run);
                print!("{}", case.problem.render_path(&record.path));
            }
        }
        records.extend(runs);
    }

    if let Some(path) = &args.csv {
        write_csv_file(path, &records).map_err(|e| format!("{}: {e}", path.display()))?;
        info!(path = %path.display(), rows = records.len(), "wrote csv report");
    }
    if let Some(path) = &args.json {
        write_json_file(path, &records).map_err(|e| format!("{}: {e}", path.display()))?;
        info!(path = %path.display(), "wrote json report");
    }
    Ok(())
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("{message}");
            ExitCode::FAILURE
        }
    }
}
