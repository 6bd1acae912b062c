//! Game of Life CLI - Run a pattern file headlessly for N generations.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use game_of_life::{
    compute::{Grid, GridStats},
    control::{Command, Simulation, SimulationObserver, SimulationState},
    pattern::PatternError,
    schema::SimConfig,
};

/// Prints a progress line every `every` advances.
struct Progress {
    every: u64,
    advances: u64,
    started: Instant,
}

impl SimulationObserver for Progress {
    fn on_generation_advanced(&mut self, grid: &Grid, generation: u64) {
        // Resets and loads report generation 1; only count real advances
        if generation == 1 {
            return;
        }
        self.advances += 1;
        if self.advances % self.every == 0 {
            let stats = GridStats::from_grid(grid);
            let elapsed = self.started.elapsed().as_secs_f32();
            println!(
                "  Generation {}: alive={} ({:.2}% of grid), {:.1} gen/s",
                generation,
                stats.alive_cells,
                stats.density * 100.0,
                self.advances as f32 / elapsed.max(f32::EPSILON),
            );
        }
    }

    fn on_load_failed(&mut self, error: &PatternError) {
        eprintln!("Error loading pattern: {}", error);
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && args[1] == "--example" {
        print_example_config();
        return;
    }

    if args.len() < 2 {
        eprintln!("Usage: {} <pattern.life> [generations]", args[0]);
        eprintln!();
        eprintln!("Run Conway's Game of Life headlessly from a pattern file.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  pattern.life  Pattern file; first line is a header, '*' or 'O' mark live cells");
        eprintln!("  generations   Number of generations to advance (default: 100)");
        eprintln!();
        eprintln!("A JSON config next to the pattern (<pattern>.config.json) overrides the");
        eprintln!("default 60x180 grid. Use --example to print the default configuration.");
        std::process::exit(1);
    }

    let pattern_path = PathBuf::from(&args[1]);
    let generations: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(100);

    // Load configuration sidecar if present
    let config_path = pattern_path.with_extension("config.json");
    let config: SimConfig = if config_path.exists() {
        let config_str = fs::read_to_string(&config_path).unwrap_or_else(|e| {
            eprintln!("Error reading config file: {}", e);
            std::process::exit(1);
        });
        serde_json::from_str(&config_str).unwrap_or_else(|e| {
            eprintln!("Error parsing config: {}", e);
            std::process::exit(1);
        })
    } else {
        SimConfig::default()
    };

    println!("Game of Life");
    println!("============");
    println!(
        "Grid: {}x{} (origin {},{})",
        config.rows, config.columns, config.origin_row, config.origin_column
    );
    println!("Pattern: {}", pattern_path.display());
    println!("Generations: {}", generations);
    println!();

    let observer = Progress {
        every: (generations / 10).max(1),
        advances: 0,
        started: Instant::now(),
    };

    let mut sim = Simulation::new(config, Box::new(observer)).unwrap_or_else(|e| {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    });

    sim.apply(Command::OpenPattern(pattern_path));
    if sim.state() != SimulationState::Startable {
        // Observer already reported the load failure
        std::process::exit(1);
    }

    let initial_stats = GridStats::from_grid(&sim.snapshot());
    println!(
        "Initial state: {} alive cells ({:.2}% of grid)",
        initial_stats.alive_cells,
        initial_stats.density * 100.0
    );
    println!();

    println!("Running simulation...");
    let start = Instant::now();
    for _ in 0..generations {
        sim.apply(Command::NextGeneration);
    }
    let elapsed = start.elapsed();

    let grid = sim.snapshot();
    let final_stats = GridStats::from_grid(&grid);

    println!();
    render(&grid);
    println!();
    println!(
        "Final state after {} generations: {} alive cells ({:.2}% of grid)",
        generations,
        final_stats.alive_cells,
        final_stats.density * 100.0
    );
    println!(
        "Time: {:.2}s ({:.1} gen/s)",
        elapsed.as_secs_f32(),
        generations as f32 / elapsed.as_secs_f32().max(f32::EPSILON)
    );
}

fn render(grid: &Grid) {
    for row in grid.row_slices() {
        let line: String = row.iter().map(|&alive| if alive { '*' } else { '.' }).collect();
        println!("{}", line);
    }
}

fn print_example_config() {
    let config = SimConfig::default();
    println!("Example configuration (<pattern>.config.json):");
    println!("{}", serde_json::to_string_pretty(&config).unwrap());
}
