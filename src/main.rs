//! lifegrid - CLI entry point
//!
//! Headless driver for the simulation engine: loads or randomizes a grid,
//! drives the animation timer, and renders snapshots to the terminal.

use clap::{Parser, Subcommand};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::{Color, Stylize};
use crossterm::terminal::{Clear, ClearType};
use lifegrid::config::{CellColor, DisplayConfig};
use lifegrid::stats::StatsHistory;
use lifegrid::{savefile, Config, Grid, RuleVariant, RunState, Simulation, DIM};
use std::io;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "lifegrid")]
#[command(version)]
#[command(about = "Game of Life and HighLife on a toroidal grid")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run generations from a save file, or from a random grid
    Run {
        /// Save file (.lif) to start from; starts random when omitted
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Configuration file (YAML)
        #[arg(short, long, default_value = "config.yaml")]
        config: PathBuf,

        /// Number of generations to run
        #[arg(short, long, default_value = "100")]
        steps: u64,

        /// Rule variant override: life or highlife
        #[arg(short, long)]
        rule: Option<RuleVariant>,

        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,

        /// Save the final grid to this path
        #[arg(long)]
        save: Option<PathBuf>,

        /// Write a JSON stats history to this path
        #[arg(long)]
        stats_out: Option<PathBuf>,

        /// Redraw the grid every generation at the configured rate
        #[arg(short, long)]
        watch: bool,

        /// Quiet mode (minimal output)
        #[arg(short, long)]
        quiet: bool,
    },

    /// Inspect a save file
    Analyze {
        /// Save file to inspect
        file: PathBuf,
    },

    /// Generate default configuration file
    Init {
        /// Output path
        #[arg(short, long, default_value = "config.yaml")]
        output: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            file,
            config,
            steps,
            rule,
            seed,
            save,
            stats_out,
            watch,
            quiet,
        } => run_simulation(file, config, steps, rule, seed, save, stats_out, watch, quiet),

        Commands::Analyze { file } => analyze_save_file(file),

        Commands::Init { output } => generate_config(output),
    }
}

#[allow(clippy::too_many_arguments)]
fn run_simulation(
    file: Option<PathBuf>,
    config_path: PathBuf,
    steps: u64,
    rule: Option<RuleVariant>,
    seed: Option<u64>,
    save: Option<PathBuf>,
    stats_out: Option<PathBuf>,
    watch: bool,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Load or create config
    let config = if config_path.exists() {
        println!("Loading config from: {:?}", config_path);
        Config::from_file(&config_path)?
    } else {
        println!("Using default configuration");
        Config::default()
    };

    let mut sim = match seed {
        Some(s) => Simulation::new_with_seed(s),
        None => Simulation::new(),
    };
    sim.set_rule(config.rule);

    match &file {
        Some(path) => sim.load_from(path)?,
        None => {
            println!("Starting from a random grid (seed {})", sim.seed());
            sim.randomize();
        }
    }

    if let Some(variant) = rule {
        sim.set_rule(variant);
    }

    if !quiet {
        println!("Starting simulation");
        println!("  Grid: {}x{} (toroidal)", DIM, DIM);
        println!("  Rule: {}", sim.rule());
        println!("  Rate: {}", config.timer.rate);
        println!("  Generations: {}", steps);
        println!();
    }

    // A stopped timer would never fire; drive at least rate 1
    sim.play(config.timer.rate.max(1));

    let mut history = StatsHistory::new();
    let stats_interval = config.logging.stats_interval;
    let start = Instant::now();
    let mut out = io::stdout();

    for _ in 0..steps {
        sim.tick();

        if sim.generation() % stats_interval == 0 {
            history.record(sim.stats().clone());
        }

        if watch {
            execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
            print!("{}", render(sim.grid(), &config.display));
            println!("{}", sim.stats().summary());
            if let Some(interval) = sim.tick_interval() {
                std::thread::sleep(interval);
            }
        } else if !quiet && sim.generation() % stats_interval == 0 {
            println!("{}", sim.stats().summary());
        }

        if sim.run_state() == RunState::Stopped {
            println!("\nEvery cell died at generation {}", sim.generation());
            break;
        }
    }

    let elapsed = start.elapsed();

    if !watch {
        println!();
        print!("{}", render(sim.grid(), &config.display));
    }

    println!();
    println!("=== Run Complete ===");
    println!("Generations: {}", sim.generation());
    println!("Alive: {}", sim.alive_count());
    println!("Time: {:.2}s", elapsed.as_secs_f64());

    if let Some(path) = stats_out {
        history.save(&path.to_string_lossy())?;
        println!("Stats history: {:?}", path);
    }

    if let Some(path) = save {
        sim.save_to(&path)?;
        println!("Saved: {:?}", path);
    }

    Ok(())
}

fn analyze_save_file(file: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let (snapshot, rule) = savefile::load(&file)?;

    println!("=== Save File ===");
    println!("File: {:?}", file);
    println!("Rule: {}", rule);
    println!("Alive: {}/{}", snapshot.live_count(), DIM * DIM);
    println!();

    for row in 0..DIM {
        let mut line = String::with_capacity(DIM);
        for col in 0..DIM {
            line.push(if snapshot.is_alive(row, col) { '#' } else { '.' });
        }
        println!("{}", line);
    }

    Ok(())
}

fn generate_config(output: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    config.save(&output)?;
    println!("Configuration saved to: {:?}", output);
    Ok(())
}

/// Render the grid with the configured palette, two columns per cell
fn render(grid: &Grid, display: &DisplayConfig) -> String {
    let mut out = String::new();
    for row in grid.rows() {
        for cell in row {
            let color = terminal_color(display.color_for(cell.category()));
            out.push_str(&format!("{}", "██".with(color)));
        }
        out.push('\n');
    }
    out
}

fn terminal_color(color: CellColor) -> Color {
    match color {
        CellColor::Black => Color::Black,
        CellColor::Green => Color::Green,
        CellColor::Yellow => Color::Yellow,
        CellColor::Red => Color::Red,
        CellColor::Blue => Color::Blue,
        CellColor::Orange => Color::Rgb {
            r: 255,
            g: 165,
            b: 0,
        },
    }
}
