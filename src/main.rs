/* 3rd party libraries */
use clap::Parser;
use log::{info, warn};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/* Custom libraries */
use config::LoggingConfig;
use console::{Console, ReportFormat};
use elevator::TripPlanner;

/* Modules */
mod config;
mod console;
mod elevator;
mod error;
mod shared;

/* Command line */
#[derive(Parser, Debug)]
#[clap(name = "elevator-sim", version, about = "Ride a simulated elevator and time the trip")]
struct Args {
    /// Path to the configuration file
    #[clap(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Markdown file with a "### Rules" section, overrides the configuration
    #[clap(short, long)]
    rules: Option<PathBuf>,

    /// Do not print the welcome banner
    #[clap(long)]
    no_banner: bool,

    /// Print each trip report as a single JSON line
    #[clap(long)]
    json: bool,
}

fn init_logging(config: &LoggingConfig) {
    env_logger::Builder::new()
        .parse_filters(&config.level)
        .parse_env("RUST_LOG")
        .init();
}

/* Main */
fn main() -> Result<(), error::SimulatorError> {
    let args = Args::parse();

    // Load the configuration
    let config_found = args.config.is_file();
    let config = unwrap_or_exit!(config::load_config(&args.config));
    init_logging(&config.logging);
    if !config_found {
        warn!("Configuration file {} not found, using defaults", args.config.display());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Welcome the rider
    if config.simulator.show_banner && !args.no_banner {
        console::banner::print_banner(&mut out)?;
    }
    let rules_path = args.rules.unwrap_or(config.simulator.rules_path);
    console::rules::print_rules(&rules_path, &mut out)?;

    // Ride until the input runs out
    let planner = TripPlanner::new(config.simulator.travel_time_per_floor);
    let format = if args.json { ReportFormat::Json } else { ReportFormat::Text };
    info!(
        "Starting simulator, {} per floor, {:?} reports",
        planner.travel_time_per_floor(),
        format
    );

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), BufWriter::new(out), planner, format);
    console.run()?;

    info!("Elevator left on floor {}", console.session().get_current_floor());
    console.into_output().flush()?;
    Ok(())
}
