use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "ownership-cmd")]
#[command(about = "Demonstrates the OwnershipCell lifecycle")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Construct a cell, move it into a second cell, then free the second one
    Demo {
        /// Value to place in the first cell
        #[arg(long, default_value_t = 42, allow_negative_numbers = true)]
        value: i64,
    },

    /// Walk a cell through every lifecycle transition and print its state
    Lifecycle {
        /// Value to place in the cell
        #[arg(long, default_value_t = 42, allow_negative_numbers = true)]
        value: i64,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut out = std::io::stdout().lock();
    match cli.command.unwrap_or(Commands::Demo { value: 42 }) {
        Commands::Demo { value } => commands::demo::run(value, &mut out),
        Commands::Lifecycle { value } => commands::lifecycle::run(value, &mut out),
    }
}
