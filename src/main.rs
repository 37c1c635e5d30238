//! Plotcycle CLI - inspect and apply plot lifecycle status changes

use clap::Parser;
use plotcycle::cli::{commands, Cli, Commands};
use plotcycle::config::load_config;
use plotcycle::errors::{to_exit_code, PlotcycleError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over the verbosity flags
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

fn run(cli: Cli) -> plotcycle::Result<()> {
    let config = load_config(cli.config.as_deref())
        .map_err(|e| PlotcycleError::wrap(e, "Failed to load configuration"))?;

    match cli.command {
        Some(Commands::Statuses { json }) => commands::statuses::run(json),
        Some(Commands::Next { status, json }) => commands::next::run(&status, json),
        Some(Commands::Check { from, to }) => commands::check::run(&from, &to),
        Some(Commands::Graph { json }) => commands::graph::run(json),
        Some(Commands::Apply { plot, to, reason }) => {
            commands::apply::run(&plot, &to, &reason, cli.dry_run)
        }
        Some(Commands::Labor {
            plot,
            kind,
            completed,
            today,
        }) => commands::labor::run(&plot, &kind, &completed, today, &config, cli.dry_run),
        Some(Commands::Attention { plot, today }) => {
            commands::attention::run(&plot, today, &config)
        }
        None => {
            // Default to showing help - clap handles this
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
