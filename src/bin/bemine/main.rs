//! Command-line entry point for the bemine greeting.

mod cli;
mod config;
mod workflow;

use anyhow::{Context, Result};
use bemine_flow::{JsonFileStore, SnapshotStore};
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use config::Config;
use tracing_subscriber::EnvFilter;
use workflow::GreetingWorkflow;

fn main() -> Result<()> {
	// The terminal itself belongs to ratatui; diagnostics go to stderr and
	// are opt-in via RUST_LOG.
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.init();

	let cli = parse_cli();
	let config = Config::from_cli(&cli)?;

	if cli.print_config {
		println!(
			"Snapshot: {}",
			config
				.snapshot_path
				.as_deref()
				.map(|path| path.display().to_string())
				.unwrap_or_else(|| "(in memory)".to_string())
		);
		println!("Assets: {}", config.assets_dir.display());
		println!("Player: {}", config.player.as_deref().unwrap_or("(none)"));
	}

	if cli.reset {
		return erase_snapshot(&config);
	}

	let state = GreetingWorkflow::from_config(config).run()?;

	match cli.output {
		OutputFormat::Plain => print_plain(&state),
		OutputFormat::Json => print_json(&state)?,
	}

	Ok(())
}

/// Erase the persisted snapshot without running the UI.
fn erase_snapshot(config: &Config) -> Result<()> {
	match &config.snapshot_path {
		Some(path) => {
			JsonFileStore::new(path.clone())
				.clear()
				.with_context(|| format!("failed to erase snapshot {}", path.display()))?;
			println!("Snapshot erased.");
		}
		None => println!("Nothing is persisted with --no-persist."),
	}
	Ok(())
}
