use std::path::PathBuf;

use anyhow::Result;
use bemine_flow::FlowState;
use clap::{Parser, ValueEnum};

/// Command-line arguments accepted by the `bemine` binary.
#[derive(Parser, Debug)]
#[command(
	name = "bemine",
	version,
	about = "Terminal valentine: a five-step interactive date-planning greeting"
)]
pub(crate) struct CliArgs {
	#[arg(
		long = "data-dir",
		value_name = "DIR",
		env = "BEMINE_DATA_DIR",
		help = "Directory holding the saved snapshot"
	)]
	pub(crate) data_dir: Option<PathBuf>,
	#[arg(
		long = "assets-dir",
		value_name = "DIR",
		env = "BEMINE_ASSETS_DIR",
		help = "Directory holding the cue and image assets"
	)]
	pub(crate) assets_dir: Option<PathBuf>,
	#[arg(
		long,
		value_name = "CMD",
		env = "BEMINE_PLAYER",
		help = "External audio player command for cue files"
	)]
	pub(crate) player: Option<String>,
	#[arg(long = "no-persist", help = "Keep the flow in memory, skip the snapshot file")]
	pub(crate) no_persist: bool,
	#[arg(long = "no-sound", help = "Disable audio cues")]
	pub(crate) no_sound: bool,
	#[arg(long, help = "Erase the saved snapshot and exit")]
	pub(crate) reset: bool,
	#[arg(long = "print-config", help = "Print the resolved configuration before running")]
	pub(crate) print_config: bool,
	#[arg(
		short = 'o',
		long,
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Format for the final flow state"
	)]
	pub(crate) output: OutputFormat,
}

/// How the final flow state is printed on exit.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}

/// Print the final state as readable lines.
pub(crate) fn print_plain(state: &FlowState) {
	println!("Step: {}", state.step);
	println!("Date type: {}", or_unset(&state.date_choice));
	println!("Place: {}", or_unset(state.display_place()));
}

/// Print the final state as the snapshot JSON blob.
pub(crate) fn print_json(state: &FlowState) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(state)?);
	Ok(())
}

fn or_unset(value: &str) -> &str {
	if value.is_empty() { "(not chosen)" } else { value }
}
