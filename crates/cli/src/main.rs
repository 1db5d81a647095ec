//! `prefkit`: a sample preference set over a JSON preference file.

mod cli;
mod sample;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, bail};
use clap::Parser;
use cli::{Cli, Command, Field};
use prefkit::{EditorRegistry, JsonFileStore, PreferenceSet};
use sample::SamplePrefs;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);

	let path = cli.file.unwrap_or_else(default_path);
	let store = Arc::new(
		JsonFileStore::open(&path)
			.with_context(|| format!("failed to open preferences at {}", path.display()))?,
	);
	let prefs = SamplePrefs::new(store.clone(), Arc::new(EditorRegistry::new()));
	tracing::debug!(path = %path.display(), "prefkit.opened");

	run(&prefs, cli.command)?;
	store.flush();
	Ok(())
}

/// Executes one subcommand against `prefs`.
fn run(prefs: &SamplePrefs, command: Command) -> anyhow::Result<()> {
	let staged = match command {
		Command::Show => {
			for field in Field::ALL {
				println!("{} = {}", field.key(), sample::read(prefs, field)?);
			}
			return Ok(());
		}
		Command::Get { field } => {
			println!("{}", sample::read(prefs, field)?);
			return Ok(());
		}
		Command::Set { field, value } => sample::stage(prefs, field, &value),
		Command::SetAll(values) => {
			if values.is_empty() {
				bail!("set-all needs at least one field");
			}
			sample::stage_all(prefs, values)
		}
		Command::Remove { field } => sample::remove(prefs, field),
		Command::Clear => {
			prefs.clear();
			Ok(())
		}
	};
	if let Err(error) = staged {
		prefs.discard();
		return Err(error);
	}

	if !prefs.commit() {
		bail!("failed to commit preferences");
	}
	Ok(())
}

/// `<config dir>/prefkit/preferences.json`, or the working directory when
/// the platform has no config dir.
fn default_path() -> PathBuf {
	dirs::config_dir()
		.map(|dir| dir.join("prefkit"))
		.unwrap_or_else(|| PathBuf::from("."))
		.join("preferences.json")
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("debug")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}
