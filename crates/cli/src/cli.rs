use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[cfg(test)]
mod tests;

#[derive(Parser, Debug)]
#[command(name = "prefkit")]
#[command(about = "Inspect and edit a sample preference file")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Preference file (defaults to <config dir>/prefkit/preferences.json)
	#[arg(long, short = 'f', global = true, value_name = "PATH")]
	pub file: Option<PathBuf>,

	/// Verbose logging
	#[arg(long, short = 'v', global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// Print every field with its current value
	Show,
	/// Print one field
	Get {
		/// Field to read.
		field: Field,
	},
	/// Set one field and commit
	Set {
		/// Field to write.
		field: Field,
		/// New value, parsed per the field's type.
		#[arg(allow_hyphen_values = true)]
		value: String,
	},
	/// Set several fields and commit them together
	SetAll(SetAll),
	/// Remove one field and commit
	Remove {
		/// Field to remove.
		field: Field,
	},
	/// Remove every stored value and commit
	Clear,
}

/// Fields written by `set-all`; omitted fields keep their stored value.
#[derive(Args, Debug, Default, PartialEq)]
pub struct SetAll {
	#[arg(long)]
	pub name: Option<String>,
	#[arg(long)]
	pub flag: Option<bool>,
	#[arg(long, allow_hyphen_values = true)]
	pub count: Option<i32>,
	#[arg(long, allow_hyphen_values = true)]
	pub total: Option<i64>,
	#[arg(long, allow_hyphen_values = true)]
	pub ratio: Option<f32>,
	#[arg(long, allow_hyphen_values = true)]
	pub precise: Option<f64>,
}

impl SetAll {
	pub fn is_empty(&self) -> bool {
		*self == Self::default()
	}
}

/// The sample preference fields.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
	Name,
	Flag,
	Count,
	Total,
	Ratio,
	Precise,
}

impl Field {
	pub const ALL: [Field; 6] = [
		Field::Name,
		Field::Flag,
		Field::Count,
		Field::Total,
		Field::Ratio,
		Field::Precise,
	];

	/// Store key the field is kept under.
	pub fn key(self) -> &'static str {
		match self {
			Field::Name => "name",
			Field::Flag => "flag",
			Field::Count => "count",
			Field::Total => "total",
			Field::Ratio => "ratio",
			Field::Precise => "precise",
		}
	}
}
