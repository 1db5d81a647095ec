use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use super::{Cli, Command, Field, SetAll};

fn parse(args: &[&str]) -> Cli {
	Cli::try_parse_from(std::iter::once("prefkit").chain(args.iter().copied())).unwrap()
}

#[test]
fn command_definition_is_valid() {
	Cli::command().debug_assert();
}

#[test]
fn global_flags_follow_subcommand() {
	let cli = parse(&["show", "--file", "/tmp/p.json", "-v"]);
	assert!(cli.verbose);
	assert_eq!(cli.file, Some(PathBuf::from("/tmp/p.json")));
	assert!(matches!(cli.command, Command::Show));
}

#[test]
fn set_accepts_negative_values() {
	let cli = parse(&["set", "count", "-5"]);
	match cli.command {
		Command::Set { field, value } => {
			assert_eq!(field, Field::Count);
			assert_eq!(value, "-5");
		}
		other => panic!("unexpected command {other:?}"),
	}
}

#[test]
fn set_all_parses_typed_values() {
	let cli = parse(&[
		"set-all", "--name", "abc", "--flag", "true", "--count", "42", "--ratio", "-0.5",
	]);
	let Command::SetAll(values) = cli.command else {
		panic!("expected set-all");
	};
	assert_eq!(
		values,
		SetAll {
			name: Some("abc".into()),
			flag: Some(true),
			count: Some(42),
			ratio: Some(-0.5),
			..SetAll::default()
		}
	);
	assert!(!values.is_empty());
}

#[test]
fn set_all_rejects_bad_numbers() {
	let args = ["prefkit", "set-all", "--count", "many"];
	assert!(Cli::try_parse_from(args).is_err());
}

#[test]
fn unknown_field_is_rejected() {
	assert!(Cli::try_parse_from(["prefkit", "get", "colour"]).is_err());
}

#[test]
fn field_keys_are_distinct() {
	let mut keys: Vec<_> = Field::ALL.iter().map(|f| f.key()).collect();
	keys.sort_unstable();
	keys.dedup();
	assert_eq!(keys.len(), Field::ALL.len());
}
