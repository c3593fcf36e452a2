//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_resolve() {
    match parse(&["stamp", "resolve", "/"]) {
        CliCommand::Resolve { path } => assert_eq!(path, "/"),
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_points() {
    match parse(&["stamp", "points", "E-Ting"]) {
        CliCommand::Points { name } => assert_eq!(name, "E-Ting"),
        _ => panic!("expected Points"),
    }
}

#[test]
fn cli_parse_card() {
    match parse(&["stamp", "card", "/S-Ting"]) {
        CliCommand::Card { path } => assert_eq!(path, "/S-Ting"),
        _ => panic!("expected Card"),
    }
}

#[test]
fn cli_parse_rejects_missing_argument() {
    assert!(Cli::try_parse_from(["stamp", "points"]).is_err());
    assert!(Cli::try_parse_from(["stamp"]).is_err());
}
