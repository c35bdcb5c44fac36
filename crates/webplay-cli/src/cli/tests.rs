//! CLI parse tests.

use super::Cli;
use clap::Parser;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_url_only() {
    let cli = parse(&["webplay", "https://example.com/videos"]);
    assert_eq!(cli.url, "https://example.com/videos");
    assert!(cli.range.is_none());
}

#[test]
fn cli_parse_url_and_range() {
    let cli = parse(&["webplay", "https://example.com/videos", "2-4"]);
    assert_eq!(cli.url, "https://example.com/videos");
    assert_eq!(cli.range.as_deref(), Some("2-4"));
}

#[test]
fn cli_parse_single_number_range() {
    let cli = parse(&["webplay", "https://example.com/videos", "3"]);
    assert_eq!(cli.range.as_deref(), Some("3"));
}

#[test]
fn cli_requires_url() {
    assert!(Cli::try_parse_from(["webplay"]).is_err());
}
