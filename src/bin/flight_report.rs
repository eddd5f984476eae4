//! `flight-report` - print the cheapest flight and price-ordered options for a route.

use std::io::{self, Write};

use clap::Parser;
use tracing::info;

use flight_search::{
    catalog::{DEFAULT_FROM_CITY, DEFAULT_TO_CITY},
    init_logging, FlightCatalog, FlightSearchEngine, MenuConfig, SearchReport, Verbosity,
};

#[derive(Debug, Parser)]
#[command(name = "flight-report", version, about = "Find the cheapest flight on a route")]
struct Cli {
    /// Departure city
    #[arg(long, default_value = DEFAULT_FROM_CITY)]
    from: String,

    /// Arrival city
    #[arg(long, default_value = DEFAULT_TO_CITY)]
    to: String,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(Verbosity::from_flags(cli.quiet, cli.verbose));

    let engine = FlightSearchEngine::new(FlightCatalog::initialize());
    let report = SearchReport::build(&engine, &cli.from, &cli.to);
    info!(from = %cli.from, to = %cli.to, flights = report.flights.len(), "report built");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        writeln!(out, "{}", report.to_json()?)?;
    } else {
        report.render(&mut out, &MenuConfig::default())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["flight-report"]);
        assert_eq!(cli.from, "Dhaka");
        assert_eq!(cli.to, "Cox's Bazar");
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from(["flight-report", "--from", "Sylhet", "--to", "Dhaka", "--json", "-vv"]);
        assert_eq!(cli.from, "Sylhet");
        assert_eq!(cli.to, "Dhaka");
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["flight-report", "-q", "-v"]).is_err());
    }
}
