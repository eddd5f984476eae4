//! `flight-search` - interactive flight search menu.

use std::io;

use flight_search::{init_logging, FlightCatalog, FlightSearchEngine, Menu, MenuConfig, Verbosity};

fn main() -> anyhow::Result<()> {
    // Keep log lines off the menu unless RUST_LOG asks for them
    init_logging(Verbosity::Quiet);

    let engine = FlightSearchEngine::new(FlightCatalog::initialize());
    let mut menu = Menu::new(
        engine,
        MenuConfig::default(),
        io::stdin().lock(),
        io::stdout().lock(),
    );
    menu.run()?;

    Ok(())
}
