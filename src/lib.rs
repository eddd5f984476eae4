// Flight search over a fixed in-memory catalog

pub mod catalog;
pub mod config;
pub mod error;
pub mod flight;
pub mod logging;
pub mod menu;
pub mod report;
pub mod search;

// Re-export key types for convenience
pub use catalog::{FlightCatalog, FlightRecord, FLIGHT_TABLE};
pub use config::MenuConfig;
pub use error::{CatalogError, MenuError};
pub use flight::Flight;
pub use logging::{init_logging, Verbosity};
pub use menu::{Menu, MenuChoice};
pub use report::SearchReport;
pub use search::{CostAnalysis, FlightSearchEngine, RouteSummary};
