// Flight catalog: the fixed, read-only set of flights the engine searches over

use tracing::{trace, warn};

use crate::error::CatalogError;
use crate::flight::Flight;

// Row of the compiled-in flight table
#[derive(Debug, Clone, Copy)]
pub struct FlightRecord {
    pub id: &'static str,
    pub airline: &'static str,
    pub departure_time: &'static str,
    pub arrival_time: &'static str,
    pub price: f64,
    pub departure_city: &'static str,
    pub arrival_city: &'static str,
    pub duration: &'static str,
}

impl From<&FlightRecord> for Flight {
    fn from(record: &FlightRecord) -> Self {
        Flight {
            id: record.id.to_string(),
            airline: record.airline.to_string(),
            departure_time: record.departure_time.to_string(),
            arrival_time: record.arrival_time.to_string(),
            price: record.price,
            departure_city: record.departure_city.to_string(),
            arrival_city: record.arrival_city.to_string(),
            duration: record.duration.to_string(),
        }
    }
}

pub const DEFAULT_FROM_CITY: &str = "Dhaka";
pub const DEFAULT_TO_CITY: &str = "Cox's Bazar";

// Mock schedule, in catalog (insertion) order
pub const FLIGHT_TABLE: [FlightRecord; 6] = [
    FlightRecord {
        id: "BG101",
        airline: "Biman Bangladesh Airlines",
        departure_time: "08:00",
        arrival_time: "09:15",
        price: 8500.0,
        departure_city: DEFAULT_FROM_CITY,
        arrival_city: DEFAULT_TO_CITY,
        duration: "1h 15m",
    },
    FlightRecord {
        id: "BG103",
        airline: "Biman Bangladesh Airlines",
        departure_time: "14:30",
        arrival_time: "15:45",
        price: 9200.0,
        departure_city: DEFAULT_FROM_CITY,
        arrival_city: DEFAULT_TO_CITY,
        duration: "1h 15m",
    },
    FlightRecord {
        id: "US101",
        airline: "US-Bangla Airlines",
        departure_time: "07:30",
        arrival_time: "08:50",
        price: 7800.0,
        departure_city: DEFAULT_FROM_CITY,
        arrival_city: DEFAULT_TO_CITY,
        duration: "1h 20m",
    },
    FlightRecord {
        id: "US103",
        airline: "US-Bangla Airlines",
        departure_time: "16:00",
        arrival_time: "17:20",
        price: 8100.0,
        departure_city: DEFAULT_FROM_CITY,
        arrival_city: DEFAULT_TO_CITY,
        duration: "1h 20m",
    },
    FlightRecord {
        id: "NS201",
        airline: "Novoair",
        departure_time: "09:45",
        arrival_time: "11:00",
        price: 7500.0,
        departure_city: DEFAULT_FROM_CITY,
        arrival_city: DEFAULT_TO_CITY,
        duration: "1h 15m",
    },
    FlightRecord {
        id: "NS203",
        airline: "Novoair",
        departure_time: "15:15",
        arrival_time: "16:30",
        price: 7900.0,
        departure_city: DEFAULT_FROM_CITY,
        arrival_city: DEFAULT_TO_CITY,
        duration: "1h 15m",
    },
];

/// Immutable collection of flights.
///
/// Membership is fixed when the catalog is built; there is no way to add,
/// change or remove a flight afterwards. Flight ids are not required to be
/// unique.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightCatalog {
    flights: Vec<Flight>,
}

impl FlightCatalog {
    // Build the catalog from the compiled-in table
    pub fn initialize() -> Self {
        let flights: Vec<Flight> = FLIGHT_TABLE.iter().map(Flight::from).collect();
        trace!(count = flights.len(), "catalog initialized from static table");
        Self { flights }
    }

    // Build a catalog from arbitrary flights, e.g. for tests or benchmarks
    pub fn from_flights(flights: Vec<Flight>) -> Result<Self, CatalogError> {
        if let Some(bad) = flights
            .iter()
            .find(|f| !f.price.is_finite() || f.price < 0.0)
        {
            warn!(id = %bad.id, price = bad.price, "rejecting flight with invalid price");
            return Err(CatalogError::InvalidPrice {
                id: bad.id.clone(),
                price: bad.price,
            });
        }

        trace!(count = flights.len(), "catalog built from supplied flights");
        Ok(Self { flights })
    }

    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Flight> {
        self.flights.iter()
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }
}

impl<'a> IntoIterator for &'a FlightCatalog {
    type Item = &'a Flight;
    type IntoIter = std::slice::Iter<'a, Flight>;

    fn into_iter(self) -> Self::IntoIter {
        self.flights.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flight(id: &str, price: f64) -> Flight {
        Flight {
            id: id.to_string(),
            airline: "Test Airlines".to_string(),
            departure_time: "10:00".to_string(),
            arrival_time: "11:00".to_string(),
            price,
            departure_city: "A".to_string(),
            arrival_city: "B".to_string(),
            duration: "1h".to_string(),
        }
    }

    #[test]
    fn test_initialize_loads_static_table() {
        let catalog = FlightCatalog::initialize();

        assert_eq!(catalog.len(), 6);
        assert!(!catalog.is_empty());

        let ids: Vec<&str> = catalog.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["BG101", "BG103", "US101", "US103", "NS201", "NS203"]);

        assert!(catalog
            .iter()
            .all(|f| f.departure_city == "Dhaka" && f.arrival_city == "Cox's Bazar"));
    }

    #[test]
    fn test_initialize_is_deterministic() {
        assert_eq!(FlightCatalog::initialize(), FlightCatalog::initialize());
    }

    #[test]
    fn test_record_conversion_keeps_fields() {
        let flight = Flight::from(&FLIGHT_TABLE[4]);

        assert_eq!(flight.id, "NS201");
        assert_eq!(flight.airline, "Novoair");
        assert_eq!(flight.departure_time, "09:45");
        assert_eq!(flight.arrival_time, "11:00");
        assert_eq!(flight.price, 7500.0);
        assert_eq!(flight.duration, "1h 15m");
    }

    #[test]
    fn test_from_flights_accepts_empty_and_duplicates() {
        let empty = FlightCatalog::from_flights(vec![]).unwrap();
        assert!(empty.is_empty());

        let dupes =
            FlightCatalog::from_flights(vec![flight("X1", 100.0), flight("X1", 0.0)]).unwrap();
        assert_eq!(dupes.len(), 2);
        assert_eq!(dupes.flights()[1].price, 0.0);
    }

    #[test]
    fn test_from_flights_rejects_invalid_prices() {
        let negative = FlightCatalog::from_flights(vec![flight("OK1", 10.0), flight("BAD", -1.0)]);
        assert_eq!(
            negative,
            Err(CatalogError::InvalidPrice {
                id: "BAD".to_string(),
                price: -1.0
            })
        );

        let nan = FlightCatalog::from_flights(vec![flight("NAN", f64::NAN)]);
        assert!(matches!(nan, Err(CatalogError::InvalidPrice { ref id, .. }) if id == "NAN"));

        let inf = FlightCatalog::from_flights(vec![flight("INF", f64::INFINITY)]);
        assert!(inf.is_err());
    }

    #[test]
    fn test_into_iterator_for_reference() {
        let catalog = FlightCatalog::initialize();
        let mut count = 0;
        for f in &catalog {
            assert!(f.price >= 0.0);
            count += 1;
        }
        assert_eq!(count, catalog.len());
    }
}
