// Flight search engine: route filtering, cheapest flight and price ordering

use std::cmp::Ordering;

use serde::Serialize;
use tracing::debug;

use crate::catalog::FlightCatalog;
use crate::flight::Flight;

// Price comparison of the cheapest option against the most expensive one on a route
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostAnalysis<'a> {
    pub cheapest: &'a Flight,
    pub most_expensive: &'a Flight,
    pub savings: f64,
    pub savings_percentage: f64,
}

// Aggregate view of one route served by the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    pub departure_city: String,
    pub arrival_city: String,
    pub flight_count: usize,
    pub min_price: f64,
    pub max_price: f64,
    pub durations: Vec<String>,
}

/// Read-only queries over a [`FlightCatalog`].
///
/// The engine owns its catalog and never mutates it. Every query is
/// recomputed from the catalog on each call and hands back borrows of the
/// catalog's flights, so results stay valid for as long as the engine does.
#[derive(Debug, Clone)]
pub struct FlightSearchEngine {
    catalog: FlightCatalog,
}

// The built-in schedule
impl Default for FlightSearchEngine {
    fn default() -> Self {
        Self::new(FlightCatalog::initialize())
    }
}

impl FlightSearchEngine {
    pub fn new(catalog: FlightCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &FlightCatalog {
        &self.catalog
    }

    // Flights on the route, in catalog order
    pub fn search_flights(&self, from_city: &str, to_city: &str) -> Vec<&Flight> {
        let mut matching = Vec::new();

        for flight in &self.catalog {
            if flight.serves(from_city, to_city) {
                matching.push(flight);
            }
        }

        debug!(
            from = from_city,
            to = to_city,
            matches = matching.len(),
            "searched flights"
        );
        matching
    }

    /// Cheapest flight on the route, or `None` when nothing flies it.
    ///
    /// When several flights share the lowest price the one listed first in
    /// the catalog wins.
    pub fn find_minimum_cost_flight(&self, from_city: &str, to_city: &str) -> Option<&Flight> {
        let mut cheapest: Option<&Flight> = None;

        for flight in self.search_flights(from_city, to_city) {
            match cheapest {
                Some(current) if current.price <= flight.price => {}
                _ => cheapest = Some(flight),
            }
        }

        cheapest
    }

    // Flights on the route ordered by ascending price; ties keep catalog order
    pub fn get_all_flights_sorted_by_price(&self, from_city: &str, to_city: &str) -> Vec<&Flight> {
        let mut flights = self.search_flights(from_city, to_city);
        // sort_by is stable
        flights.sort_by(|a, b| compare_price(a, b));
        flights
    }

    /// Savings of the cheapest flight over the most expensive one.
    ///
    /// Only defined for routes with at least two flights. Among equally
    /// priced flights the first in catalog order is reported on both ends.
    pub fn cost_analysis(&self, from_city: &str, to_city: &str) -> Option<CostAnalysis<'_>> {
        let flights = self.search_flights(from_city, to_city);
        if flights.len() < 2 {
            return None;
        }

        let mut cheapest = flights[0];
        let mut most_expensive = flights[0];
        for &flight in &flights[1..] {
            if flight.price < cheapest.price {
                cheapest = flight;
            }
            if flight.price > most_expensive.price {
                most_expensive = flight;
            }
        }

        let savings = most_expensive.price - cheapest.price;
        let savings_percentage = if most_expensive.price > 0.0 {
            savings / most_expensive.price * 100.0
        } else {
            0.0
        };

        Some(CostAnalysis {
            cheapest,
            most_expensive,
            savings,
            savings_percentage,
        })
    }

    // One summary per distinct route, in order of first appearance
    pub fn routes(&self) -> Vec<RouteSummary> {
        let mut routes: Vec<RouteSummary> = Vec::new();

        for flight in &self.catalog {
            let existing = routes.iter_mut().find(|r| {
                r.departure_city == flight.departure_city && r.arrival_city == flight.arrival_city
            });

            match existing {
                Some(route) => {
                    route.flight_count += 1;
                    route.min_price = route.min_price.min(flight.price);
                    route.max_price = route.max_price.max(flight.price);
                    if !route.durations.contains(&flight.duration) {
                        route.durations.push(flight.duration.clone());
                    }
                }
                None => routes.push(RouteSummary {
                    departure_city: flight.departure_city.clone(),
                    arrival_city: flight.arrival_city.clone(),
                    flight_count: 1,
                    min_price: flight.price,
                    max_price: flight.price,
                    durations: vec![flight.duration.clone()],
                }),
            }
        }

        routes
    }
}

fn compare_price(a: &Flight, b: &Flight) -> Ordering {
    a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal)
}
