// One-shot search report: cheapest flight, price-ordered list and cost analysis

use std::io::{self, Write};

use serde::Serialize;

use crate::config::MenuConfig;
use crate::flight::Flight;
use crate::search::{CostAnalysis, FlightSearchEngine};

#[derive(Debug, Clone, Serialize)]
pub struct SearchReport<'a> {
    pub departure_city: &'a str,
    pub arrival_city: &'a str,
    pub cheapest: Option<&'a Flight>,
    pub flights: Vec<&'a Flight>,
    pub analysis: Option<CostAnalysis<'a>>,
}

impl<'a> SearchReport<'a> {
    pub fn build(engine: &'a FlightSearchEngine, from_city: &'a str, to_city: &'a str) -> Self {
        Self {
            departure_city: from_city,
            arrival_city: to_city,
            cheapest: engine.find_minimum_cost_flight(from_city, to_city),
            flights: engine.get_all_flights_sorted_by_price(from_city, to_city),
            analysis: engine.cost_analysis(from_city, to_city),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn render<W: Write>(&self, out: &mut W, config: &MenuConfig) -> io::Result<()> {
        writeln!(out, "🛫 Flight Ticket Search System")?;
        writeln!(out, "{}", "=".repeat(50))?;
        writeln!(
            out,
            "Searching for flights from {} to {}...",
            self.departure_city, self.arrival_city
        )?;
        writeln!(out)?;

        let Some(cheapest) = self.cheapest else {
            writeln!(out, "❌ No flights found for the specified route.")?;
            return Ok(());
        };

        writeln!(out, "💰 MINIMUM COST FLIGHT FOUND:")?;
        writeln!(out, "{}", "-".repeat(30))?;
        writeln!(out, "{cheapest}")?;
        writeln!(out)?;

        writeln!(out, "📋 ALL AVAILABLE FLIGHTS (sorted by price):")?;
        writeln!(out, "{}", "-".repeat(50))?;
        for (i, flight) in self.flights.iter().enumerate() {
            writeln!(out, "{}. {}", i + 1, flight)?;
            if i == 0 {
                writeln!(out, "   ⭐ CHEAPEST OPTION")?;
            }
            writeln!(out)?;
        }

        if let Some(analysis) = &self.analysis {
            writeln!(out, "💡 Cost Analysis:")?;
            writeln!(out, "   Cheapest: {}", config.price(analysis.cheapest.price))?;
            writeln!(
                out,
                "   Most Expensive: {}",
                config.price(analysis.most_expensive.price)
            )?;
            writeln!(
                out,
                "   You save: {} ({:.1}%) by choosing the cheapest option!",
                config.price(analysis.savings),
                analysis.savings_percentage
            )?;
        }

        Ok(())
    }
}
