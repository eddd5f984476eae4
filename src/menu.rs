// Interactive text menu over the flight search engine

use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use tracing::{debug, info};

use crate::config::MenuConfig;
use crate::error::MenuError;
use crate::flight::Flight;
use crate::search::FlightSearchEngine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CheapestOnDefaultRoute,
    AllOnDefaultRoute,
    CustomRoute,
    ListRoutes,
    Exit,
}

impl MenuChoice {
    // Anything other than "1".."5" (after trimming) is invalid
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::CheapestOnDefaultRoute),
            "2" => Some(Self::AllOnDefaultRoute),
            "3" => Some(Self::CustomRoute),
            "4" => Some(Self::ListRoutes),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Menu session reading choices from `input` and printing to `output`.
///
/// End of input at any prompt ends the session the same way as choosing
/// exit, so `run` only fails on I/O errors.
pub struct Menu<R, W> {
    engine: FlightSearchEngine,
    config: MenuConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(engine: FlightSearchEngine, config: MenuConfig, input: R, output: W) -> Self {
        Self {
            engine,
            config,
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self) -> Result<(), MenuError> {
        info!("menu session started");
        self.print_banner()?;

        loop {
            self.print_menu()?;

            let Some(line) = self.prompt("Enter your choice (1-5): ")? else {
                return self.goodbye();
            };

            let flow = match MenuChoice::parse(&line) {
                Some(choice) => {
                    debug!(?choice, "menu choice");
                    self.handle(choice)?
                }
                None => {
                    debug!(input = %line.trim(), "invalid menu choice");
                    writeln!(self.output, "❌ Invalid choice. Please enter 1-5.")?;
                    ControlFlow::Continue(())
                }
            };

            if flow.is_break() {
                return Ok(());
            }
            if self.prompt("\nPress Enter to continue...")?.is_none() {
                return self.goodbye();
            }
        }
    }

    // Break once the session has ended and its closing message is written
    fn handle(&mut self, choice: MenuChoice) -> Result<ControlFlow<()>, MenuError> {
        match choice {
            MenuChoice::CheapestOnDefaultRoute => self.show_cheapest_on_default_route()?,
            MenuChoice::AllOnDefaultRoute => self.show_all_on_default_route()?,
            MenuChoice::CustomRoute => return self.search_custom_route(),
            MenuChoice::ListRoutes => self.show_available_routes()?,
            MenuChoice::Exit => {
                writeln!(
                    self.output,
                    "\n👋 Thank you for using Bangladesh Flight Search!"
                )?;
                writeln!(self.output, "   Safe travels! ✈️")?;
                info!("menu session ended");
                return Ok(ControlFlow::Break(()));
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn print_banner(&mut self) -> Result<(), MenuError> {
        let rule = "=".repeat(self.config.banner_width);
        writeln!(self.output, "\n{rule}")?;
        writeln!(self.output, "🛫 BANGLADESH FLIGHT SEARCH SYSTEM 🛬")?;
        writeln!(self.output, "   Find the cheapest flights across Bangladesh")?;
        writeln!(self.output, "{rule}")?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<(), MenuError> {
        let from = &self.config.default_from_city;
        let to = &self.config.default_to_city;

        writeln!(self.output, "\n📋 MENU OPTIONS:")?;
        writeln!(self.output, "1. Search {from} → {to} (Minimum Cost)")?;
        writeln!(self.output, "2. Search {from} → {to} (All Flights)")?;
        writeln!(self.output, "3. Search any route")?;
        writeln!(self.output, "4. View all available routes")?;
        writeln!(self.output, "5. Exit")?;
        writeln!(self.output, "{}", "-".repeat(self.config.rule_width))?;
        Ok(())
    }

    fn show_cheapest_on_default_route(&mut self) -> Result<(), MenuError> {
        let from = self.config.default_from_city.as_str();
        let to = self.config.default_to_city.as_str();

        writeln!(self.output, "\n🔍 Searching for cheapest flight: {from} → {to}")?;
        writeln!(self.output, "{}", "-".repeat(50))?;

        match self.engine.find_minimum_cost_flight(from, to) {
            Some(flight) => {
                writeln!(self.output, "💰 CHEAPEST FLIGHT FOUND:")?;
                writeln!(self.output, "{flight}")?;

                if let Some(analysis) = self.engine.cost_analysis(from, to) {
                    writeln!(
                        self.output,
                        "\n💡 You save {} compared to the most expensive option!",
                        self.config.price(analysis.savings)
                    )?;
                }
            }
            None => writeln!(self.output, "❌ No flights found.")?,
        }
        Ok(())
    }

    fn show_all_on_default_route(&mut self) -> Result<(), MenuError> {
        let from = self.config.default_from_city.as_str();
        let to = self.config.default_to_city.as_str();

        writeln!(
            self.output,
            "\n📋 All flights: {from} → {to} (sorted by price)"
        )?;
        writeln!(self.output, "{}", "-".repeat(55))?;

        let flights = self.engine.get_all_flights_sorted_by_price(from, to);
        let (Some(first), Some(last)) = (flights.first(), flights.last()) else {
            writeln!(self.output, "❌ No flights found.")?;
            return Ok(());
        };

        write_flight_list(&mut self.output, &self.config, &flights)?;
        writeln!(
            self.output,
            "\n📊 Summary: {} flights available",
            flights.len()
        )?;
        writeln!(
            self.output,
            "💰 Price range: {} - {}",
            self.config.price(first.price),
            self.config.price(last.price)
        )?;
        Ok(())
    }

    fn search_custom_route(&mut self) -> Result<ControlFlow<()>, MenuError> {
        writeln!(self.output, "\n🗺️  Custom Route Search")?;
        writeln!(self.output, "{}", "-".repeat(30))?;

        let Some(from_city) = self.prompt("From city: ")? else {
            self.goodbye()?;
            return Ok(ControlFlow::Break(()));
        };
        let Some(to_city) = self.prompt("To city: ")? else {
            self.goodbye()?;
            return Ok(ControlFlow::Break(()));
        };
        let (from_city, to_city) = (from_city.trim(), to_city.trim());

        if from_city.is_empty() || to_city.is_empty() {
            writeln!(self.output, "❌ Please enter valid city names.")?;
            return Ok(ControlFlow::Continue(()));
        }

        writeln!(self.output, "\n🔍 Searching: {from_city} → {to_city}")?;

        let flights = self
            .engine
            .get_all_flights_sorted_by_price(from_city, to_city);
        if flights.is_empty() {
            writeln!(self.output, "❌ No flights found for this route.")?;
            writeln!(self.output, "💡 Currently available routes:")?;
            for route in self.engine.routes() {
                writeln!(
                    self.output,
                    "   • {} → {}",
                    route.departure_city, route.arrival_city
                )?;
            }
        } else {
            writeln!(self.output, "✅ Found {} flight(s):", flights.len())?;
            write_flight_list(&mut self.output, &self.config, &flights)?;
        }

        Ok(ControlFlow::Continue(()))
    }

    fn show_available_routes(&mut self) -> Result<(), MenuError> {
        writeln!(self.output, "\n🗺️  AVAILABLE FLIGHT ROUTES")?;
        writeln!(self.output, "{}", "-".repeat(35))?;

        let routes = self.engine.routes();
        if routes.is_empty() {
            writeln!(self.output, "No routes available.")?;
            return Ok(());
        }

        writeln!(self.output, "Currently supported routes:")?;
        for route in &routes {
            writeln!(
                self.output,
                "✈️  {} → {}",
                route.departure_city, route.arrival_city
            )?;
            writeln!(
                self.output,
                "   📍 {} daily flights available",
                route.flight_count
            )?;
            writeln!(
                self.output,
                "   💰 Price range: {} - {}",
                self.config.price(route.min_price),
                self.config.price(route.max_price)
            )?;
            writeln!(
                self.output,
                "   ⏱️  Duration: {}",
                route.durations.join(", ")
            )?;
        }
        writeln!(self.output, "\n💡 More routes coming soon!")?;
        Ok(())
    }

    fn goodbye(&mut self) -> Result<(), MenuError> {
        writeln!(self.output, "\n\n👋 Goodbye!")?;
        info!("menu session ended on end of input");
        Ok(())
    }

    // None on end of input
    fn prompt(&mut self, text: &str) -> Result<Option<String>, MenuError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

// Numbered concise summaries; the first entry of a price-ordered list is the cheapest
fn write_flight_list<W: Write>(
    out: &mut W,
    config: &MenuConfig,
    flights: &[&Flight],
) -> Result<(), MenuError> {
    for (i, flight) in flights.iter().enumerate() {
        writeln!(out, "\n{}.", i + 1)?;
        write_flight_summary(out, config, flight, i == 0)?;
    }
    Ok(())
}

fn write_flight_summary<W: Write>(
    out: &mut W,
    config: &MenuConfig,
    flight: &Flight,
    is_cheapest: bool,
) -> Result<(), MenuError> {
    let status = if is_cheapest { "⭐ CHEAPEST" } else { "" };
    writeln!(out, "✈️  {} | {}", flight.id, flight.airline)?;
    writeln!(
        out,
        "    {} → {} ({})",
        flight.departure_time, flight.arrival_time, flight.duration
    )?;
    writeln!(out, "    💰 {} {}", config.price(flight.price), status)?;
    Ok(())
}
