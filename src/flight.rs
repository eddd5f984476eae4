// Flight records and price formatting

use std::fmt;

use serde::{Deserialize, Serialize};

pub const CURRENCY_SYMBOL: &str = "৳";

// A single scheduled flight. Times and duration are display strings, kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub id: String,
    pub airline: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub price: f64,
    pub departure_city: String,
    pub arrival_city: String,
    pub duration: String,
}

impl Flight {
    /// Returns true when this flight flies `from_city` -> `to_city`.
    ///
    /// Both sides are compared in full with ASCII case folding only, so
    /// "Cox's Bazar" and "Coxs Bazar" are different cities.
    pub fn serves(&self, from_city: &str, to_city: &str) -> bool {
        self.departure_city.eq_ignore_ascii_case(from_city)
            && self.arrival_city.eq_ignore_ascii_case(to_city)
    }

    pub fn formatted_price(&self) -> String {
        format!("{}{}", CURRENCY_SYMBOL, format_amount(self.price))
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Flight {} - {}", self.id, self.airline)?;
        writeln!(f, "Route: {} → {}", self.departure_city, self.arrival_city)?;
        writeln!(f, "Departure: {}", self.departure_time)?;
        writeln!(f, "Arrival: {}", self.arrival_time)?;
        writeln!(f, "Duration: {}", self.duration)?;
        write!(f, "Price: {}", self.formatted_price())
    }
}

// Two decimals with comma thousands separators, e.g. 7500.0 -> "7,500.00"
pub fn format_amount(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{cents}")
}
