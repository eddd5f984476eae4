// Presentation settings for the menu and report front ends

use crate::catalog::{DEFAULT_FROM_CITY, DEFAULT_TO_CITY};
use crate::flight::CURRENCY_SYMBOL;

#[derive(Debug, Clone)]
pub struct MenuConfig {
    // Route searched by menu options 1 and 2
    pub default_from_city: String,
    pub default_to_city: String,
    pub currency_symbol: String,
    pub banner_width: usize,
    pub rule_width: usize,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            default_from_city: DEFAULT_FROM_CITY.to_string(),
            default_to_city: DEFAULT_TO_CITY.to_string(),
            currency_symbol: CURRENCY_SYMBOL.to_string(),
            banner_width: 60,
            rule_width: 40,
        }
    }
}

impl MenuConfig {
    pub fn price(&self, amount: f64) -> String {
        format!("{}{}", self.currency_symbol, crate::flight::format_amount(amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MenuConfig::default();

        assert_eq!(config.default_from_city, "Dhaka");
        assert_eq!(config.default_to_city, "Cox's Bazar");
        assert_eq!(config.currency_symbol, "৳");
        assert_eq!(config.price(9200.0), "৳9,200.00");
    }

    #[test]
    fn test_custom_currency_symbol() {
        let config = MenuConfig {
            currency_symbol: "BDT ".to_string(),
            ..Default::default()
        };

        assert_eq!(config.price(7500.0), "BDT 7,500.00");
    }
}
