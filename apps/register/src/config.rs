//! # Register Configuration
//!
//! Runtime configuration for the register, loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TALLY_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use crate::receipt::RenderFormat;

/// Register configuration.
///
/// ## Fields
/// All fields have sensible defaults for development. The demo customer
/// lives here too: the register has no customer database, so who is
/// standing at the till is a configuration matter.
#[derive(Debug, Clone)]
pub struct RegisterConfig {
    /// Store name (displayed on receipts)
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Receipt output format (text or JSON)
    pub output: RenderFormat,

    /// Age of the demo customer, in whole years
    pub customer_age: u32,

    /// Whether the demo customer holds a prescription
    pub customer_has_prescription: bool,
}

impl Default for RegisterConfig {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Store: "Tally Dev Store"
    /// - Currency: $ with 2 decimals
    /// - Output: text receipt
    /// - Customer: age 20, prescription in hand (buys everything)
    fn default() -> Self {
        RegisterConfig {
            store_name: "Tally Dev Store".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            output: RenderFormat::Text,
            customer_age: 20,
            customer_has_prescription: true,
        }
    }
}

impl RegisterConfig {
    /// Creates a new RegisterConfig from environment variables and
    /// defaults.
    ///
    /// ## Environment Variables
    /// - `TALLY_STORE_NAME`: Override store name
    /// - `TALLY_OUTPUT`: "text" or "json"
    /// - `TALLY_CUSTOMER_AGE`: Override demo customer age
    /// - `TALLY_PRESCRIPTION`: "true" or "false"
    ///
    /// Unparseable values fall back to the default silently.
    pub fn from_env() -> Self {
        let mut config = RegisterConfig::default();

        if let Ok(store_name) = std::env::var("TALLY_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(output) = std::env::var("TALLY_OUTPUT") {
            match output.to_lowercase().as_str() {
                "json" => config.output = RenderFormat::Json,
                "text" => config.output = RenderFormat::Text,
                _ => {}
            }
        }

        if let Ok(age_str) = std::env::var("TALLY_CUSTOMER_AGE") {
            if let Ok(age) = age_str.parse::<u32>() {
                config.customer_age = age;
            }
        }

        if let Ok(rx_str) = std::env::var("TALLY_PRESCRIPTION") {
            if let Ok(rx) = rx_str.parse::<bool>() {
                config.customer_has_prescription = rx;
            }
        }

        config
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = RegisterConfig::default();
    /// assert_eq!(config.format_currency(1910), "$19.10");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = (cents / divisor).abs();
        let frac = (cents % divisor).abs();
        let sign = if cents < 0 { "-" } else { "" };

        if self.currency_decimals == 0 {
            format!("{sign}{}{whole}", self.currency_symbol)
        } else {
            format!(
                "{sign}{}{whole}.{frac:0width$}",
                self.currency_symbol,
                width = self.currency_decimals as usize
            )
        }
    }
}
