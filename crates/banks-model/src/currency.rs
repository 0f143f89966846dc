//! Currencies the market cap is reported in.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency of a market-cap column.
///
/// USD is the source currency; the others are derived from it through an
/// exchange-rate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Inr,
}

impl Currency {
    /// Every market-cap currency, in output column order.
    pub const ALL: [Currency; 4] = [Currency::Usd, Currency::Eur, Currency::Gbp, Currency::Inr];

    /// Currencies derived from the USD value, in output column order.
    pub const DERIVED: [Currency; 3] = [Currency::Eur, Currency::Gbp, Currency::Inr];

    /// ISO 4217 code, as it appears in the exchange-rate file.
    pub const fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Inr => "INR",
        }
    }

    /// Name of the market-cap column for this currency.
    pub const fn column_name(&self) -> &'static str {
        match self {
            Currency::Usd => "MC_USD_Billion",
            Currency::Eur => "MC_EUR_Billion",
            Currency::Gbp => "MC_GBP_Billion",
            Currency::Inr => "MC_INR_Billion",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_leads_every_derived_currency() {
        assert_eq!(Currency::ALL[0], Currency::Usd);
        assert_eq!(&Currency::ALL[1..], &Currency::DERIVED[..]);
        assert_eq!(Currency::Inr.to_string(), "INR");
    }

    #[test]
    fn derived_columns_follow_output_order() {
        let columns: Vec<_> = Currency::DERIVED
            .iter()
            .map(Currency::column_name)
            .collect();
        assert_eq!(
            columns,
            vec!["MC_EUR_Billion", "MC_GBP_Billion", "MC_INR_Billion"]
        );
    }
}
