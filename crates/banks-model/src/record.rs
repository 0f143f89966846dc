//! Per-bank records.
//!
//! Extraction yields [`RankedBank`] values, which carry only what the source
//! document provides. The transform stage turns each one into a
//! [`BankRecord`] with the converted market caps filled in, so a record with
//! missing derived fields cannot be handed to a sink.

use serde::{Deserialize, Serialize};

use crate::currency::Currency;

/// Field names produced by extraction, in source order.
pub const EXTRACT_FIELDS: [&str; 3] = ["Rank", "Name", Currency::Usd.column_name()];

/// Field names of a fully transformed record, in output order.
pub const RECORD_FIELDS: [&str; 6] = [
    "Rank",
    "Name",
    Currency::Usd.column_name(),
    Currency::Eur.column_name(),
    Currency::Gbp.column_name(),
    Currency::Inr.column_name(),
];

/// One row of the source ranking table.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedBank {
    pub rank: u32,
    pub name: String,
    pub mc_usd_billion: f64,
}

impl RankedBank {
    pub fn new(rank: u32, name: impl Into<String>, mc_usd_billion: f64) -> Self {
        Self {
            rank,
            name: name.into(),
            mc_usd_billion,
        }
    }
}

/// A bank with its market cap in every supported currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankRecord {
    #[serde(rename = "Rank")]
    pub rank: u32,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "MC_USD_Billion")]
    pub mc_usd_billion: f64,
    #[serde(rename = "MC_EUR_Billion")]
    pub mc_eur_billion: f64,
    #[serde(rename = "MC_GBP_Billion")]
    pub mc_gbp_billion: f64,
    #[serde(rename = "MC_INR_Billion")]
    pub mc_inr_billion: f64,
}

impl BankRecord {
    /// Market cap in the given currency.
    pub fn market_cap(&self, currency: Currency) -> f64 {
        match currency {
            Currency::Usd => self.mc_usd_billion,
            Currency::Eur => self.mc_eur_billion,
            Currency::Gbp => self.mc_gbp_billion,
            Currency::Inr => self.mc_inr_billion,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_fields_extend_extract_fields() {
        assert_eq!(&RECORD_FIELDS[..3], &EXTRACT_FIELDS[..]);
        assert_eq!(
            RECORD_FIELDS[2..],
            [
                "MC_USD_Billion",
                "MC_EUR_Billion",
                "MC_GBP_Billion",
                "MC_INR_Billion"
            ]
        );
    }

    #[test]
    fn market_cap_follows_currency() {
        let record = BankRecord {
            rank: 1,
            name: "A Bank".to_string(),
            mc_usd_billion: 100.0,
            mc_eur_billion: 93.0,
            mc_gbp_billion: 80.0,
            mc_inr_billion: 8300.0,
        };
        let caps: Vec<f64> = Currency::ALL.iter().map(|c| record.market_cap(*c)).collect();
        assert_eq!(caps, vec![100.0, 93.0, 80.0, 8300.0]);
    }
}
