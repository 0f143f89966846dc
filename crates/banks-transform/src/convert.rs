//! Market-cap currency conversion.

use banks_model::{BankRecord, Currency, Dataset, ExchangeRateTable, RankedBank};
use tracing::trace;

use crate::error::{Result, TransformError};

/// Round to two decimal places, ties to even.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Convert a USD amount with `rate` and round it for output.
pub fn convert_amount(usd: f64, rate: f64) -> f64 {
    round2(usd * rate)
}

/// Derived-currency rates, resolved once per run.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DerivedRates {
    eur: f64,
    gbp: f64,
    inr: f64,
}

impl DerivedRates {
    fn resolve(rates: &ExchangeRateTable) -> Result<Self> {
        let mut resolved = [0.0; Currency::DERIVED.len()];
        for (slot, currency) in resolved.iter_mut().zip(Currency::DERIVED) {
            *slot = rates
                .rate(currency)
                .ok_or(TransformError::MissingRate { currency })?;
        }
        let [eur, gbp, inr] = resolved;
        Ok(Self { eur, gbp, inr })
    }
}

/// Add EUR, GBP and INR market caps to every bank.
///
/// All three rates must be present; the check happens before any row is
/// converted. Row order is preserved.
pub fn transform(banks: Vec<RankedBank>, rates: &ExchangeRateTable) -> Result<Dataset> {
    let derived = DerivedRates::resolve(rates)?;
    let records = banks
        .into_iter()
        .map(|bank| {
            let record = BankRecord {
                mc_eur_billion: convert_amount(bank.mc_usd_billion, derived.eur),
                mc_gbp_billion: convert_amount(bank.mc_usd_billion, derived.gbp),
                mc_inr_billion: convert_amount(bank.mc_usd_billion, derived.inr),
                rank: bank.rank,
                name: bank.name,
                mc_usd_billion: bank.mc_usd_billion,
            };
            trace!(rank = record.rank, "converted market cap");
            record
        })
        .collect::<Vec<_>>();
    Ok(Dataset::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rates() -> ExchangeRateTable {
        [("EUR", 0.93), ("GBP", 0.8), ("INR", 83.0)]
            .into_iter()
            .collect()
    }

    #[test]
    fn rounds_to_two_places() {
        assert_eq!(round2(93.000_000_000_001), 93.0);
        assert_eq!(round2(1.234_9), 1.23);
        assert_eq!(round2(1.235_1), 1.24);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn converts_fixed_sample() {
        let dataset = transform(vec![RankedBank::new(1, "A Bank", 100.0)], &rates()).unwrap();
        let record = &dataset.records()[0];
        assert_eq!(record.mc_eur_billion, 93.0);
        assert_eq!(record.mc_gbp_billion, 80.0);
        assert_eq!(record.mc_inr_billion, 8300.0);
        assert_eq!(record.mc_usd_billion, 100.0);
    }

    #[test]
    fn missing_currency_fails_before_conversion() {
        let rates: ExchangeRateTable = [("EUR", 0.93), ("INR", 83.0)].into_iter().collect();
        let err = transform(vec![RankedBank::new(1, "A", 1.0)], &rates).unwrap_err();
        assert!(matches!(
            err,
            TransformError::MissingRate {
                currency: Currency::Gbp
            }
        ));
    }

    #[test]
    fn empty_input_still_requires_rates() {
        assert!(transform(Vec::new(), &rates()).unwrap().is_empty());
        assert!(transform(Vec::new(), &ExchangeRateTable::new()).is_err());
    }
}
