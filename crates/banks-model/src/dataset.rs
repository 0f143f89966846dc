//! Ordered record collections and the exchange-rate lookup.

use std::collections::BTreeMap;

use crate::currency::Currency;
use crate::record::BankRecord;

/// Ordered collection of transformed records.
///
/// Order is the order of the source document; it is preserved through every
/// sink.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<BankRecord>,
}

impl Dataset {
    pub fn new(records: Vec<BankRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[BankRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BankRecord> {
        self.records.iter()
    }
}

impl From<Vec<BankRecord>> for Dataset {
    fn from(records: Vec<BankRecord>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a BankRecord;
    type IntoIter = std::slice::Iter<'a, BankRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Multipliers from USD into other currencies.
///
/// Keyed by upper-case currency code. Codes the pipeline does not know about
/// are kept so the table mirrors its source file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExchangeRateTable {
    rates: BTreeMap<String, f64>,
}

impl ExchangeRateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the rate for `code`.
    pub fn insert(&mut self, code: &str, rate: f64) {
        self.rates.insert(code.trim().to_ascii_uppercase(), rate);
    }

    pub fn rate(&self, currency: Currency) -> Option<f64> {
        self.rates.get(currency.code()).copied()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<(S, f64)> for ExchangeRateTable {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (code, rate) in iter {
            table.insert(code.as_ref(), rate);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_lookup_ignores_case() {
        let table: ExchangeRateTable = [("eur", 0.93), ("GBP", 0.8)].into_iter().collect();
        assert_eq!(table.rate(Currency::Eur), Some(0.93));
        assert_eq!(table.rate(Currency::Gbp), Some(0.8));
        assert_eq!(table.rate(Currency::Inr), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn later_entries_replace_earlier_ones() {
        let table: ExchangeRateTable = [("EUR", 0.9), ("EUR", 0.93)].into_iter().collect();
        assert_eq!(table.len(), 1);
        assert_eq!(table.rate(Currency::Eur), Some(0.93));
    }
}
