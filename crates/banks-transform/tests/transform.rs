//! Integration tests for rate loading and conversion.

use std::io::Write;

use banks_model::{Currency, ExchangeRateTable, RankedBank};
use banks_transform::{TransformError, load_exchange_rates, round2, transform, transform_file};
use proptest::prelude::*;
use tempfile::{NamedTempFile, TempDir};

fn rates_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn sample_banks() -> Vec<RankedBank> {
    vec![
        RankedBank::new(1, "A Bank", 100.0),
        RankedBank::new(2, "B Bank", 50.0),
        RankedBank::new(3, "C Bank", 25.0),
    ]
}

#[test]
fn transform_file_adds_derived_columns() {
    let file = rates_file("Currency,Rate\nEUR,0.93\nGBP,0.80\nINR,83.0\n");
    let dataset = transform_file(sample_banks(), file.path()).unwrap();

    let derived: Vec<[f64; 3]> = dataset
        .iter()
        .map(|r| [r.mc_eur_billion, r.mc_gbp_billion, r.mc_inr_billion])
        .collect();
    assert_eq!(
        derived,
        vec![
            [93.0, 80.0, 8300.0],
            [46.5, 40.0, 4150.0],
            [23.25, 20.0, 2075.0],
        ]
    );
    let ranks: Vec<u32> = dataset.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3]);
}

#[test]
fn extra_currencies_are_ignored() {
    let file = rates_file("Currency,Rate\nEUR,0.93\nGBP,0.8\nINR,83\nJPY,147.5\n");
    let rates = load_exchange_rates(file.path()).unwrap();
    assert_eq!(rates.len(), 4);
    let dataset = transform(sample_banks(), &rates).unwrap();
    assert_eq!(dataset.len(), 3);
}

#[test]
fn missing_rate_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("exchange_rate.csv");
    let err = load_exchange_rates(&path).unwrap_err();
    assert!(matches!(err, TransformError::FileNotFound { .. }));
}

#[test]
fn missing_inr_is_reported() {
    let file = rates_file("Currency,Rate\nEUR,0.93\nGBP,0.8\n");
    let err = transform_file(sample_banks(), file.path()).unwrap_err();
    assert!(matches!(
        err,
        TransformError::MissingRate {
            currency: Currency::Inr
        }
    ));
}

proptest! {
    #[test]
    fn converted_values_are_rounded_products(
        usd in 0.0f64..10_000.0,
        eur in 0.01f64..2.0,
        gbp in 0.01f64..2.0,
        inr in 1.0f64..200.0,
    ) {
        let rates: ExchangeRateTable = [("EUR", eur), ("GBP", gbp), ("INR", inr)].into_iter().collect();
        let dataset = transform(vec![RankedBank::new(1, "Bank", usd)], &rates).unwrap();
        let record = &dataset.records()[0];

        prop_assert_eq!(record.mc_usd_billion, usd);
        for (value, rate) in [
            (record.mc_eur_billion, eur),
            (record.mc_gbp_billion, gbp),
            (record.mc_inr_billion, inr),
        ] {
            prop_assert_eq!(value, round2(usd * rate));
            prop_assert!((value - usd * rate).abs() <= 0.005 + 1e-9);
        }
    }
}
