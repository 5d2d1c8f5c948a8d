//! Integration tests that run the loaders against on-disk fixture files
//! and feed the results through the calculator.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use salary_core::{ContributionRates, PayrollCalculator, TaxSchedule, compute_payroll};
use salary_data::{TaxScheduleLoader, input_loader};

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn standard_schedule_fixture_matches_builtin() {
    let schedule = TaxScheduleLoader::load_from_file(&fixture_path("standard_schedule.csv"))
        .expect("fixture should load");

    assert_eq!(&schedule, TaxSchedule::standard());
}

#[test]
fn capped_schedule_fixture_leaves_top_income_untaxed() {
    let schedule = TaxScheduleLoader::load_from_file(&fixture_path("capped_schedule.csv"))
        .expect("fixture should load");

    assert_eq!(schedule.ceiling(), Some(dec!(400000)));
    // 4,000 + 8,000 + 12,000
    assert_eq!(schedule.tax_on(dec!(400000)), Ok(dec!(24000)));
    assert_eq!(schedule.tax_on(dec!(900000)), Ok(dec!(24000)));
}

#[test]
fn employee_fixture_loads_in_order() {
    let inputs = input_loader::load_from_file(&fixture_path("employees.csv"))
        .expect("fixture should load");

    assert_eq!(inputs.len(), 3);
    assert_eq!(inputs[1].employee, "E002");
    assert_eq!(inputs[1].input.incentives.len(), 2);
}

#[test]
fn employee_fixture_through_standard_calculator() {
    let inputs = input_loader::load_from_file(&fixture_path("employees.csv")).unwrap();

    let results: Vec<_> = inputs
        .iter()
        .map(|e| compute_payroll(&e.input).expect("fixture inputs are valid"))
        .collect();

    assert_eq!(results[0].net_salary, dec!(117000.00));
    assert_eq!(results[1].tax_amount, dec!(4999.98));
    assert_eq!(results[1].net_salary, dec!(216333.02));
    // 50,000.04 tax on 400,000 gross, 32,000 EPF
    assert_eq!(results[2].tax_amount, dec!(50000.04));
    assert_eq!(results[2].net_salary, dec!(317999.96));
}

#[test]
fn employee_fixture_through_capped_calculator() {
    let schedule =
        TaxScheduleLoader::load_from_file(&fixture_path("capped_schedule.csv")).unwrap();
    let calculator = PayrollCalculator::new(&schedule, ContributionRates::default()).unwrap();
    let inputs = input_loader::load_from_file(&fixture_path("employees.csv")).unwrap();

    let result = calculator.calculate(&inputs[0].input).unwrap();

    // 125,000 gross: 25,000 x 4%
    assert_eq!(result.tax_amount, dec!(1000.00));
}

#[test]
fn missing_files_return_errors() {
    let bad_path = Path::new("/this/path/does/not/exist.csv");

    assert!(TaxScheduleLoader::load_from_file(bad_path).is_err());
    assert!(input_loader::load_from_file(bad_path).is_err());
}
