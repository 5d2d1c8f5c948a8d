//! Payroll and income tax calculations.
//!
//! [`tax_engine`] maps a gross income to a tax liability through a
//! progressive schedule, [`payroll`] composes salary, incentives and
//! contributions into a full breakdown, and [`ctc`] handles the simpler
//! cost-to-company percentage form.

pub mod common;
pub mod ctc;
pub mod payroll;
pub mod tax_engine;

pub use common::round_half_up;
pub use ctc::{CostToCompanyInput, CostToCompanyResult, compute_cost_to_company};
pub use payroll::{PayrollCalculator, compute_payroll};
pub use tax_engine::{TaxSchedule, TaxScheduleError, compute_tax};
