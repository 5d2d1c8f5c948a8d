pub mod calculations;
pub mod error;
pub mod models;

pub use calculations::{
    CostToCompanyInput, CostToCompanyResult, PayrollCalculator, TaxSchedule, TaxScheduleError,
    compute_cost_to_company, compute_payroll, compute_tax, round_half_up,
};
pub use error::{ConfigError, InvalidInput};
pub use models::*;
