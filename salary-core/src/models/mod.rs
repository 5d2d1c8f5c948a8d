mod contribution_rates;
mod incentive;
mod payroll_config;
mod payroll_input;
mod payroll_result;
mod tax_bracket;

pub use contribution_rates::ContributionRates;
pub use incentive::Incentive;
pub use payroll_config::PayrollConfig;
pub use payroll_input::PayrollInput;
pub use payroll_result::PayrollResult;
pub(crate) use payroll_result::PayrollFigures;
pub use tax_bracket::TaxBracket;
