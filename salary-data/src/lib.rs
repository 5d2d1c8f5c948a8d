//! Input side of the salary calculator: raw form text, tax schedule CSV
//! files and batch payroll CSV files, all turned into `salary-core` values.

pub mod form;
pub mod input_loader;
pub mod schedule_loader;

pub use form::{
    CostToCompanyForm, FieldError, FormErrors, IncentiveParseError, PayrollForm, TaxForm,
    parse_decimal, parse_incentive,
};
pub use input_loader::{EmployeeInput, InputLoadError};
pub use schedule_loader::{ScheduleLoadError, TaxBracketRecord, TaxScheduleLoader};
