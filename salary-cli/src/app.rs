use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};
use salary_core::{PayrollCalculator, PayrollResult, round_half_up};
use salary_data::{CostToCompanyForm, PayrollForm, TaxForm, input_loader};
use tracing::{error, info};

use crate::cli::{Cli, Command, OutputFormat};
use crate::config::Settings;
use crate::report;

/// Runs the selected subcommand, writing results to `out`.
pub fn run(
    cli: &Cli,
    out: &mut dyn Write,
) -> Result<()> {
    let settings = Settings::resolve(cli.config.as_deref(), cli.schedule.as_deref())?;
    let calculator = PayrollCalculator::new(&settings.schedule, settings.rates)
        .context("Invalid configuration")?;

    match &cli.command {
        Command::Payroll { basic, incentives } => {
            let form = PayrollForm {
                basic_salary: basic.clone(),
                incentives: incentives.clone(),
            };
            let result = form.submit(&calculator)?;
            info!(gross = %result.gross_salary, net = %result.net_salary, "payroll calculated");

            match cli.format {
                OutputFormat::Text => report::write_payroll_text(out, &result),
                OutputFormat::Csv => report::write_payroll_csv(out, &result),
            }
        }

        Command::Tax { gross } => {
            let gross_income = TaxForm::new(gross.as_str()).parse()?;
            let tax_amount = round_half_up(settings.schedule.tax_on(gross_income)?);
            let gross_income = round_half_up(gross_income);
            info!(gross = %gross_income, tax = %tax_amount, "tax calculated");

            match cli.format {
                OutputFormat::Text => report::write_tax_text(out, gross_income, tax_amount),
                OutputFormat::Csv => report::write_tax_csv(out, gross_income, tax_amount),
            }
        }

        Command::Ctc { ctc, epf, etf, tax } => {
            let form = CostToCompanyForm {
                cost_to_company: ctc.clone(),
                employee_percent: epf.clone(),
                employer_percent: etf.clone(),
                tax_percent: tax.clone(),
            };
            let result = form.submit()?;
            info!(gross = %result.gross_salary, net = %result.net_salary, "cost to company calculated");

            match cli.format {
                OutputFormat::Text => report::write_cost_to_company_text(out, &result),
                OutputFormat::Csv => report::write_cost_to_company_csv(out, &result),
            }
        }

        Command::Batch { file, output } => run_batch(
            &calculator,
            file,
            output.as_deref(),
            cli.format,
            out,
        ),

        Command::Schedule => match cli.format {
            OutputFormat::Text => report::write_schedule_text(out, &settings.schedule),
            OutputFormat::Csv => report::write_schedule_csv(out, &settings.schedule),
        },
    }
}

/// Calculates every row of `file`. Rejected rows are logged and skipped so the
/// remaining results are still written; the run then fails with a count.
fn run_batch(
    calculator: &PayrollCalculator<'_>,
    file: &Path,
    output: Option<&Path>,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let inputs = input_loader::load_from_file(file)
        .with_context(|| format!("Failed to load batch file: {}", file.display()))?;
    info!(path = %file.display(), rows = inputs.len(), "loaded batch file");

    let total = inputs.len();
    let mut results: Vec<(String, PayrollResult)> = Vec::with_capacity(total);
    let mut rejected = 0usize;

    for (idx, entry) in inputs.into_iter().enumerate() {
        match calculator.calculate(&entry.input) {
            Ok(result) => results.push((entry.employee, result)),
            Err(e) => {
                error!(
                    row = idx + 1,
                    employee = %entry.employee,
                    field = e.field(),
                    "rejected: {}",
                    e
                );
                rejected += 1;
            }
        }
    }

    match output {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("Failed to create output: {}", path.display()))?;
            write_batch(&mut file, &results, format)?;
            info!(path = %path.display(), rows = results.len(), "wrote batch results");
        }
        None => write_batch(out, &results, format)?,
    }

    if rejected > 0 {
        bail!("{rejected} of {total} rows rejected");
    }
    Ok(())
}

fn write_batch(
    out: &mut dyn Write,
    results: &[(String, PayrollResult)],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => report::write_batch_text(out, results),
        OutputFormat::Csv => report::write_batch_csv(out, results),
    }
}
