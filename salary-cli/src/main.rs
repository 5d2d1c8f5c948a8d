use std::io;

use clap::Parser;
use tracing::debug;

use salary_cli::{Cli, app, logging};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_level.as_deref(), cli.log_file.as_deref())?;
    debug!(command = ?cli.command, format = ?cli.format, "starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    app::run(&cli, &mut out)
}
