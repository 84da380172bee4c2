//! Command dispatch and execution

use std::io;
use std::sync::Arc;
use std::time::Instant;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::ReportService;
use crate::cli::args::{Cli, Commands, OutputFormat};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::domain::render;
use crate::infrastructure::AutoFetcher;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Run {
            companies,
            travels,
            format,
            timing,
        }) => _run(companies, travels, *format, *timing),
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => Err(CliError::Usage(
            "no command given, see --help".to_string(),
        )),
    }
}

#[instrument(skip_all)]
fn _run(companies: &str, travels: &str, format: OutputFormat, timing: bool) -> CliResult<()> {
    debug!(companies, travels, ?format, "run");
    let started = Instant::now();

    let service = ReportService::new(Arc::new(AutoFetcher::new()));
    let tree = service.build_report(companies, travels)?;

    let rendered = match format {
        OutputFormat::Json => render::to_json(&tree)?,
        OutputFormat::Tree => render::to_termtree(&tree)?.to_string(),
    };
    output::info(&rendered);

    if timing {
        eprintln!("Total time: {:.3}s", started.elapsed().as_secs_f64());
    }
    Ok(())
}

fn _completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
