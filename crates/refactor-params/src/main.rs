//! refactor-params CLI entry point.

mod cli;

use std::sync::Arc;

use clap::Parser;
use cli::Cli;
use refactor_params::{ConsoleReporter, JsonReporter, ReportFormat, Refactorer};
use refactor_params_core::config::RefactorConfig;
use refactor_params_core::errors::{ErrorCode, RefactorError};
use refactor_params_core::events::EventDispatcher;
use refactor_params_core::tracing::init_tracing;

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{}", e.display_string());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), RefactorError> {
    let config = RefactorConfig::load(&cli.search_root(), Some(&cli.overrides()))?;
    let refactorer = Refactorer::from_config(&config)?;

    let mut dispatcher = EventDispatcher::new();
    if cli.format == ReportFormat::Console {
        dispatcher.register(Arc::new(ConsoleReporter::stdout()));
    }

    let summary = refactorer.run(&dispatcher)?;

    if cli.format == ReportFormat::Json {
        let json = JsonReporter.generate(&summary).map_err(RefactorError::Report)?;
        println!("{json}");
    }
    Ok(())
}
