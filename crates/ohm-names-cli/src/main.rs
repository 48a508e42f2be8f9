//! Generate the table of tag names described by grammar and description
//! sources.

use std::io;
use std::process;

use clap::Parser;
use tracing::{error, info};

use ohm_names_cli::cli::{Cli, build_config, run};
use ohm_names_cli::config::CliConfig;
use ohm_names_cli::error::exit_code;
use ohm_names_cli::logging::init_logging;

fn main() {
    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            init_logging(&CliConfig::default());
            error!(error = %e, "invalid configuration");
            process::exit(e.exit_code());
        }
    };
    init_logging(&config);
    info!(version = env!("CARGO_PKG_VERSION"), "starting ohm-names");

    let mut stdout = io::stdout().lock();
    match run(&cli, &config, &mut stdout) {
        Ok(report) => info!(
            generated = report.generated,
            written = report.written,
            failed = report.failures.len(),
            "done"
        ),
        Err(e) => {
            let message = format!("{e:#}");
            error!(error = %message, "run failed");
            process::exit(exit_code(&e));
        }
    }
}
