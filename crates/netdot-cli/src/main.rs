//! netdot CLI entry point.

use std::{process::ExitCode, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, info};

use netdot_cli::{Args, error_adapter::to_reportables};

fn init_logger(level: &str) {
    let filter = LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {level}. Using 'warn' instead.");
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(filter)
        .init();
}

fn main() -> ExitCode {
    miette::set_panic_hook();

    let args = Args::parse();
    init_logger(&args.log_level);
    debug!(args:?; "Parsed arguments");

    let Err(err) = netdot_cli::run(&args) else {
        info!("Completed successfully");
        return ExitCode::SUCCESS;
    };

    // Reports go to stderr regardless of the log level.
    let reporter = miette::GraphicalReportHandler::new();
    for reportable in to_reportables(&err) {
        let mut report = String::new();
        if reporter.render_report(&mut report, &reportable).is_err() {
            report = reportable.to_string();
        }
        eprintln!("{report}");
    }

    ExitCode::FAILURE
}
