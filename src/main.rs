//! Proxy client configuration resolver.
//!
//! Entry point for the proxy-conf application.

use proxy_conf::config::{PROGRAM_NAME, ResolvedConfig, help_text, utf8_tokens};
use std::process::ExitCode;

mod app;
mod run;

use app::{exit_code, log_level, print_config_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    // Map arguments and merge defaults, config file and command line
    let config = match utf8_tokens(std::env::args_os().skip(1))
        .and_then(|tokens| ResolvedConfig::load(&tokens))
    {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    if let Some(invalid) = &config.invalid_option {
        eprintln!("invalid option: {invalid}");
        eprintln!("\nRun '{PROGRAM_NAME} --help' to see the available options.");
        return exit_code::CONFIG_ERROR;
    }

    if config.general_options.help {
        println!("{}", help_text());
        return exit_code::SUCCESS;
    }

    // Setup logging and run
    setup_tracing(log_level(&config.proxy_options));
    tracing::info!("{config}");

    run_application(config)
}

/// Resolves the server address and reports the final configuration.
///
/// Excluded from coverage - requires async runtime.
#[cfg(not(tarpaulin_include))]
fn run_application(config: ResolvedConfig) -> ExitCode {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to create Tokio runtime: {e}");
            return exit_code::runtime_error();
        }
    };

    let resolver = proxy_conf::resolve::SystemResolver::new();
    match runtime.block_on(run::execute(config, &resolver)) {
        Ok(report) => {
            print!("{report}");
            exit_code::SUCCESS
        }
        Err(e) => {
            tracing::error!("Application error: {e}");
            exit_code::runtime_error()
        }
    }
}
