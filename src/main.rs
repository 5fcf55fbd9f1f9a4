//! pfx-check - PKCS#12 bundle usability checker
//!
//! Given a bundle path and a passphrase, reports whether the bundle will
//! work: it must decrypt with the passphrase and contain no expired
//! certificates.

use clap::Parser;
use console::style;
use pfx_check::cli::{Cli, OutputFormat};
use pfx_check::models::{CheckOptions, CheckResult};
use pfx_check::{check_bundle, output, CheckError};
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    match run() {
        Ok(result) => {
            let code = if result.will_work { 0 } else { 1 };
            std::process::exit(code);
        }
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(2);
        }
    }
}

fn run() -> anyhow::Result<CheckResult> {
    let cli = Cli::parse();

    // Handle color preference
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let options = CheckOptions {
        include_certificates: cli.show_certs || cli.pem,
        include_error: !cli.no_error,
    };

    let passphrase = resolve_passphrase(&cli)?;
    let result = check_bundle(&cli.bundle, &passphrase, options);

    if !cli.quiet {
        match cli.format {
            OutputFormat::Json => output::print_json(&result)?,
            OutputFormat::Table => {
                output::print_result(&cli.bundle, &result);
                if cli.pem {
                    output::print_pem(result.certificates());
                }
            }
        }
    }

    Ok(result)
}

/// Resolve the passphrase for the bundle.
///
/// An explicit `--password` wins. Otherwise probe with the empty passphrase,
/// and prompt interactively when the bundle refuses it and stderr is a
/// terminal. Each attempt is its own check invocation; the check itself
/// never retries.
fn resolve_passphrase(cli: &Cli) -> anyhow::Result<String> {
    if let Some(password) = &cli.password {
        return Ok(password.clone());
    }

    let probe = check_bundle(&cli.bundle, "", CheckOptions::default());
    let refused = matches!(
        probe.captured_error(),
        Some(CheckError::Decryption { .. })
    );

    if refused && console::Term::stderr().is_term() {
        let password = dialoguer::Password::new()
            .with_prompt(format!(
                "Password for {}",
                cli.bundle.file_name().unwrap_or_default().to_string_lossy()
            ))
            .allow_empty_password(true)
            .interact()?;
        return Ok(password);
    }

    Ok(String::new())
}
