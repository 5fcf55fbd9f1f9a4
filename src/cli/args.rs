//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pfx-check")]
#[command(version)]
#[command(about = "Checks whether a PKCS#12 certificate bundle is usable", long_about = None)]
pub struct Cli {
    /// Path to the PKCS#12 bundle (.p12/.pfx)
    #[arg(value_name = "BUNDLE")]
    pub bundle: PathBuf,

    /// Bundle passphrase (prompted for when omitted and required)
    #[arg(short, long, value_name = "PASSPHRASE")]
    pub password: Option<String>,

    /// List the certificates found in the bundle
    #[arg(long)]
    pub show_certs: bool,

    /// Print the extracted certificates as PEM blocks
    #[arg(long)]
    pub pem: bool,

    /// Omit error detail from the result
    #[arg(long)]
    pub no_error: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Minimal output (exit code only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}
