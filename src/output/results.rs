//! Terminal output for check results

use crate::models::{CheckResult, ExtractedCertificate};
use chrono::Utc;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, ContentArrangement, Table};
use console::style;
use std::path::Path;

/// Print the verdict and any requested detail for a checked bundle
pub fn print_result(bundle: &Path, result: &CheckResult) {
    println!("{} {}", style("Bundle:").bold(), bundle.display());

    if result.will_work {
        println!("{}", style("✓ Bundle is usable").green().bold());
    } else if result.is_pfx_outdated {
        println!(
            "{}",
            style("✗ Bundle contains expired certificates").red().bold()
        );
    } else {
        println!(
            "{}",
            style("✗ Bundle is invalid (wrong passphrase or corrupt file)")
                .red()
                .bold()
        );
    }

    if let Some(error) = result.captured_error() {
        println!("  {}", style(error.to_string()).dim());
    }

    if let Some(certs) = &result.valid_certs {
        print_certificate_table(certs);
    }
}

/// Render the extracted certificates as a table
fn print_certificate_table(certs: &[ExtractedCertificate]) {
    if certs.is_empty() {
        println!("    {}", style("No certificates found in bundle").dim());
        return;
    }

    let now = Utc::now();
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);

    // Constrain table width to terminal width minus indent
    if let Ok((cols, _)) = crossterm::terminal::size() {
        table.set_width(cols.saturating_sub(4));
    }
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let header_cells: Vec<Cell> = ["Alias", "Subject", "Not After", "Status"]
        .iter()
        .map(|h| Cell::new(h).add_attribute(Attribute::Bold).fg(Color::Cyan))
        .collect();
    table.set_header(header_cells);

    for cert in certs {
        let subject = cert.subject.as_deref().unwrap_or("(unparsed)");
        let not_after = cert
            .not_after
            .map(|t| t.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string());
        let status = if cert.is_expired_at(now) {
            Cell::new("✗ expired").fg(Color::Red)
        } else {
            Cell::new("✓ valid").fg(Color::Green)
        };

        table.add_row(vec![
            Cell::new(&cert.alias),
            Cell::new(subject),
            Cell::new(not_after),
            status,
        ]);
    }

    // Indent the table
    for line in table.to_string().lines() {
        println!("    {}", line);
    }
}

/// Print the extracted certificates as PEM blocks
pub fn print_pem(certs: &[ExtractedCertificate]) {
    for cert in certs {
        print!("{}", cert.to_pem());
    }
}
