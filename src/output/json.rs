//! JSON output formatter

use crate::models::CheckResult;

/// Print a check result as pretty-printed JSON to stdout
pub fn print_json(result: &CheckResult) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{}", json);
    Ok(())
}
