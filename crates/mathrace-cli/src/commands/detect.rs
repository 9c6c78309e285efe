//! Detect-version command implementation.

use crate::files;
use mathrace_journal::determine_journal_version;

pub fn run(input: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let content = files::read_input(input.as_deref())?;
    let version = determine_journal_version(&content)
        .map_err(|e| format!("Failed to detect journal version: {}", e))?;
    println!("{}", version);
    Ok(())
}
