//! Read command implementation.

use crate::files;
use chrono::DateTime;
use mathrace_journal::{determine_journal_version, JournalReader, JournalVersion};
use tracing::info;

pub fn run(
    input: Option<String>,
    output: Option<String>,
    version: Option<JournalVersion>,
    race_name: String,
    race_start: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let start = DateTime::parse_from_rfc3339(&race_start)
        .map_err(|e| format!("Invalid race start {}: {}", race_start, e))?;
    let content = files::read_input(input.as_deref())?;

    let version = match version {
        Some(version) => version,
        None => determine_journal_version(&content)?,
    };
    let race = JournalReader::new(content.as_bytes(), version).read(&race_name, start)?;
    info!(version = %version, events = race.events.len(), "read journal");

    let mut json = serde_json::to_string_pretty(&race)?;
    json.push('\n');
    files::write_output(output.as_deref(), &json)?;
    Ok(())
}
