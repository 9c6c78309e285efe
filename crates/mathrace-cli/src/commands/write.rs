//! Write command implementation.

use crate::files;
use mathrace_canonical::RaceDict;
use mathrace_journal::{write_journal, JournalVersion};

pub fn run(
    input: Option<String>,
    output: Option<String>,
    version: JournalVersion,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = files::read_input(input.as_deref())?;
    let race: RaceDict =
        serde_json::from_str(&json).map_err(|e| format!("Invalid race dictionary: {}", e))?;

    let journal = write_journal(&race, version)?;
    files::write_output(output.as_deref(), &journal)?;
    Ok(())
}
