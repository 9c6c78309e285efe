//! Convert command implementation.

use crate::files;
use mathrace_journal::{convert_journal, JournalVersion};

pub fn run(
    input: Option<String>,
    output: Option<String>,
    version: JournalVersion,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = files::read_input(input.as_deref())?;
    let converted = convert_journal(content.as_bytes(), version)?;
    files::write_output(output.as_deref(), &converted)?;
    Ok(())
}
