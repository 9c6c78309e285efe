//! Strip-comments command implementation.

use crate::files;
use mathrace_journal::strip_comments_and_unhandled_events;

pub fn run(input: Option<String>, output: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let content = files::read_input(input.as_deref())?;
    let stripped = strip_comments_and_unhandled_events(&content)?;
    files::write_output(output.as_deref(), &stripped)?;
    Ok(())
}
