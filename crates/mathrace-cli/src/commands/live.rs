//! Live command implementation.

use crate::files;
use mathrace_journal::LiveJournal;
use std::io::Read;

pub fn run(
    input: Option<String>,
    output: Option<String>,
    snapshots: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = files::read_input(input.as_deref())?;
    let mut live = LiveJournal::new(&content, snapshots)?;

    let mut index = 0;
    while live.can_read() {
        let mut snapshot = String::new();
        live.open()?.read_to_string(&mut snapshot)?;
        match &output {
            Some(prefix) => files::write_output(Some(&format!("{}.{}", prefix, index)), &snapshot)?,
            None => files::write_output(None, &snapshot)?,
        }
        index += 1;
    }
    Ok(())
}
