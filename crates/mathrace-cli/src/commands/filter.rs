//! Filter-by-id and filter-by-timestamp command implementations.

use crate::files;
use mathrace_journal::{filter_events_by_id, filter_events_by_timestamp};

/// Where the journal gets cut.
pub enum Bound {
    /// After the given number of submissions and jollies.
    Id(usize),
    /// After the last event not later than the given timestamp.
    Timestamp(String),
}

pub fn run(
    input: Option<String>,
    output: Option<String>,
    bound: Bound,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = files::read_input(input.as_deref())?;
    let filtered = match bound {
        Bound::Id(id) => filter_events_by_id(&content, id)?,
        Bound::Timestamp(timestamp) => filter_events_by_timestamp(&content, &timestamp)?,
    };
    files::write_output(output.as_deref(), &filtered)?;
    Ok(())
}
