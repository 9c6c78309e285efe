//! List-versions command implementation.

use mathrace_journal::list_journal_versions;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    for version in list_journal_versions() {
        println!("{}", version);
    }
    Ok(())
}
