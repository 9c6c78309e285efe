//! Replay of a completed journal as if it were still being written.
//!
//! A [`LiveJournal`] hands out a fixed number of snapshots. The first one
//! stops right before the race start, the last one is the whole journal, and
//! the ones in between grow linearly. Every snapshot is closed by a file-end
//! marker, so each one is a valid journal on its own.

use crate::errors::JournalError;
use crate::version::{FILE_END, SETUP_PREFIX};
use std::io::Cursor;
use tracing::debug;

const FILE_END_PREFIX: &str = "--- 999";

/// A completed journal, replayed in growing snapshots.
///
/// # Example
///
/// ```rust
/// use std::io::Read;
/// use mathrace_journal::LiveJournal;
///
/// let journal = "--- 001 inizializzazione simulatore\n\
///                --- 003 2 1 10 10 1\n\
///                --- 004 1 10 quesito 1 punteggio iniziale 10\n\
///                0 002 inizio gara\n\
///                0 029 termine gara\n\
///                --- 999 fine simulatore\n";
/// let mut live = LiveJournal::new(journal, 2)?;
/// let mut first = String::new();
/// live.open()?.read_to_string(&mut first)?;
/// assert!(!first.contains("inizio gara"));
/// assert!(live.can_read());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct LiveJournal {
    lines: Vec<String>,
    race_begin: usize,
    file_end: usize,
    snapshots: usize,
    opened: usize,
}

impl LiveJournal {
    /// Prepares `snapshots` snapshots of `content`.
    ///
    /// # Errors
    ///
    /// - [`JournalError::ZeroSnapshotBudget`] if `snapshots` is zero
    /// - [`JournalError::MalformedJournal`] if the journal has no race line or no file-end marker
    /// - [`JournalError::MalformedFooter`] if the file-end marker appears twice
    pub fn new(content: &str, snapshots: usize) -> Result<Self, JournalError> {
        if snapshots == 0 {
            return Err(JournalError::ZeroSnapshotBudget);
        }
        let lines: Vec<String> = content
            .lines()
            .map(|line| line.trim_end_matches('\r').to_string())
            .collect();

        let mut race_begin = None;
        let mut file_end = None;
        for (index, line) in lines.iter().enumerate() {
            if line.starts_with(FILE_END_PREFIX) {
                if file_end.is_some() {
                    return Err(JournalError::MalformedFooter {
                        line: index + 1,
                        reason: "file-end marker appears twice".into(),
                    });
                }
                file_end = Some(index);
            } else if race_begin.is_none()
                && !line.starts_with(SETUP_PREFIX)
                && !line.starts_with('#')
            {
                race_begin = Some(index);
            }
        }
        let race_begin = race_begin.ok_or_else(|| {
            JournalError::MalformedJournal("no line follows the race setup".into())
        })?;
        let file_end = file_end.ok_or_else(|| {
            JournalError::MalformedJournal(format!("'{FILE_END}' is missing"))
        })?;

        debug!(race_begin, file_end, snapshots, "prepared live journal");
        Ok(Self {
            lines,
            race_begin,
            file_end,
            snapshots,
            opened: 0,
        })
    }

    /// Returns the next snapshot.
    ///
    /// # Errors
    ///
    /// - [`JournalError::Exhausted`] once every snapshot was handed out
    pub fn open(&mut self) -> Result<Cursor<Vec<u8>>, JournalError> {
        let Some(cut) = self.cut_point(self.opened) else {
            return Err(JournalError::Exhausted);
        };
        self.opened += 1;

        let mut snapshot = String::new();
        for line in &self.lines[..cut] {
            snapshot.push_str(line);
            snapshot.push('\n');
        }
        snapshot.push_str(FILE_END);
        snapshot.push('\n');
        debug!(snapshot = self.opened, lines = cut, "opened live journal");
        Ok(Cursor::new(snapshot.into_bytes()))
    }

    /// Whether [`LiveJournal::open`] has snapshots left.
    pub fn can_read(&self) -> bool {
        self.opened < self.snapshots
    }

    /// Number of original lines in each snapshot, before the file-end marker.
    pub fn cut_points(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.snapshots).filter_map(|index| self.cut_point(index))
    }

    /// Number of original lines in snapshot `index`, or `None` past the budget.
    pub fn cut_point(&self, index: usize) -> Option<usize> {
        (index < self.snapshots)
            .then(|| cut_point(self.race_begin, self.file_end, self.snapshots, index))
    }
}

/// Linear interpolation between the race begin and the file-end marker.
fn cut_point(race_begin: usize, file_end: usize, snapshots: usize, index: usize) -> usize {
    if snapshots == 1 {
        return file_end;
    }
    let span = file_end.saturating_sub(race_begin) as u128;
    let offset = index as u128 * span / (snapshots - 1) as u128;
    race_begin + offset as usize
}
