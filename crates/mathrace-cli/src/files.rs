//! Input and output plumbing shared by every command.

use std::io::{self, Read, Write};
use thiserror::Error;

/// Failure to read or write one of the files named on the command line.
#[derive(Error, Debug)]
pub enum FileError {
    /// The input could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// File path, or `<stdin>`.
        path: String,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The output could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        /// File path, or `<stdout>`.
        path: String,
        /// Underlying I/O error.
        source: io::Error,
    },
}

const STDIN: &str = "<stdin>";
const STDOUT: &str = "<stdout>";

/// Reads the whole input file, or stdin if no file was given.
pub fn read_input(input: Option<&str>) -> Result<String, FileError> {
    match input {
        Some(path) => std::fs::read_to_string(path).map_err(|source| FileError::Read {
            path: path.to_string(),
            source,
        }),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|source| FileError::Read {
                    path: STDIN.to_string(),
                    source,
                })?;
            Ok(buffer)
        }
    }
}

/// Writes `content` to the output file, or stdout if no file was given.
pub fn write_output(output: Option<&str>, content: &str) -> Result<(), FileError> {
    match output {
        Some(path) => std::fs::write(path, content).map_err(|source| FileError::Write {
            path: path.to_string(),
            source,
        }),
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|source| FileError::Write {
                    path: STDOUT.to_string(),
                    source,
                })
        }
    }
}
