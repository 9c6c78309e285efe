//! Mathrace CLI - Command-line interface for journal detection, conversion and filtering.

use clap::{Parser, Subcommand};
use mathrace_journal::JournalVersion;
use tracing_subscriber::EnvFilter;

mod commands;
mod files;

use commands::{
    convert, detect, filter, live, normalize, read, strip_comments, versions, write,
};

#[derive(Parser)]
#[command(name = "mathrace")]
#[command(about = "Mathrace journal compatibility CLI")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every supported journal version, oldest first
    ListVersions,
    /// Print the oldest journal version able to produce a journal
    DetectVersion {
        /// Input journal (or stdin if not provided)
        #[arg(short, long)]
        input_file: Option<String>,
    },
    /// Read a journal into a race dictionary (JSON)
    Read {
        /// Input journal (or stdin if not provided)
        #[arg(short, long)]
        input_file: Option<String>,
        /// Output JSON file (or stdout if not provided)
        #[arg(short, long)]
        output_file: Option<String>,
        /// Journal version (detected if not provided)
        #[arg(short = 'v', long)]
        journal_version: Option<JournalVersion>,
        /// Race name
        #[arg(long)]
        race_name: String,
        /// Race start as an RFC 3339 instant
        #[arg(long)]
        race_start: String,
    },
    /// Write a race dictionary (JSON) as a journal
    Write {
        /// Input JSON file (or stdin if not provided)
        #[arg(short, long)]
        input_file: Option<String>,
        /// Output journal (or stdout if not provided)
        #[arg(short, long)]
        output_file: Option<String>,
        /// Journal version to write
        #[arg(short = 'v', long)]
        journal_version: JournalVersion,
    },
    /// Convert a journal to another journal version
    Convert {
        /// Input journal (or stdin if not provided)
        #[arg(short, long)]
        input_file: Option<String>,
        /// Output journal (or stdout if not provided)
        #[arg(short, long)]
        output_file: Option<String>,
        /// Target journal version
        #[arg(short = 'v', long)]
        journal_version: JournalVersion,
    },
    /// Drop comments and events the race dictionary does not represent
    StripComments {
        /// Input journal (or stdin if not provided)
        #[arg(short, long)]
        input_file: Option<String>,
        /// Output journal (or stdout if not provided)
        #[arg(short, long)]
        output_file: Option<String>,
    },
    /// Keep the journal up to the given submission or jolly
    FilterById {
        /// Input journal (or stdin if not provided)
        #[arg(short, long)]
        input_file: Option<String>,
        /// Output journal (or stdout if not provided)
        #[arg(short, long)]
        output_file: Option<String>,
        /// Number of submissions and jollies to keep
        #[arg(short = 'p', long)]
        id_upper_bound: usize,
    },
    /// Keep the journal up to the given timestamp
    FilterByTimestamp {
        /// Input journal (or stdin if not provided)
        #[arg(short, long)]
        input_file: Option<String>,
        /// Output journal (or stdout if not provided)
        #[arg(short, long)]
        output_file: Option<String>,
        /// Last timestamp to keep, in seconds or hh:mm:ss
        #[arg(short, long)]
        timestamp_upper_bound: String,
    },
    /// Remove mathrace_only and mathrace_id keys from a race dictionary (JSON)
    StripMathraceOnly {
        /// Input JSON file (or stdin if not provided)
        #[arg(short, long)]
        input_file: Option<String>,
        /// Output JSON file (or stdout if not provided)
        #[arg(short, long)]
        output_file: Option<String>,
    },
    /// Sort events, questions and teams of a race dictionary (JSON)
    ReorderLists {
        /// Input JSON file (or stdin if not provided)
        #[arg(short, long)]
        input_file: Option<String>,
        /// Output JSON file (or stdout if not provided)
        #[arg(short, long)]
        output_file: Option<String>,
    },
    /// Truncate instants of a race dictionary (JSON) to the second
    StripMilliseconds {
        /// Input JSON file (or stdin if not provided)
        #[arg(short, long)]
        input_file: Option<String>,
        /// Output JSON file (or stdout if not provided)
        #[arg(short, long)]
        output_file: Option<String>,
    },
    /// Drop trailing zeros from the bonus arrays of a race dictionary (JSON)
    StripTrailingZeroBonus {
        /// Input JSON file (or stdin if not provided)
        #[arg(short, long)]
        input_file: Option<String>,
        /// Output JSON file (or stdout if not provided)
        #[arg(short, long)]
        output_file: Option<String>,
    },
    /// Replay a completed journal in growing snapshots
    Live {
        /// Input journal (or stdin if not provided)
        #[arg(short, long)]
        input_file: Option<String>,
        /// Output prefix; snapshot i goes to PREFIX.i (or stdout if not provided)
        #[arg(short, long)]
        output_file: Option<String>,
        /// Number of snapshots
        #[arg(short = 'n', long)]
        snapshots: usize,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::ListVersions => versions::run(),
        Commands::DetectVersion { input_file } => detect::run(input_file),
        Commands::Read {
            input_file,
            output_file,
            journal_version,
            race_name,
            race_start,
        } => read::run(input_file, output_file, journal_version, race_name, race_start),
        Commands::Write {
            input_file,
            output_file,
            journal_version,
        } => write::run(input_file, output_file, journal_version),
        Commands::Convert {
            input_file,
            output_file,
            journal_version,
        } => convert::run(input_file, output_file, journal_version),
        Commands::StripComments {
            input_file,
            output_file,
        } => strip_comments::run(input_file, output_file),
        Commands::FilterById {
            input_file,
            output_file,
            id_upper_bound,
        } => filter::run(input_file, output_file, filter::Bound::Id(id_upper_bound)),
        Commands::FilterByTimestamp {
            input_file,
            output_file,
            timestamp_upper_bound,
        } => filter::run(
            input_file,
            output_file,
            filter::Bound::Timestamp(timestamp_upper_bound),
        ),
        Commands::StripMathraceOnly {
            input_file,
            output_file,
        } => normalize::run(input_file, output_file, normalize::Normalization::StripMathraceOnly),
        Commands::ReorderLists {
            input_file,
            output_file,
        } => normalize::run(input_file, output_file, normalize::Normalization::ReorderLists),
        Commands::StripMilliseconds {
            input_file,
            output_file,
        } => normalize::run(
            input_file,
            output_file,
            normalize::Normalization::StripMilliseconds,
        ),
        Commands::StripTrailingZeroBonus {
            input_file,
            output_file,
        } => normalize::run(
            input_file,
            output_file,
            normalize::Normalization::StripTrailingZeroBonus,
        ),
        Commands::Live {
            input_file,
            output_file,
            snapshots,
        } => live::run(input_file, output_file, snapshots),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
