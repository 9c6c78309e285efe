//! Subcommand implementations.

pub mod convert;
pub mod detect;
pub mod filter;
pub mod live;
pub mod normalize;
pub mod read;
pub mod strip_comments;
pub mod versions;
pub mod write;
