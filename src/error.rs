use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building, loading or checking attack tables
#[derive(Error, Debug)]
pub enum MagicError {
    #[error("no collision-free magic among the supplied candidates for {slider} square {square}")]
    CandidatesExhausted { slider: &'static str, square: u8 },

    #[error("square {square}: shift {shift} is outside 1..=32")]
    InvalidShift { square: u8, shift: u64 },

    #[error("square {square}: slots {offset}..{end} exceed attack table of {len} entries")]
    TableBounds {
        square: u8,
        offset: usize,
        end: usize,
        len: usize,
    },

    #[error("{slider} square {square}: table gives {found:#018x} for occupancy {occupancy:#018x}, ray casting gives {expected:#018x}")]
    Mismatch {
        slider: &'static str,
        square: u8,
        occupancy: u64,
        expected: u64,
        found: u64,
    },

    #[error("unable to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: invalid hex value `{token}`", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        token: String,
    },

    #[error("{}: expected {expected} entries, found {found}", path.display())]
    EntryCount {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    #[error("invalid board layout: {0}")]
    Layout(String),
}

/// Convenience Result type for table operations
pub type Result<T> = std::result::Result<T, MagicError>;
