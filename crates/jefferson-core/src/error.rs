//! Error types for the Jefferson cipher core

use thiserror::Error;

use crate::disk::DiskParseError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A disk or key count of zero was requested.
    #[error("size must be at least 1, got {0}")]
    InvalidSize(usize),

    /// A persisted cylinder line is not a 26-letter permutation.
    #[error("malformed cylinder at line {line}: {source}")]
    MalformedCylinder {
        line: usize,
        #[source]
        source: DiskParseError,
    },

    /// The cylinder file is missing or unreadable. Callers may treat this
    /// as recoverable, typically by generating a fresh cylinder.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Ciphering was attempted with a key that is not a permutation of
    /// contiguous disk identifiers, or that addresses disks the cylinder
    /// does not have.
    #[error("invalid key of length {len}")]
    InvalidKey { len: usize },

    /// A message outran its key, or a disk or row index is beyond range.
    #[error("index {index} out of range (limit {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// A message character is absent from its disk and cannot be ciphered.
    #[error("character {ch:?} at index {index} is not on the disk")]
    UnsupportedCharacter { ch: char, index: usize },
}
