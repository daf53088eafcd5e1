//! Alphabet disks and rotation

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::{ALPHABET, ALPHABET_LEN};

/// Why a persisted disk line failed to parse
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiskParseError {
    #[error("expected 26 letters, got {0}")]
    WrongLength(usize),

    #[error("character {0:?} is not an uppercase ASCII letter")]
    NotUppercase(char),

    #[error("letter {0} appears more than once")]
    DuplicateLetter(char),
}

/// Rotation direction for a single disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// The second letter becomes the first
    Up,
    /// The last letter becomes the first
    Down,
}

/// One rotatable wheel: a permutation of the 26 uppercase letters
///
/// A disk is never partially constructed; it either holds a full permutation
/// of the alphabet or it does not exist. The only mutation is [`rotate`],
/// which replaces the sequence with a cyclically shifted copy.
///
/// [`rotate`]: Disk::rotate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disk([u8; ALPHABET_LEN]);

impl Disk {
    /// Generate a uniformly random permutation of the alphabet
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut letters = *ALPHABET;
        letters.shuffle(rng);
        Self(letters)
    }

    /// Return a copy of this disk shifted by exactly one position
    pub fn rotate(&self, rotation: Rotation) -> Self {
        let mut rotated = [0u8; ALPHABET_LEN];
        for (i, slot) in rotated.iter_mut().enumerate() {
            *slot = match rotation {
                Rotation::Up => self.0[(i + 1) % ALPHABET_LEN],
                Rotation::Down => self.0[(i + ALPHABET_LEN - 1) % ALPHABET_LEN],
            };
        }
        Self(rotated)
    }

    /// Position of `letter` on the disk, or `None` if absent
    ///
    /// A complete disk carries every uppercase letter exactly once, so
    /// `None` only occurs for characters outside `A..=Z`.
    pub fn position_of(&self, letter: char) -> Option<usize> {
        if !letter.is_ascii() {
            return None;
        }
        self.0.iter().position(|&b| b == letter as u8)
    }

    /// Letter at display row `row`, or `None` when `row >= 26`
    pub fn letter_at(&self, row: usize) -> Option<char> {
        self.0.get(row).map(|&b| b as char)
    }

    /// The raw letter sequence
    pub fn as_bytes(&self) -> &[u8; ALPHABET_LEN] {
        &self.0
    }
}

impl fmt::Display for Disk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            fmt::Write::write_char(f, b as char)?;
        }
        Ok(())
    }
}

impl FromStr for Disk {
    type Err = DiskParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let count = s.chars().count();
        if count != ALPHABET_LEN {
            return Err(DiskParseError::WrongLength(count));
        }

        let mut letters = [0u8; ALPHABET_LEN];
        let mut seen = [false; ALPHABET_LEN];
        for (i, ch) in s.chars().enumerate() {
            if !ch.is_ascii_uppercase() {
                return Err(DiskParseError::NotUppercase(ch));
            }
            let slot = (ch as u8 - b'A') as usize;
            if seen[slot] {
                return Err(DiskParseError::DuplicateLetter(ch));
            }
            seen[slot] = true;
            letters[i] = ch as u8;
        }

        Ok(Self(letters))
    }
}

impl Serialize for Disk {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Disk {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
