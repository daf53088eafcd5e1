//! The cylinder: an ordered disk set and its line-oriented text format
//!
//! Persisted form, one disk per line in identifier order:
//! ```text
//! YVOFUIRBJTMXQLZAWHCNEGKDSP
//! SUNIBHLAPVZYWOKEMCJXRDFTGQ
//! ...
//! ```
//! Lines hold exactly 26 unique uppercase letters, separated by a single
//! `\n`, with a terminal newline and no header or identifier column; disk
//! identifiers are the 1-based line numbers.

use std::fs;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::disk::{Disk, Rotation};
use crate::error::{Error, Result};
use crate::key::Key;
use crate::ALPHABET_LEN;

/// The full ordered disk set, addressed by 1-based disk identifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cylinder {
    disks: Vec<Disk>,
}

impl Cylinder {
    /// Generate `n` independently random disks with identifiers `1..=n`
    pub fn generate<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidSize(n));
        }
        let disks = (0..n).map(|_| Disk::generate(rng)).collect();
        Ok(Self { disks })
    }

    /// Build a cylinder from already-validated disks
    pub fn from_disks(disks: Vec<Disk>) -> Result<Self> {
        if disks.is_empty() {
            return Err(Error::InvalidSize(0));
        }
        Ok(Self { disks })
    }

    /// Number of disks on the cylinder
    pub fn len(&self) -> usize {
        self.disks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    /// The disk with identifier `id`
    pub fn disk(&self, id: usize) -> Result<&Disk> {
        if id == 0 || id > self.disks.len() {
            return Err(Error::IndexOutOfRange {
                index: id,
                len: self.disks.len(),
            });
        }
        Ok(&self.disks[id - 1])
    }

    /// Replace disk `id` with its copy rotated one position
    ///
    /// Other entries are untouched and identifiers never change.
    pub fn rotate_disk(&mut self, id: usize, rotation: Rotation) -> Result<()> {
        if id == 0 || id > self.disks.len() {
            return Err(Error::IndexOutOfRange {
                index: id,
                len: self.disks.len(),
            });
        }
        self.disks[id - 1] = self.disks[id - 1].rotate(rotation);
        Ok(())
    }

    /// Render the persisted text form: one disk per line, terminal newline
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.disks.len() * (ALPHABET_LEN + 1));
        for disk in &self.disks {
            text.push_str(&disk.to_string());
            text.push('\n');
        }
        text
    }

    /// Parse the persisted text form
    ///
    /// Identifiers are assigned `1..=n` in line order. A single trailing
    /// empty line (left by the terminal newline) is skipped; any other
    /// empty or non-permutation line fails with the offending 1-based line
    /// number. Input with no disks at all is rejected.
    pub fn from_text(text: &str) -> Result<Self> {
        let mut lines: Vec<&str> = text.split('\n').collect();
        if lines.last() == Some(&"") {
            lines.pop();
        }
        if lines.is_empty() {
            return Err(Error::InvalidSize(0));
        }

        let mut disks = Vec::with_capacity(lines.len());
        for (i, line) in lines.iter().enumerate() {
            let disk = line
                .parse()
                .map_err(|source| Error::MalformedCylinder { line: i + 1, source })?;
            disks.push(disk);
        }
        Ok(Self { disks })
    }

    /// Write the text form to `path`, replacing any previous content
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_text())?;
        Ok(())
    }

    /// Load a cylinder from `path`
    ///
    /// A missing or unreadable file surfaces as [`Error::Io`]; whether that
    /// is fatal or grounds for generating a fresh cylinder is the caller's
    /// decision.
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_text(&text)
    }

    /// The letter at display row `row` of each disk, in key order
    ///
    /// This is how a presentation layer reads a whole line off the
    /// cylinder: the clear message sits on one row and its ciphered form
    /// six rows below.
    pub fn read_row(&self, key: &Key, row: usize) -> Result<String> {
        if !key.is_valid_for(key.len()) || key.len() > self.disks.len() {
            return Err(Error::InvalidKey { len: key.len() });
        }
        if row >= ALPHABET_LEN {
            return Err(Error::IndexOutOfRange {
                index: row,
                len: ALPHABET_LEN,
            });
        }
        Ok(key
            .as_slice()
            .iter()
            .map(|&id| self.disks[id - 1].as_bytes()[row] as char)
            .collect())
    }
}
