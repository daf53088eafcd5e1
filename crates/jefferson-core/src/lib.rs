//! Jefferson Core - Disks, cylinders, keys, and the cipher engine
//!
//! This crate provides the permutation engine for a Jefferson disk cipher:
//! rotatable alphabet disks, the cylinder holding them, the numeric key
//! ordering them, and the letter and message transforms built on top. It is
//! a classical cipher with no real security; presentation layers sit on top
//! of this crate and own all user-facing concerns.

pub mod cipher;
pub mod cylinder;
pub mod disk;
pub mod error;
pub mod key;

pub use cipher::{
    cipher_letter, cipher_message, decipher_letter, decipher_message, jefferson_shift,
    revert_jefferson_shift, sanitize_message, shift,
};
pub use cylinder::Cylinder;
pub use disk::{Disk, DiskParseError, Rotation};
pub use error::{Error, Result};
pub use key::Key;

/// The plaintext alphabet every disk is a permutation of
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of letters on a disk
pub const ALPHABET_LEN: usize = 26;

/// Fixed row offset between the clear row and the ciphered row
pub const CIPHER_OFFSET: i64 = 6;
