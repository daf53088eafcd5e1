//! The cipher engine: positional letter substitution over the cylinder
//!
//! Enciphering a letter finds it on its disk and reads the letter six rows
//! below; deciphering reads six rows above. A whole message walks the key,
//! character `i` using the disk `key[i]` names.

use crate::cylinder::Cylinder;
use crate::disk::Disk;
use crate::error::{Error, Result};
use crate::key::Key;
use crate::{ALPHABET_LEN, CIPHER_OFFSET};

/// Euclidean modular shift: `(value + delta) mod modulus`
///
/// The result is in `[0, modulus)` even when `value + delta` is negative.
pub fn shift(value: i64, delta: i64, modulus: i64) -> i64 {
    (value + delta).rem_euclid(modulus)
}

/// Offset a disk position down to the ciphered row
pub fn jefferson_shift(position: i64) -> i64 {
    shift(position, CIPHER_OFFSET, ALPHABET_LEN as i64)
}

/// Inverse of [`jefferson_shift`]
pub fn revert_jefferson_shift(position: i64) -> i64 {
    shift(position, -CIPHER_OFFSET, ALPHABET_LEN as i64)
}

/// Encipher one letter on one disk
///
/// `None` when the letter is not on the disk, which for a complete disk
/// means it is not an uppercase ASCII letter.
pub fn cipher_letter(letter: char, disk: &Disk) -> Option<char> {
    let position = disk.position_of(letter)?;
    disk.letter_at(jefferson_shift(position as i64) as usize)
}

/// Decipher one letter on one disk; inverse of [`cipher_letter`]
pub fn decipher_letter(letter: char, disk: &Disk) -> Option<char> {
    let position = disk.position_of(letter)?;
    disk.letter_at(revert_jefferson_shift(position as i64) as usize)
}

/// Encipher a whole message against a key and cylinder
///
/// The key must be a permutation of `1..=key.len()` and must not address
/// disks beyond the cylinder. The message must not outrun the key, and
/// every character must be present on its disk; sanitization and case
/// folding are the caller's preprocessing steps, see [`sanitize_message`].
pub fn cipher_message(message: &str, key: &Key, cylinder: &Cylinder) -> Result<String> {
    transform_message(message, key, cylinder, cipher_letter)
}

/// Structural mirror of [`cipher_message`] using the reverting shift
pub fn decipher_message(message: &str, key: &Key, cylinder: &Cylinder) -> Result<String> {
    transform_message(message, key, cylinder, decipher_letter)
}

fn transform_message(
    message: &str,
    key: &Key,
    cylinder: &Cylinder,
    transform: fn(char, &Disk) -> Option<char>,
) -> Result<String> {
    if !key.is_valid_for(key.len()) || key.len() > cylinder.len() {
        return Err(Error::InvalidKey { len: key.len() });
    }

    let mut output = String::with_capacity(message.len());
    for (index, letter) in message.chars().enumerate() {
        let id = key
            .as_slice()
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfRange {
                index,
                len: key.len(),
            })?;
        let disk = cylinder.disk(id)?;
        let ciphered =
            transform(letter, disk).ok_or(Error::UnsupportedCharacter { ch: letter, index })?;
        output.push(ciphered);
    }
    Ok(output)
}

/// Strip every character that is not an ASCII letter
///
/// Order and case of the survivors are preserved; no case folding happens
/// here.
pub fn sanitize_message(message: &str) -> String {
    message.chars().filter(char::is_ascii_alphabetic).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disk::Rotation;

    fn five_disk_cylinder() -> Cylinder {
        Cylinder::from_text(concat!(
            "FEWPQLHBDSMCNAXIJTKUOZYVRG\n",
            "UGWAEIXHTOVRKSQBNJPCYFMDLZ\n",
            "BVWYUZKLGQXHJOTDSMNRIECPFA\n",
            "UJEDQRSHOCFBWANMITXPZYKVLG\n",
            "JBFULONATYWEHRPZVXSCKDIGQM\n",
        ))
        .unwrap()
    }

    #[test]
    fn test_shift() {
        assert_eq!(shift(12, 20, 5), 2);
        assert_eq!(shift(2, 42, 3), 2);
        assert_eq!(shift(0, -6, 26), 20);
    }

    #[test]
    fn test_jefferson_shift() {
        assert_eq!(jefferson_shift(4), 10);
        assert_eq!(jefferson_shift(25), 5);
        assert_eq!(jefferson_shift(43239), 7);
    }

    #[test]
    fn test_shifts_are_inverses() {
        for n in 0..26 {
            assert_eq!(revert_jefferson_shift(jefferson_shift(n)), n);
            assert_eq!(jefferson_shift(revert_jefferson_shift(n)), n);
        }
    }

    #[test]
    fn test_cipher_letter() {
        let disk: Disk = "YVOFUIRBJTMXQLZAWHCNEGKDSP".parse().unwrap();
        assert_eq!(cipher_letter('E', &disk), Some('Y'));

        let disk: Disk = "SUNIBHLAPVZYWOKEMCJXRDFTGQ".parse().unwrap();
        assert_eq!(cipher_letter('A', &disk), Some('O'));
    }

    #[test]
    fn test_cipher_letter_absent() {
        let disk: Disk = "YVOFUIRBJTMXQLZAWHCNEGKDSP".parse().unwrap();
        assert_eq!(cipher_letter('e', &disk), None);
        assert_eq!(cipher_letter('!', &disk), None);
    }

    #[test]
    fn test_decipher_letter_inverts_cipher_letter() {
        let disk: Disk = "YVOFUIRBJTMXQLZAWHCNEGKDSP".parse().unwrap();
        for &letter in crate::ALPHABET {
            let letter = letter as char;
            let ciphered = cipher_letter(letter, &disk).unwrap();
            assert_eq!(decipher_letter(ciphered, &disk), Some(letter));
        }
    }

    #[test]
    fn test_cipher_message() {
        let cylinder = five_disk_cylinder();
        let key = Key::from(vec![3, 2, 5, 1, 4]);
        assert_eq!(cipher_message("ENJOY", &key, &cylinder).unwrap(), "VMNFJ");
    }

    #[test]
    fn test_decipher_message_roundtrip() {
        let cylinder = five_disk_cylinder();
        let key = Key::from(vec![3, 2, 5, 1, 4]);
        let ciphered = cipher_message("ENJOY", &key, &cylinder).unwrap();
        assert_eq!(
            decipher_message(&ciphered, &key, &cylinder).unwrap(),
            "ENJOY"
        );
    }

    #[test]
    fn test_message_shorter_than_key_is_fine() {
        let cylinder = five_disk_cylinder();
        let key = Key::from(vec![3, 2, 5, 1, 4]);
        let ciphered = cipher_message("ENJ", &key, &cylinder).unwrap();
        assert_eq!(decipher_message(&ciphered, &key, &cylinder).unwrap(), "ENJ");
    }

    #[test]
    fn test_message_longer_than_key_fails() {
        let cylinder = five_disk_cylinder();
        let key = Key::from(vec![3, 2, 5, 1, 4]);
        assert!(matches!(
            cipher_message("ENJOYS", &key, &cylinder),
            Err(Error::IndexOutOfRange { index: 5, len: 5 })
        ));
    }

    #[test]
    fn test_invalid_key_rejected() {
        let cylinder = five_disk_cylinder();
        let key = Key::from(vec![3, 2, 5, 1, 1]);
        assert!(matches!(
            cipher_message("ENJOY", &key, &cylinder),
            Err(Error::InvalidKey { len: 5 })
        ));
    }

    #[test]
    fn test_key_addressing_missing_disks_rejected() {
        let cylinder = five_disk_cylinder();
        // Valid permutation of 1..=6, but the cylinder has only 5 disks.
        let key = Key::from(vec![6, 2, 5, 1, 4, 3]);
        assert!(matches!(
            cipher_message("ENJOY", &key, &cylinder),
            Err(Error::InvalidKey { len: 6 })
        ));
    }

    #[test]
    fn test_key_shorter_than_cylinder_allowed() {
        let cylinder = five_disk_cylinder();
        let key = Key::from(vec![2, 1, 3]);
        let ciphered = cipher_message("HEY", &key, &cylinder).unwrap();
        assert_eq!(decipher_message(&ciphered, &key, &cylinder).unwrap(), "HEY");
    }

    #[test]
    fn test_unsupported_character_rejected() {
        let cylinder = five_disk_cylinder();
        let key = Key::from(vec![3, 2, 5, 1, 4]);
        assert!(matches!(
            cipher_message("EN OY", &key, &cylinder),
            Err(Error::UnsupportedCharacter { ch: ' ', index: 2 })
        ));
    }

    #[test]
    fn test_sanitize_message() {
        assert_eq!(sanitize_message("Welcome"), "Welcome");
        assert_eq!(sanitize_message("Welcome to my House"), "WelcometomyHouse");
        assert_eq!(sanitize_message("Weé_l-ç^(c)'ôom ?!!:§$ e."), "Welcome");
        assert_eq!(sanitize_message(""), "");
    }

    #[test]
    fn test_cipher_via_row_readout_matches_engine() {
        // The presentation layer reads the ciphered row directly off the
        // cylinder: with every disk rotated so the clear message sits on
        // one row, the ciphered text is the row six below.
        let mut cylinder = five_disk_cylinder();
        let key = Key::from(vec![3, 2, 5, 1, 4]);
        let message = "ENJOY";

        let expected = cipher_message(message, &key, &cylinder).unwrap();

        let clear_row = 9;
        for (position, letter) in message.chars().enumerate() {
            let id = key.as_slice()[position];
            while cylinder.disk(id).unwrap().as_bytes()[clear_row] != letter as u8 {
                cylinder.rotate_disk(id, Rotation::Up).unwrap();
            }
        }
        assert_eq!(cylinder.read_row(&key, clear_row).unwrap(), message);
        assert_eq!(
            cylinder.read_row(&key, clear_row + CIPHER_OFFSET as usize).unwrap(),
            expected
        );
    }
}
