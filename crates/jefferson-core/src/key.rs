//! Numeric keys ordering the disks on the cylinder

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An ordered sequence of disk identifiers
///
/// `key[position]` names the disk occupying that physical position on the
/// cylinder. A key built up interactively may be shorter than the cylinder
/// or contain repeats; that is a legitimate transient state. Validity is
/// asserted with [`is_valid_for`] at the point of use, never at
/// construction.
///
/// [`is_valid_for`]: Key::is_valid_for
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Key(Vec<usize>);

impl Key {
    /// An empty key, ready for interactive accumulation
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Generate a uniformly random permutation of `1..=n`
    pub fn generate<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidSize(n));
        }
        let mut ids: Vec<usize> = (1..=n).collect();
        ids.shuffle(rng);
        Ok(Self(ids))
    }

    /// True iff the key, sorted, is exactly `[1, 2, ..., n]`
    ///
    /// Rejects wrong lengths, duplicates, zeros, and identifiers above `n`.
    /// An in-progress key reports `false`, not an error.
    pub fn is_valid_for(&self, n: usize) -> bool {
        if self.0.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &id in &self.0 {
            if id == 0 || id > n || seen[id - 1] {
                return false;
            }
            seen[id - 1] = true;
        }
        true
    }

    /// Append a disk identifier during interactive accumulation
    pub fn push(&mut self, id: usize) {
        self.0.push(id);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

impl From<Vec<usize>> for Key {
    fn from(ids: Vec<usize>) -> Self {
        Self(ids)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn test_generated_key_is_valid() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for n in 1..=20 {
            let key = Key::generate(n, &mut rng).unwrap();
            assert!(key.is_valid_for(n));
        }
    }

    #[test]
    fn test_generate_rejects_zero() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        assert!(matches!(
            Key::generate(0, &mut rng),
            Err(Error::InvalidSize(0))
        ));
    }

    #[test]
    fn test_valid_permutation_accepted() {
        let key = Key::from(vec![2, 4, 1, 8, 3, 5, 7, 6]);
        assert!(key.is_valid_for(8));
    }

    #[test]
    fn test_wrong_length_rejected() {
        let key = Key::from(vec![2, 5, 4, 3]);
        assert!(!key.is_valid_for(5));
    }

    #[test]
    fn test_duplicate_rejected() {
        let key = Key::from(vec![1, 2, 2, 4]);
        assert!(!key.is_valid_for(4));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let key = Key::from(vec![1, 2, 5]);
        assert!(!key.is_valid_for(3));
        let key = Key::from(vec![0, 1, 2]);
        assert!(!key.is_valid_for(3));
    }

    #[test]
    fn test_empty_key_rejected_for_positive_n() {
        assert!(!Key::new().is_valid_for(3));
    }

    #[test]
    fn test_accumulation_goes_valid_at_completion() {
        let mut key = Key::new();
        for id in [3, 1, 2] {
            assert!(!key.is_valid_for(3));
            key.push(id);
        }
        assert!(key.is_valid_for(3));
    }

    #[test]
    fn test_serde_roundtrip() {
        let key = Key::from(vec![3, 2, 5, 1, 4]);
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "[3,2,5,1,4]");
        let back: Key = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }
}
