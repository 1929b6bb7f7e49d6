//! Random draws for gun generation and firing
//!
//! Wraps a `ChaCha8Rng` so production runs can seed from entropy while
//! tests use a fixed seed and get the same fleet every time.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::config::ID_LENGTH;
use crate::core::error::{FleetError, Result};
use crate::core::types::GunId;

const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

pub struct RandomSource {
    rng: ChaCha8Rng,
}

impl RandomSource {
    /// Seed from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Deterministic source for reproducible runs
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Uniform integer in `[min, max]`
    pub fn random_int(&mut self, min: u32, max: u32) -> Result<u32> {
        if min > max {
            return Err(FleetError::InvalidRange { min, max });
        }
        Ok(self.rng.gen_range(min..=max))
    }

    /// Uniform index into a non-empty slice
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.rng.gen_range(0..items.len()))
    }

    pub fn random_letter(&mut self) -> char {
        ALPHABET[self.rng.gen_range(0..ALPHABET.len())] as char
    }

    /// Five random letters. Uniqueness is the registry's job.
    pub fn generate_identifier(&mut self) -> GunId {
        GunId((0..ID_LENGTH).map(|_| self.random_letter()).collect())
    }
}
