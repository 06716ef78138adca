//! Fiat-Shamir transcript: maps an ordered list of group, field, and byte
//! elements to a challenge scalar.

use sha2::{Digest, Sha256};

use crate::error::{Result, VotingError};
use crate::pairing::{self, Scalar, G1, G2, Gt};

/// A transcript item with a defined canonical serialization.
#[derive(Clone, Copy, Debug)]
pub enum Hashable<'a> {
    Scalar(&'a Scalar),
    G1(&'a G1),
    G2(&'a G2),
    Gt(&'a Gt),
    Bytes(&'a [u8]),
    Str(&'a str),
}

impl Hashable<'_> {
    fn to_bytes(&self) -> Result<Vec<u8>> {
        match self {
            Hashable::Scalar(s) => pairing::to_bytes(*s),
            Hashable::G1(p) => pairing::to_bytes(*p),
            Hashable::G2(p) => pairing::to_bytes(*p),
            Hashable::Gt(t) => pairing::to_bytes(*t),
            Hashable::Bytes(b) => Ok(b.to_vec()),
            Hashable::Str(s) => Ok(s.as_bytes().to_vec()),
        }
    }
}

/// Derive a challenge scalar from a domain tag and an ordered item list.
///
/// Each item is absorbed with an explicit length prefix so adjacent
/// variable-length items cannot be reassociated.
pub fn challenge(domain: &[u8], items: &[Hashable<'_>]) -> Result<Scalar> {
    let mut hasher = Sha256::new();
    hasher.update((domain.len() as u64).to_be_bytes());
    hasher.update(domain);

    for item in items {
        let bytes = item
            .to_bytes()
            .map_err(|e| VotingError::InvalidInput(e.to_string()))?;
        hasher.update((bytes.len() as u64).to_be_bytes());
        hasher.update(&bytes);
    }

    Ok(pairing::scalar_from_hash(&hasher.finalize()))
}
