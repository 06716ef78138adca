//! Ordered voter roster and cancelling-key computation

use std::fmt;

use crate::error::{Result, VotingError};
use crate::pairing::{self, g1_identity, generator, random_scalar, Scalar, G1};

/// A registered voter: identity, secret key, and public key pk = g·sk.
#[derive(Clone, Debug)]
pub struct VoterRecord {
    voter_id: String,
    pub(crate) sk: Scalar,
    pk: G1,
}

impl VoterRecord {
    pub fn voter_id(&self) -> &str {
        &self.voter_id
    }

    pub fn public_key(&self) -> &G1 {
        &self.pk
    }

    /// Canonical hex encoding of the public key.
    pub fn public_key_hex(&self) -> Result<String> {
        pairing::to_hex(&self.pk)
    }
}

impl fmt::Display for VoterRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VoterRecord({})", self.voter_id)
    }
}

/// Append-only, ordered voter roster.
///
/// Registration order is public protocol state: every cancelling key is a
/// function of the voter's index in the final roster, so all participants
/// must agree on the order before the first ballot is cast.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    voters: Vec<VoterRecord>,
}

impl Roster {
    pub fn new() -> Self {
        Roster { voters: Vec::new() }
    }

    /// Register a voter with a fresh key pair, appending to the roster.
    pub fn register(&mut self, voter_id: &str) -> Result<&VoterRecord> {
        if self.index_of(voter_id).is_some() {
            return Err(VotingError::DuplicateVoter(voter_id.to_string()));
        }

        let sk = random_scalar();
        let pk = generator()? * sk;
        self.voters.push(VoterRecord {
            voter_id: voter_id.to_string(),
            sk,
            pk,
        });

        let newest = self.voters.len() - 1;
        Ok(&self.voters[newest])
    }

    pub fn size(&self) -> usize {
        self.voters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voters.is_empty()
    }

    pub fn index_of(&self, voter_id: &str) -> Option<usize> {
        self.voters.iter().position(|v| v.voter_id == voter_id)
    }

    pub fn get(&self, voter_id: &str) -> Option<&VoterRecord> {
        self.index_of(voter_id).map(|j| &self.voters[j])
    }

    /// Voters in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &VoterRecord> {
        self.voters.iter()
    }

    /// The cancelling key Y_j: the sum of every earlier voter's public key
    /// minus the sum of every later voter's. Weighted by the secret keys,
    /// Σ_j sk_j·Y_j is the identity over the full roster, which is what
    /// removes the key material from an aggregated tally.
    pub fn cancelling_key(&self, voter_id: &str) -> Result<G1> {
        let j = self
            .index_of(voter_id)
            .ok_or_else(|| VotingError::UnknownVoter(voter_id.to_string()))?;

        let mut key = g1_identity();
        for (k, voter) in self.voters.iter().enumerate() {
            if k < j {
                key += voter.pk;
            } else if k > j {
                key -= voter.pk;
            }
        }
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_preserves_order() {
        let mut roster = Roster::new();
        for id in ["tom", "john", "sarah"] {
            roster.register(id).unwrap();
        }

        assert_eq!(roster.size(), 3);
        assert_eq!(roster.index_of("tom"), Some(0));
        assert_eq!(roster.index_of("sarah"), Some(2));
        let order: Vec<&str> = roster.iter().map(|v| v.voter_id()).collect();
        assert_eq!(order, vec!["tom", "john", "sarah"]);
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut roster = Roster::new();
        roster.register("tom").unwrap();
        assert!(matches!(
            roster.register("tom"),
            Err(VotingError::DuplicateVoter(_))
        ));
        assert_eq!(roster.size(), 1);
    }

    #[test]
    fn cancelling_key_requires_known_voter() {
        let roster = Roster::new();
        assert!(matches!(
            roster.cancelling_key("ghost"),
            Err(VotingError::UnknownVoter(_))
        ));
    }

    #[test]
    fn cancelling_keys_cancel_under_secret_keys() {
        // Σ_j sk_j·Y_j = identity is the cancellation the tally relies on:
        // each cross-term sk_j·sk_k appears once positively and once
        // negatively across the roster.
        for n in [1usize, 2, 5, 10, 50] {
            let mut roster = Roster::new();
            for i in 0..n {
                roster.register(&format!("voter-{i}")).unwrap();
            }

            let mut sum = g1_identity();
            for voter in roster.iter() {
                sum += roster.cancelling_key(voter.voter_id()).unwrap() * voter.sk;
            }
            assert_eq!(sum, g1_identity(), "key material must cancel for n = {n}");
        }
    }

    #[test]
    fn public_key_hex_is_compressed_g1() {
        let mut roster = Roster::new();
        let hex = roster.register("tom").unwrap().public_key_hex().unwrap();
        assert_eq!(hex.len(), 96);
    }
}
