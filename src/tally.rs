//! Homomorphic tally aggregation and discrete-log recovery

use std::fmt;

use ark_serialize::CanonicalSerialize;
use tracing::{debug, warn};

use crate::ballot::ElectionBases;
use crate::error::{Result, VotingError};
use crate::pairing::{self, gt_identity, Gt};
use crate::voting::VotingSystem;

/// An aggregated election result still in the exponent: the product of every
/// verified ballot, together with the vote base it is taken over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncryptedTally {
    pub(crate) aggregate: Gt,
    pub(crate) base: Gt,
}

impl EncryptedTally {
    pub fn aggregate(&self) -> &Gt {
        &self.aggregate
    }

    pub fn base(&self) -> &Gt {
        &self.base
    }

    /// Opaque string form handed to an external time-lock encryption layer.
    pub fn to_hex(&self) -> Result<String> {
        Ok(format!(
            "{}:{}",
            pairing::to_hex(&self.aggregate)?,
            pairing::to_hex(&self.base)?
        ))
    }

    /// Reimport a tally from its string form.
    pub fn from_hex(encoded: &str) -> Result<Self> {
        let (aggregate, base) = encoded.split_once(':').ok_or_else(|| {
            VotingError::Serialization("expected <aggregate>:<base>".to_string())
        })?;
        Ok(EncryptedTally {
            aggregate: pairing::from_hex(aggregate)?,
            base: pairing::from_hex(base)?,
        })
    }
}

impl fmt::Display for EncryptedTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EncryptedTally({} byte aggregate)",
            self.aggregate.compressed_size()
        )
    }
}

/// Tally operations over a voting system
pub trait TallyOperations {
    /// Verify and aggregate every ballot cast in an election. Ballots whose
    /// proofs fail are discarded with a warning and never poison the
    /// aggregate; an election with no ballots aggregates to the identity.
    fn encrypt_tally(&self, election_id: &str) -> Result<EncryptedTally>;

    /// Recover the integer tally by searching exponents 0..=max_votes for
    /// base^i equal to the aggregate.
    fn decrypt_tally(
        &self,
        election_id: &str,
        tally: &EncryptedTally,
        max_votes: u64,
    ) -> Result<u64>;
}

impl TallyOperations for VotingSystem {
    fn encrypt_tally(&self, election_id: &str) -> Result<EncryptedTally> {
        let bases = ElectionBases::derive(election_id)?;

        let mut aggregate = gt_identity();
        let mut accepted = 0usize;
        for envelope in self.ballots(election_id) {
            match envelope.proof().verify(bases.vote_base(), election_id) {
                Ok(()) => {
                    aggregate *= envelope.ballot();
                    accepted += 1;
                }
                Err(error) => {
                    warn!(%election_id, %error, "discarding ballot with invalid proof");
                }
            }
        }
        debug!(%election_id, accepted, "aggregated ballots");

        Ok(EncryptedTally {
            aggregate,
            base: *bases.vote_base(),
        })
    }

    fn decrypt_tally(
        &self,
        election_id: &str,
        tally: &EncryptedTally,
        max_votes: u64,
    ) -> Result<u64> {
        let bases = ElectionBases::derive(election_id)?;
        if tally.base != *bases.vote_base() {
            return Err(VotingError::InvalidInput(format!(
                "tally base does not belong to election {election_id}"
            )));
        }

        // The sum is at most the number of voters, so a linear scan of the
        // exponent range suffices.
        let mut candidate = gt_identity();
        for count in 0..=max_votes {
            if candidate == tally.aggregate {
                return Ok(count);
            }
            candidate *= &tally.base;
        }

        Err(VotingError::TallyFailed { max_votes })
    }
}
