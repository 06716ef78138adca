//! Voter registration and ballot casting

use std::collections::{HashMap, HashSet};

use crate::ballot::{BallotEnvelope, BallotProof, ElectionBases};
use crate::error::{Result, VotingError};
use crate::pairing::Scalar;
use crate::proofs::{ProofOfBinaryVote, ProofOfVoteKnowledge};
use crate::roster::Roster;
use crate::types::{ProofMode, VotingConfig};

/// A single-authority voting system over one shared roster.
///
/// Voters register first; the first cast ballot closes registration, because
/// every cancelling key is a function of the final roster order. Ballots are
/// append-only per election.
#[derive(Debug)]
pub struct VotingSystem {
    roster: Roster,
    pub(crate) ballots: HashMap<String, Vec<BallotEnvelope>>,
    cast_log: HashMap<String, HashSet<String>>,
    config: VotingConfig,
    registration_closed: bool,
}

impl VotingSystem {
    pub fn new(config: VotingConfig) -> Self {
        VotingSystem {
            roster: Roster::new(),
            ballots: HashMap::new(),
            cast_log: HashMap::new(),
            config,
            registration_closed: false,
        }
    }

    pub fn config(&self) -> &VotingConfig {
        &self.config
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The recorded opaque time-lock delay for an election, if any.
    pub fn tlock_delay(&self, election_id: &str) -> Option<u64> {
        self.config.tlock_delays.get(election_id).copied()
    }

    /// Register a voter and return the hex encoding of the fresh public key.
    pub fn register_voter(&mut self, voter_id: &str) -> Result<String> {
        if self.registration_closed {
            return Err(VotingError::RegistrationClosed);
        }
        let record = self.roster.register(voter_id)?;
        record.public_key_hex()
    }

    /// Whether a voter has already cast a ballot in an election. Only
    /// tracked in OR-proof mode.
    pub fn has_voted(&self, voter_id: &str, election_id: &str) -> bool {
        self.cast_log
            .get(election_id)
            .map_or(false, |voters| voters.contains(voter_id))
    }

    /// All envelopes cast in an election, in insertion order.
    pub fn ballots(&self, election_id: &str) -> &[BallotEnvelope] {
        self.ballots
            .get(election_id)
            .map(|envelopes| envelopes.as_slice())
            .unwrap_or(&[])
    }

    /// Cast a binary vote in an election: seal the ballot under the voter's
    /// cancelling key and attach the configured proof.
    pub fn cast_vote(&mut self, voter_id: &str, vote: u64, election_id: &str) -> Result<()> {
        if vote > 1 {
            return Err(VotingError::InvalidVote(vote));
        }
        let voter = self
            .roster
            .get(voter_id)
            .ok_or_else(|| VotingError::UnknownVoter(voter_id.to_string()))?;
        if self.config.proof_mode == ProofMode::OrProof && self.has_voted(voter_id, election_id) {
            return Err(VotingError::AlreadyVoted {
                voter_id: voter_id.to_string(),
                election_id: election_id.to_string(),
            });
        }

        let bases = ElectionBases::derive(election_id)?;
        let cancelling_key = self.roster.cancelling_key(voter_id)?;
        let vote_scalar = Scalar::from(vote);
        let ballot = bases.seal(&cancelling_key, &voter.sk, &vote_scalar);

        let proof = match self.config.proof_mode {
            ProofMode::Schnorr => BallotProof::Knowledge(ProofOfVoteKnowledge::create(
                bases.vote_base(),
                &vote_scalar,
            )?),
            ProofMode::OrProof => BallotProof::Binary(ProofOfBinaryVote::create(
                bases.vote_base(),
                vote,
                election_id,
            )?),
        };

        // The cancelling keys are fixed by the roster from here on.
        self.registration_closed = true;

        self.ballots
            .entry(election_id.to_string())
            .or_default()
            .push(BallotEnvelope {
                election_id: election_id.to_string(),
                ballot,
                proof,
            });
        if self.config.proof_mode == ProofMode::OrProof {
            self.cast_log
                .entry(election_id.to_string())
                .or_default()
                .insert(voter_id.to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pairing::init_crypto;

    fn system(mode: ProofMode) -> VotingSystem {
        init_crypto().unwrap();
        VotingSystem::new(VotingConfig {
            proof_mode: mode,
            ..VotingConfig::default()
        })
    }

    #[test]
    fn registration_returns_public_key_hex() {
        let mut sys = system(ProofMode::OrProof);
        let pk_hex = sys.register_voter("tom").unwrap();
        assert_eq!(pk_hex.len(), 96);
        assert!(pk_hex.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn invalid_vote_leaves_stores_untouched() {
        let mut sys = system(ProofMode::OrProof);
        sys.register_voter("tom").unwrap();

        assert!(matches!(
            sys.cast_vote("tom", 2, "election"),
            Err(VotingError::InvalidVote(2))
        ));
        assert!(sys.ballots("election").is_empty());
        assert!(!sys.has_voted("tom", "election"));
        // Registration stays open after the failed cast.
        sys.register_voter("john").unwrap();
    }

    #[test]
    fn unknown_voter_cannot_cast() {
        let mut sys = system(ProofMode::OrProof);
        sys.register_voter("tom").unwrap();
        assert!(matches!(
            sys.cast_vote("ghost", 1, "election"),
            Err(VotingError::UnknownVoter(_))
        ));
    }

    #[test]
    fn or_proof_mode_enforces_one_ballot_per_voter() {
        let mut sys = system(ProofMode::OrProof);
        sys.register_voter("tom").unwrap();
        sys.cast_vote("tom", 1, "election").unwrap();

        assert!(matches!(
            sys.cast_vote("tom", 0, "election"),
            Err(VotingError::AlreadyVoted { .. })
        ));
        // The same voter may still vote in a different election.
        sys.cast_vote("tom", 0, "other-election").unwrap();
    }

    #[test]
    fn schnorr_mode_does_not_track_casts() {
        let mut sys = system(ProofMode::Schnorr);
        sys.register_voter("tom").unwrap();
        sys.cast_vote("tom", 1, "election").unwrap();
        sys.cast_vote("tom", 1, "election").unwrap();
        assert_eq!(sys.ballots("election").len(), 2);
        assert!(!sys.has_voted("tom", "election"));
    }

    #[test]
    fn first_cast_closes_registration() {
        let mut sys = system(ProofMode::OrProof);
        sys.register_voter("tom").unwrap();
        sys.register_voter("john").unwrap();
        sys.cast_vote("tom", 1, "election").unwrap();

        assert!(matches!(
            sys.register_voter("sarah"),
            Err(VotingError::RegistrationClosed)
        ));
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut sys = system(ProofMode::OrProof);
        sys.register_voter("tom").unwrap();
        assert!(matches!(
            sys.register_voter("tom"),
            Err(VotingError::DuplicateVoter(_))
        ));
    }
}
