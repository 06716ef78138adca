//! Hex wire format for persisted ballots and proofs
//!
//! Every field is the canonical compressed encoding of the element, hex
//! encoded. These types are the persistence boundary; in-memory code works
//! with the group elements directly.

use crate::ballot::{BallotEnvelope, BallotProof};
use crate::error::VotingError;
use crate::pairing;
use crate::proofs::{ProofOfBinaryVote, ProofOfVoteKnowledge};

/// Wire form of a knowledge proof.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnowledgeProofHex {
    pub a: String,
    pub s: String,
    pub pairing_base: String,
    pub vote_part: String,
}

/// Wire form of a binary-vote disjunction proof.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinaryProofHex {
    pub a0: String,
    pub a1: String,
    pub c0: String,
    pub c1: String,
    pub s0: String,
    pub s1: String,
    pub pairing_base: String,
    pub vote_part: String,
}

/// Wire form of either proof variant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BallotProofHex {
    Knowledge(KnowledgeProofHex),
    Binary(BinaryProofHex),
}

/// Wire form of a full ballot envelope.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BallotEnvelopeHex {
    pub election_id: String,
    pub ballot: String,
    pub proof: BallotProofHex,
}

impl TryFrom<&ProofOfVoteKnowledge> for KnowledgeProofHex {
    type Error = VotingError;

    fn try_from(proof: &ProofOfVoteKnowledge) -> Result<Self, VotingError> {
        Ok(KnowledgeProofHex {
            a: pairing::to_hex(&proof.a)?,
            s: pairing::to_hex(&proof.s)?,
            pairing_base: pairing::to_hex(&proof.pairing_base)?,
            vote_part: pairing::to_hex(&proof.vote_part)?,
        })
    }
}

impl TryFrom<&KnowledgeProofHex> for ProofOfVoteKnowledge {
    type Error = VotingError;

    fn try_from(wire: &KnowledgeProofHex) -> Result<Self, VotingError> {
        Ok(ProofOfVoteKnowledge {
            a: pairing::from_hex(&wire.a)?,
            s: pairing::from_hex(&wire.s)?,
            pairing_base: pairing::from_hex(&wire.pairing_base)?,
            vote_part: pairing::from_hex(&wire.vote_part)?,
        })
    }
}

impl TryFrom<&ProofOfBinaryVote> for BinaryProofHex {
    type Error = VotingError;

    fn try_from(proof: &ProofOfBinaryVote) -> Result<Self, VotingError> {
        Ok(BinaryProofHex {
            a0: pairing::to_hex(&proof.a0)?,
            a1: pairing::to_hex(&proof.a1)?,
            c0: pairing::to_hex(&proof.c0)?,
            c1: pairing::to_hex(&proof.c1)?,
            s0: pairing::to_hex(&proof.s0)?,
            s1: pairing::to_hex(&proof.s1)?,
            pairing_base: pairing::to_hex(&proof.pairing_base)?,
            vote_part: pairing::to_hex(&proof.vote_part)?,
        })
    }
}

impl TryFrom<&BinaryProofHex> for ProofOfBinaryVote {
    type Error = VotingError;

    fn try_from(wire: &BinaryProofHex) -> Result<Self, VotingError> {
        Ok(ProofOfBinaryVote {
            a0: pairing::from_hex(&wire.a0)?,
            a1: pairing::from_hex(&wire.a1)?,
            c0: pairing::from_hex(&wire.c0)?,
            c1: pairing::from_hex(&wire.c1)?,
            s0: pairing::from_hex(&wire.s0)?,
            s1: pairing::from_hex(&wire.s1)?,
            pairing_base: pairing::from_hex(&wire.pairing_base)?,
            vote_part: pairing::from_hex(&wire.vote_part)?,
        })
    }
}

impl TryFrom<&BallotProof> for BallotProofHex {
    type Error = VotingError;

    fn try_from(proof: &BallotProof) -> Result<Self, VotingError> {
        Ok(match proof {
            BallotProof::Knowledge(proof) => BallotProofHex::Knowledge(proof.try_into()?),
            BallotProof::Binary(proof) => BallotProofHex::Binary(proof.try_into()?),
        })
    }
}

impl TryFrom<&BallotProofHex> for BallotProof {
    type Error = VotingError;

    fn try_from(wire: &BallotProofHex) -> Result<Self, VotingError> {
        Ok(match wire {
            BallotProofHex::Knowledge(wire) => BallotProof::Knowledge(wire.try_into()?),
            BallotProofHex::Binary(wire) => BallotProof::Binary(wire.try_into()?),
        })
    }
}

impl TryFrom<&BallotEnvelope> for BallotEnvelopeHex {
    type Error = VotingError;

    fn try_from(envelope: &BallotEnvelope) -> Result<Self, VotingError> {
        Ok(BallotEnvelopeHex {
            election_id: envelope.election_id.clone(),
            ballot: pairing::to_hex(&envelope.ballot)?,
            proof: (&envelope.proof).try_into()?,
        })
    }
}

impl TryFrom<&BallotEnvelopeHex> for BallotEnvelope {
    type Error = VotingError;

    fn try_from(wire: &BallotEnvelopeHex) -> Result<Self, VotingError> {
        Ok(BallotEnvelope {
            election_id: wire.election_id.clone(),
            ballot: pairing::from_hex(&wire.ballot)?,
            proof: (&wire.proof).try_into()?,
        })
    }
}
