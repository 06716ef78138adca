//! Per-election pairing bases and sealed ballot envelopes

use crate::error::Result;
use crate::pairing::{self, generator, gt_pow, Gt, Scalar, G1, G2};
use crate::proofs::{ProofOfBinaryVote, ProofOfVoteKnowledge};

/// Pairing bases fixed by an election id: the hash point H and the vote base
/// B = e(g, H) shared by every voter in the election.
#[derive(Clone, Debug)]
pub struct ElectionBases {
    h: G2,
    vote_base: Gt,
}

impl ElectionBases {
    /// Derive the bases for an election by hashing its id to G2.
    pub fn derive(election_id: &str) -> Result<Self> {
        let h = pairing::hash_to_g2(election_id.as_bytes())?;
        let vote_base = pairing::pairing(&generator()?, &h);
        Ok(ElectionBases { h, vote_base })
    }

    pub fn vote_base(&self) -> &Gt {
        &self.vote_base
    }

    /// The per-voter base e(Y_j, H) whose secret-key exponent blinds the
    /// ballot.
    pub fn voter_base(&self, cancelling_key: &G1) -> Gt {
        pairing::pairing(cancelling_key, &self.h)
    }

    /// Seal one ballot: e(Y_j, H)^sk · B^v.
    pub(crate) fn seal(&self, cancelling_key: &G1, sk: &Scalar, vote: &Scalar) -> Gt {
        gt_pow(&self.voter_base(cancelling_key), sk) * gt_pow(&self.vote_base, vote)
    }
}

/// The proof accompanying a ballot, one of the two supported variants.
#[derive(Clone, Debug)]
pub enum BallotProof {
    Knowledge(ProofOfVoteKnowledge),
    Binary(ProofOfBinaryVote),
}

impl BallotProof {
    /// Check every equation of the carried proof against the election's
    /// vote base.
    pub fn verify(&self, vote_base: &Gt, election_id: &str) -> Result<()> {
        match self {
            BallotProof::Knowledge(proof) => proof.verify(vote_base),
            BallotProof::Binary(proof) => proof.verify(vote_base, election_id),
        }
    }
}

/// A cast ballot bound to its election and proof.
#[derive(Clone, Debug)]
pub struct BallotEnvelope {
    pub(crate) election_id: String,
    pub(crate) ballot: Gt,
    pub(crate) proof: BallotProof,
}

impl BallotEnvelope {
    pub fn election_id(&self) -> &str {
        &self.election_id
    }

    pub fn ballot(&self) -> &Gt {
        &self.ballot
    }

    pub fn proof(&self) -> &BallotProof {
        &self.proof
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pairing::{gt_identity, init_crypto};
    use crate::roster::Roster;

    #[test]
    fn bases_are_deterministic_per_election() {
        init_crypto().unwrap();
        let a = ElectionBases::derive("election/1").unwrap();
        let b = ElectionBases::derive("election/1").unwrap();
        let c = ElectionBases::derive("election/2").unwrap();
        assert_eq!(a.vote_base(), b.vote_base());
        assert_ne!(a.vote_base(), c.vote_base());
    }

    #[test]
    fn ballots_aggregate_to_vote_sum() {
        init_crypto().unwrap();
        let mut roster = Roster::new();
        for id in ["a", "b", "c", "d", "e"] {
            roster.register(id).unwrap();
        }
        let bases = ElectionBases::derive("aggregate-check").unwrap();

        let votes = [1u64, 0, 1, 1, 0];
        let mut product = gt_identity();
        for (voter, vote) in roster.iter().zip(votes) {
            let key = roster.cancelling_key(voter.voter_id()).unwrap();
            product *= bases.seal(&key, &voter.sk, &Scalar::from(vote));
        }

        // The key material cancels across the roster, leaving B^Σv.
        let expected = gt_pow(bases.vote_base(), &Scalar::from(3u64));
        assert_eq!(product, expected);
    }

    #[test]
    fn single_voter_ballot_is_bare_vote() {
        init_crypto().unwrap();
        let mut roster = Roster::new();
        roster.register("only").unwrap();
        let bases = ElectionBases::derive("solo").unwrap();

        // With one voter the cancelling key is the identity, so the ballot
        // is B^v outright.
        let key = roster.cancelling_key("only").unwrap();
        let voter = roster.get("only").unwrap();
        let ballot = bases.seal(&key, &voter.sk, &Scalar::from(1u64));
        assert_eq!(ballot, *bases.vote_base());
    }
}
