//! Error types for the voting core

use thiserror::Error;

pub type Result<T> = std::result::Result<T, VotingError>;

#[derive(Error, Debug)]
pub enum VotingError {
    #[error("pairing backend failed to initialize: {0}")]
    CryptoInit(String),

    #[error("unknown voter: {0}")]
    UnknownVoter(String),

    #[error("voter already registered: {0}")]
    DuplicateVoter(String),

    #[error("vote must be 0 or 1, got {0}")]
    InvalidVote(u64),

    #[error("voter {voter_id} has already cast a ballot in election {election_id}")]
    AlreadyVoted {
        voter_id: String,
        election_id: String,
    },

    #[error("registration is closed: ballots have already been cast against this roster")]
    RegistrationClosed,

    #[error("ballot proof verification failed: {0}")]
    ProofVerificationFailed(String),

    #[error("tally not found in the searched range 0..={max_votes}")]
    TallyFailed { max_votes: u64 },

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}
