//! # Self-Tallying Pairing-Based Voting
//!
//! Cryptographic core of a privacy-preserving voting system over the
//! BLS12-381 curve:
//!
//! - Ballots are sealed in the pairing target group under per-voter
//!   cancelling keys, so individual votes stay hidden while their product
//!   reveals only the sum.
//! - Every ballot carries a non-interactive zero-knowledge proof, either a
//!   Schnorr-style proof of knowledge of the vote exponent or a
//!   Chaum-Pedersen style disjunction showing the vote is 0 or 1.
//! - Tallying verifies each proof, multiplies the valid ballots, and
//!   recovers the count with a small-range discrete-log search.
//!
//! All voters must be registered before the first ballot is cast, and every
//! registered voter must cast for the key material to cancel out of the
//! aggregate.
//!
//! ## Example
//!
//! ```rust
//! use selftally::{init_crypto, TallyOperations, VotingConfig, VotingSystem};
//!
//! init_crypto().unwrap();
//!
//! let mut system = VotingSystem::new(VotingConfig::default());
//! system.register_voter("alice").unwrap();
//! system.register_voter("bob").unwrap();
//!
//! system.cast_vote("alice", 1, "election/2025").unwrap();
//! system.cast_vote("bob", 0, "election/2025").unwrap();
//!
//! let tally = system.encrypt_tally("election/2025").unwrap();
//! let count = system.decrypt_tally("election/2025", &tally, 2).unwrap();
//! assert_eq!(count, 1);
//! ```

pub mod ballot;
pub mod error;
pub mod pairing;
pub mod proofs;
pub mod roster;
pub mod tally;
pub mod transcript;
pub mod types;
pub mod voting;
pub mod wire;

// Re-export main types for convenience
pub use ballot::{BallotEnvelope, BallotProof, ElectionBases};
pub use error::{Result, VotingError};
pub use pairing::{init_crypto, Scalar, G1, G2, Gt};
pub use proofs::{ProofOfBinaryVote, ProofOfVoteKnowledge};
pub use roster::{Roster, VoterRecord};
pub use tally::{EncryptedTally, TallyOperations};
pub use transcript::Hashable;
pub use types::{ProofMode, VotingConfig};
pub use voting::VotingSystem;
pub use wire::{BallotEnvelopeHex, BallotProofHex, BinaryProofHex, KnowledgeProofHex};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
