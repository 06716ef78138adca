//! Shared configuration and mode types

use std::collections::HashMap;
use std::fmt;

/// Which zero-knowledge proof accompanies each ballot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProofMode {
    /// Schnorr-style proof of knowledge of the vote exponent. Does not bind
    /// the vote to {0, 1}, and duplicate ballots are not tracked in this mode.
    Schnorr,
    /// Chaum-Pedersen style disjunction showing the vote is 0 or 1, with
    /// one-ballot-per-voter enforcement.
    OrProof,
}

impl fmt::Display for ProofMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProofMode::Schnorr => write!(f, "Schnorr"),
            ProofMode::OrProof => write!(f, "OrProof"),
        }
    }
}

/// Configuration for a voting system
#[derive(Clone, Debug)]
pub struct VotingConfig {
    /// Per-election time-lock delays in seconds, recorded for an external
    /// time-lock collaborator. The core never interprets these.
    pub tlock_delays: HashMap<String, u64>,
    /// Proof variant attached to ballots at cast time.
    pub proof_mode: ProofMode,
}

impl Default for VotingConfig {
    fn default() -> Self {
        VotingConfig {
            tlock_delays: HashMap::new(),
            proof_mode: ProofMode::OrProof,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_or_proofs() {
        let config = VotingConfig::default();
        assert_eq!(config.proof_mode, ProofMode::OrProof);
        assert!(config.tlock_delays.is_empty());
    }

    #[test]
    fn proof_mode_display() {
        assert_eq!(ProofMode::Schnorr.to_string(), "Schnorr");
        assert_eq!(ProofMode::OrProof.to_string(), "OrProof");
    }
}
