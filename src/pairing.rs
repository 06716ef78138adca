//! BLS12-381 pairing primitives: scalars, source groups, the pairing, and
//! canonical serialization.
//!
//! Every value handed out by this module is immutable after construction and
//! safe to share across threads. The generator is derived once per process;
//! all participants in an election must run the same derivation.

use ark_bls12_381::{g1, g2, Bls12_381, Fq12, Fr, G1Projective, G2Projective};
use ark_ec::hashing::{
    curve_maps::wb::WBMap, map_to_curve_hasher::MapToCurveBasedHasher, HashToCurve,
};
use ark_ec::pairing::Pairing;
use ark_ec::AffineRepr;
use ark_ff::field_hashers::DefaultFieldHasher;
use ark_ff::{Field, One, PrimeField, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::UniformRand;
use rand::thread_rng;
use sha2::Sha256;
use std::sync::OnceLock;

use crate::error::{Result, VotingError};

/// An element of the BLS12-381 scalar field.
pub type Scalar = Fr;

/// A point in the first source group; carries the generator and voter keys.
pub type G1 = G1Projective;

/// A point in the second source group; carries per-election hash points.
pub type G2 = G2Projective;

/// An element of the pairing target group, written multiplicatively.
pub type Gt = Fq12;

/// Domain string hashed to G1 to derive the shared generator.
const GENERATOR_SEED: &[u8] = b"generator";

/// Domain separation tags for hashing to the source groups.
const G1_DST: &[u8] = b"SELFTALLY-V1-BLS12381G1_XMD:SHA-256_SSWU_RO_";
const G2_DST: &[u8] = b"SELFTALLY-V1-BLS12381G2_XMD:SHA-256_SSWU_RO_";

static GENERATOR: OnceLock<G1> = OnceLock::new();

type G1Hasher = MapToCurveBasedHasher<G1, DefaultFieldHasher<Sha256, 128>, WBMap<g1::Config>>;
type G2Hasher = MapToCurveBasedHasher<G2, DefaultFieldHasher<Sha256, 128>, WBMap<g2::Config>>;

/// Initialize the pairing layer. Idempotent and safe to call from multiple
/// threads; must complete once per process before any ballot is cast so that
/// every participant shares the same generator.
pub fn init_crypto() -> Result<()> {
    generator().map(|_| ())
}

/// The process-wide G1 generator, derived by hashing a fixed domain string.
pub fn generator() -> Result<G1> {
    match GENERATOR.get() {
        Some(g) => Ok(*g),
        None => {
            let g = hash_to_g1(GENERATOR_SEED)?;
            Ok(*GENERATOR.get_or_init(|| g))
        }
    }
}

/// Uniform random scalar from the process CSPRNG.
pub fn random_scalar() -> Scalar {
    Scalar::rand(&mut thread_rng())
}

/// Scalar from a hash output, reduced into the field.
pub fn scalar_from_hash(bytes: &[u8]) -> Scalar {
    Scalar::from_be_bytes_mod_order(bytes)
}

/// Hash arbitrary bytes to a G1 point using the IETF SSWU suite.
pub fn hash_to_g1(message: &[u8]) -> Result<G1> {
    let hasher = G1Hasher::new(G1_DST).map_err(|e| VotingError::CryptoInit(e.to_string()))?;
    let point = hasher
        .hash(message)
        .map_err(|e| VotingError::CryptoInit(e.to_string()))?;
    Ok(point.into_group())
}

/// Hash arbitrary bytes (an election id) to a G2 point.
pub fn hash_to_g2(message: &[u8]) -> Result<G2> {
    let hasher = G2Hasher::new(G2_DST).map_err(|e| VotingError::CryptoInit(e.to_string()))?;
    let point = hasher
        .hash(message)
        .map_err(|e| VotingError::CryptoInit(e.to_string()))?;
    Ok(point.into_group())
}

/// The bilinear pairing e: G1 x G2 -> GT.
pub fn pairing(p: &G1, q: &G2) -> Gt {
    Bls12_381::pairing(*p, *q).0
}

/// Identity element of the first source group.
pub fn g1_identity() -> G1 {
    G1Projective::zero()
}

/// Multiplicative identity of the target group.
pub fn gt_identity() -> Gt {
    Fq12::one()
}

/// Exponentiation in the target group by a scalar.
pub fn gt_pow(base: &Gt, exponent: &Scalar) -> Gt {
    base.pow(exponent.into_bigint())
}

/// Canonical compressed byte encoding, shared by all group and field elements.
pub fn to_bytes<T: CanonicalSerialize>(value: &T) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(value.compressed_size());
    value
        .serialize_compressed(&mut bytes)
        .map_err(|e| VotingError::Serialization(e.to_string()))?;
    Ok(bytes)
}

/// Hex form of the canonical encoding.
pub fn to_hex<T: CanonicalSerialize>(value: &T) -> Result<String> {
    Ok(hex::encode(to_bytes(value)?))
}

/// Decode an element from its canonical hex encoding, validating curve and
/// subgroup membership where applicable.
pub fn from_hex<T: CanonicalDeserialize>(encoded: &str) -> Result<T> {
    let bytes = hex::decode(encoded).map_err(|e| VotingError::Serialization(e.to_string()))?;
    T::deserialize_compressed(bytes.as_slice()).map_err(|e| VotingError::Serialization(e.to_string()))
}
