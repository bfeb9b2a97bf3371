//! Error types for signing, verification and discrete-log recovery.

use num_bigint::BigUint;
use thiserror::Error;

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the El-Gamal core and the discrete-log attack.
///
/// Configuration errors (bad domain, bad factor table) are fatal for the
/// operation that hits them. Solver errors mean a subgroup problem had no
/// answer in the range it was asked about.
#[derive(Debug, Error)]
pub enum Error {
    /// Modulus or generator is unusable.
    #[error("invalid domain parameters: {0}")]
    InvalidDomain(String),

    /// A factor in the factor table is not a usable modulus.
    #[error("invalid factor {0}")]
    InvalidFactor(BigUint),

    /// The factors do not multiply to `p - 1`.
    #[error("factors multiply to {actual}, expected p-1 = {expected}")]
    FactorProductMismatch { expected: BigUint, actual: BigUint },

    /// Two factors share a common divisor, so CRT cannot combine them.
    #[error("factors {a} and {b} are not coprime")]
    FactorsNotCoprime { a: BigUint, b: BigUint },

    /// The factor table was built for a different modulus.
    #[error("factor table covers group order {table}, domain has order {domain}")]
    DomainMismatch { table: BigUint, domain: BigUint },

    /// Private exponent outside `(0, p-1)`.
    #[error("private key out of range (0, p-1)")]
    InvalidPrivateKey,

    /// Digest is not reduced below the modulus.
    #[error("digest {0} is not below the modulus")]
    InvalidDigest(BigUint),

    /// Configuration file could not be read or decoded.
    #[error("configuration error: {0}")]
    Config(String),

    /// Text input could not be parsed as a number.
    #[error("parse error: {0}")]
    Parse(String),

    /// The baby-step table for this subgroup would not fit in memory.
    #[error("subgroup of order {order} is too large for baby-step giant-step")]
    SubgroupTooLarge { order: BigUint },

    /// No exponent in `[0, order)` maps the base onto the target.
    #[error("no discrete logarithm found in subgroup of order {order}")]
    NoSolution { order: BigUint },

    /// CRT produced an exponent that does not reproduce the public key.
    #[error("recovered exponent does not reproduce the public key")]
    InconsistentRecovery,

    /// No invertible ephemeral value was drawn within the retry cap.
    #[error("no invertible ephemeral value after {attempts} attempts")]
    EphemeralRetriesExhausted { attempts: usize },

    /// A modular inverse that must exist did not.
    #[error("{0} has no inverse modulo {1}")]
    NotInvertible(BigUint, BigUint),

    /// Signature components outside their valid ranges.
    #[error("malformed signature: {0}")]
    MalformedSignature(&'static str),
}
