//! El-Gamal signatures over the multiplicative group modulo a prime.
//!
//! A signature on a digest `m` under private key `x` is a pair
//! `(r, s) = (g^k mod p, (m - r*x) * k^-1 mod (p-1))` for a fresh ephemeral
//! `k` coprime to `p - 1`. It verifies when `y^r * r^s == g^m (mod p)`.

use crate::domain::DomainParameters;
use crate::error::{Error, Result};
use crate::utils;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use rand_core::{CryptoRng, OsRng, RngCore};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Upper bound on ephemeral draws before signing gives up.
///
/// A uniform `k` is coprime to `p - 1` with probability `phi(p-1)/(p-1)`,
/// which is small only for orders with very many small prime factors, so
/// hitting this cap means the randomness source is broken.
pub const MAX_EPHEMERAL_ATTEMPTS: usize = 4096;

/// An El-Gamal signature. `r` lies in `(0, p)`, `s` in `[0, p-1)`.
///
/// With the `serde` feature both components serialize as hex strings, the
/// text form the transport layer exchanges.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    #[cfg_attr(feature = "serde", serde(with = "serde_with::As::<utils::HexUint>"))]
    pub r: BigUint,
    #[cfg_attr(feature = "serde", serde(with = "serde_with::As::<utils::HexUint>"))]
    pub s: BigUint,
}

impl Signature {
    /// Parses the hex text form of `r` and `s`.
    pub fn from_hex(r: &str, s: &str) -> Result<Signature> {
        Ok(Signature {
            r: utils::parse_hex(r)?,
            s: utils::parse_hex(s)?,
        })
    }

    /// Returns `(r, s)` as lowercase hex.
    pub fn to_hex(&self) -> (String, String) {
        (utils::to_hex(&self.r), utils::to_hex(&self.s))
    }
}

/// Signs `digest` with `private_key`, drawing the ephemeral value from the
/// operating system's CSPRNG.
pub fn sign(
    digest: &BigUint,
    private_key: &BigUint,
    domain: &DomainParameters,
) -> Result<Signature> {
    sign_with_rng(digest, private_key, domain, &mut OsRng)
}

/// Signs `digest` with `private_key` using the given randomness source.
///
/// The caller is responsible for `private_key` matching the signer's public
/// key; a mismatched key produces a signature that simply fails to verify.
pub fn sign_with_rng<R: RngCore + CryptoRng>(
    digest: &BigUint,
    private_key: &BigUint,
    domain: &DomainParameters,
    rng: &mut R,
) -> Result<Signature> {
    if digest >= domain.modulus() {
        return Err(Error::InvalidDigest(digest.clone()));
    }

    let order = domain.order();
    let (k, k_inv) = draw_ephemeral(order, rng)?;

    let r = domain.pow_generator(&k);

    // s = (m - r*x) * k^-1 mod (p-1), kept non-negative
    let rx = (&r * private_key) % order;
    let m = digest % order;
    let s = ((m + order - rx) % order) * k_inv % order;

    Ok(Signature { r, s })
}

/// Draws `k` from `[1, p-2]` until `gcd(k, p-1) = 1`; returns `k` and its
/// inverse modulo `p - 1`.
fn draw_ephemeral<R: RngCore + CryptoRng>(
    order: &BigUint,
    rng: &mut R,
) -> Result<(BigUint, BigUint)> {
    let one = BigUint::one();

    for attempt in 1..=MAX_EPHEMERAL_ATTEMPTS {
        let k = utils::random_below(&one, order, rng);
        if !k.gcd(order).is_one() {
            continue;
        }

        let k_inv =
            utils::mod_inverse(&k, order).ok_or_else(|| Error::NotInvertible(k.clone(), order.clone()))?;
        debug!(attempt, "drew invertible ephemeral value");

        return Ok((k, k_inv));
    }

    Err(Error::EphemeralRetriesExhausted {
        attempts: MAX_EPHEMERAL_ATTEMPTS,
    })
}

/// Verifies `signature` on `digest` against `public_key`.
///
/// Malformed signatures (`r` outside `(0, p)`, `s` outside `[0, p-1)`) are
/// rejected like any other invalid signature. Use [`check_signature`] to
/// tell the two apart.
pub fn verify(
    digest: &BigUint,
    signature: &Signature,
    public_key: &BigUint,
    domain: &DomainParameters,
) -> bool {
    match check_signature(digest, signature, public_key, domain) {
        Ok(valid) => valid,
        Err(e) => {
            debug!(error = %e, "rejecting signature");
            false
        }
    }
}

/// Like [`verify`], but reports malformed signatures as
/// [`Error::MalformedSignature`] instead of `false`.
pub fn check_signature(
    digest: &BigUint,
    signature: &Signature,
    public_key: &BigUint,
    domain: &DomainParameters,
) -> Result<bool> {
    let p = domain.modulus();

    // range checks come before any exponentiation
    if signature.r.is_zero() || &signature.r >= p {
        return Err(Error::MalformedSignature("r is not in (0, p)"));
    }
    if &signature.s >= domain.order() {
        return Err(Error::MalformedSignature("s is not in [0, p-1)"));
    }

    let lhs = public_key.modpow(&signature.r, p) * signature.r.modpow(&signature.s, p) % p;
    let rhs = domain.pow_generator(digest);

    Ok(lhs == rhs)
}
