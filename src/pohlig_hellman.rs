//! Pohlig-Hellman recovery of El-Gamal private keys.
//!
//! When `p - 1` factors into small coprime prime powers `f_1 ... f_n`, the
//! discrete log `x` of `y = g^x mod p` splits into `n` independent problems:
//! raising both sides to `e_i = (p-1)/f_i` moves them into the subgroup of
//! order `f_i`, where a baby-step giant-step search yields `x mod f_i`. The
//! Chinese Remainder Theorem puts the residues back together.

use crate::bsgs::BabyStepGiantStep;
use crate::domain::DomainParameters;
use crate::elgamal::{self, Signature};
use crate::error::{Error, Result};
use crate::factors::FactorTable;
use crate::traits::DlogSolver;
use crate::utils;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use tracing::{debug, info, instrument, warn};
use web_time::Instant;

/// A private key recovered from a public key, and a signature made with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Forgery {
    pub private_key: BigUint,
    pub signature: Signature,
}

/// Recovers `x` with `public_key = g^x mod p`, solving each subgroup with
/// baby-step giant-step.
pub fn recover_private_key(
    public_key: &BigUint,
    domain: &DomainParameters,
    factors: &FactorTable,
) -> Result<BigUint> {
    recover_private_key_with(&BabyStepGiantStep, public_key, domain, factors)
}

/// Recovers `x` with `public_key = g^x mod p` using `solver` for the
/// per-factor subproblems.
///
/// The result is reduced modulo `p - 1`. If `g` generates the whole group it
/// is the unique private key; otherwise it is some exponent that reproduces
/// `public_key`, which is all a forger needs.
#[instrument(skip_all, fields(solver = solver.name(), factors = factors.len()))]
pub fn recover_private_key_with<S: DlogSolver + ?Sized>(
    solver: &S,
    public_key: &BigUint,
    domain: &DomainParameters,
    factors: &FactorTable,
) -> Result<BigUint> {
    factors.check_domain(domain)?;

    let p = domain.modulus();
    let order = domain.order();
    let start = Instant::now();

    let mut congruences = Vec::with_capacity(factors.len());
    for f in factors {
        let e = order / f;
        let base = domain.generator().modpow(&e, p);
        let target = public_key.modpow(&e, p);

        let factor_start = Instant::now();
        let residue = solver.solve(&target, &base, f, p)?;
        debug!(
            factor = %f,
            residue = %residue,
            elapsed_ms = factor_start.elapsed().as_millis() as u64,
            "solved subgroup"
        );

        congruences.push((residue, f.clone()));
    }

    let x = crt(&congruences)?;

    if domain.pow_generator(&x) != public_key % p {
        warn!("combined exponent does not reproduce the public key");
        return Err(Error::InconsistentRecovery);
    }

    info!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        "recovered private key"
    );

    Ok(x)
}

/// Combines congruences `x = a_i mod n_i` for pairwise coprime `n_i` into
/// the unique `x` modulo `N = prod n_i`.
///
/// Computes `sum a_i * (N/n_i) * ((N/n_i)^-1 mod n_i) mod N`.
pub fn crt(congruences: &[(BigUint, BigUint)]) -> Result<BigUint> {
    let n = congruences
        .iter()
        .fold(BigUint::one(), |acc, (_, modulus)| acc * modulus);

    let mut sum = BigUint::zero();
    for (residue, modulus) in congruences {
        if modulus.is_zero() {
            return Err(Error::InvalidFactor(modulus.clone()));
        }

        let n_i = &n / modulus;
        let partial = utils::mod_inverse(&n_i, modulus)
            .ok_or_else(|| Error::NotInvertible(n_i.clone(), modulus.clone()))?;

        sum += (residue % modulus) * n_i * partial;
    }

    Ok(sum % n)
}

/// Recovers the private key behind `public_key` and signs `digest` with it.
///
/// This is the complete attack: the returned signature verifies against
/// `public_key` although the signer's secret was never known.
pub fn forge(
    digest: &BigUint,
    public_key: &BigUint,
    domain: &DomainParameters,
    factors: &FactorTable,
) -> Result<Forgery> {
    let private_key = recover_private_key(public_key, domain, factors)?;
    let signature = elgamal::sign(digest, &private_key, domain)?;

    Ok(Forgery {
        private_key,
        signature,
    })
}
