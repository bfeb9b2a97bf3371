//! Shared group parameters: a prime modulus `p` and a generator `g`.

use crate::error::{Error, Result};
use crate::utils;

use num_bigint::BigUint;
use num_traits::One;

/// Domain parameters of the multiplicative group modulo a prime.
///
/// Immutable once built. Every signing, verification and recovery call takes
/// them by reference. The modulus is assumed prime (it comes from
/// configuration); only its size and the generator range are checked here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainParameters {
    modulus: BigUint,
    generator: BigUint,
    /// Cached `p - 1`, the order of the full group.
    order: BigUint,
}

impl DomainParameters {
    pub fn new(modulus: BigUint, generator: BigUint) -> Result<DomainParameters> {
        if modulus < BigUint::from(5u8) {
            return Err(Error::InvalidDomain(format!(
                "modulus {} is too small",
                modulus
            )));
        }

        if generator <= BigUint::one() || generator >= modulus {
            return Err(Error::InvalidDomain(format!(
                "generator {} is not in (1, {})",
                generator, modulus
            )));
        }

        let order = &modulus - 1u8;

        Ok(DomainParameters {
            modulus,
            generator,
            order,
        })
    }

    /// Builds domain parameters from the hex strings a configuration source
    /// hands out.
    pub fn from_hex(modulus: &str, generator: &str) -> Result<DomainParameters> {
        DomainParameters::new(utils::parse_hex(modulus)?, utils::parse_hex(generator)?)
    }

    /// The prime modulus `p`.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// The generator `g`.
    pub fn generator(&self) -> &BigUint {
        &self.generator
    }

    /// The group order `p - 1`.
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    /// Computes `g^e mod p`.
    pub fn pow_generator(&self, exponent: &BigUint) -> BigUint {
        self.generator.modpow(exponent, &self.modulus)
    }
}
