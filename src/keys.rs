use crate::domain::DomainParameters;
use crate::error::{Error, Result};
use crate::utils;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand_core::{CryptoRng, RngCore};

/// An El-Gamal key pair with `public_key = g^private_key mod p`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    pub private_key: BigUint,
    pub public_key: BigUint,
}

impl KeyPair {
    /// Draws a private key uniformly from `[1, p-2]`.
    pub fn generate<R: RngCore + CryptoRng>(domain: &DomainParameters, rng: &mut R) -> KeyPair {
        let private_key = utils::random_below(&BigUint::one(), domain.order(), rng);
        let public_key = domain.pow_generator(&private_key);

        KeyPair {
            private_key,
            public_key,
        }
    }

    /// Derives the public key for a known private key, e.g. one recovered by
    /// the Pohlig-Hellman attack.
    pub fn from_private_key(domain: &DomainParameters, private_key: BigUint) -> Result<KeyPair> {
        if private_key.is_zero() || &private_key >= domain.order() {
            return Err(Error::InvalidPrivateKey);
        }

        let public_key = domain.pow_generator(&private_key);
        Ok(KeyPair {
            private_key,
            public_key,
        })
    }

    /// Checks `public_key == g^private_key mod p`.
    pub fn is_consistent(&self, domain: &DomainParameters) -> bool {
        domain.pow_generator(&self.private_key) == self.public_key
    }
}
