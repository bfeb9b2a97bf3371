//! Factorization of the group order `p - 1` into coprime prime powers.

use crate::domain::DomainParameters;
use crate::error::{Error, Result};
use crate::utils;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;

/// Distinct prime-power factors `f_1, ..., f_n` of `p - 1`.
///
/// Construction fails unless the factors are pairwise coprime and multiply
/// to exactly `p - 1`. There is no way to build a partial table: recovering
/// a key against an incomplete factorization would silently produce a wrong
/// exponent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorTable {
    factors: Vec<BigUint>,
    /// The group order the factors were checked against.
    order: BigUint,
}

impl FactorTable {
    pub fn new(domain: &DomainParameters, factors: Vec<BigUint>) -> Result<FactorTable> {
        let one = BigUint::one();

        if let Some(bad) = factors.iter().find(|f| *f <= &one) {
            return Err(Error::InvalidFactor(bad.clone()));
        }

        for (i, a) in factors.iter().enumerate() {
            for b in &factors[i + 1..] {
                if !a.gcd(b).is_one() {
                    return Err(Error::FactorsNotCoprime {
                        a: a.clone(),
                        b: b.clone(),
                    });
                }
            }
        }

        let product = factors.iter().fold(BigUint::one(), |acc, f| acc * f);
        if &product != domain.order() {
            return Err(Error::FactorProductMismatch {
                expected: domain.order().clone(),
                actual: product,
            });
        }

        tracing::debug!(
            factors = factors.len(),
            order_bits = domain.order().bits(),
            "factor table covers p-1"
        );

        Ok(FactorTable {
            factors,
            order: domain.order().clone(),
        })
    }

    /// Parses a list of hex-encoded prime powers, the format the
    /// configuration source uses.
    pub fn from_hex<S: AsRef<str>>(domain: &DomainParameters, factors: &[S]) -> Result<FactorTable> {
        let factors = factors
            .iter()
            .map(|f| utils::parse_hex(f.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        FactorTable::new(domain, factors)
    }

    pub fn factors(&self) -> &[BigUint] {
        &self.factors
    }

    /// The group order `p - 1` this table factors.
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BigUint> {
        self.factors.iter()
    }

    /// Returns an error unless this table was built for `domain`.
    pub fn check_domain(&self, domain: &DomainParameters) -> Result<()> {
        if &self.order != domain.order() {
            return Err(Error::DomainMismatch {
                table: self.order.clone(),
                domain: domain.order().clone(),
            });
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a FactorTable {
    type Item = &'a BigUint;
    type IntoIter = std::slice::Iter<'a, BigUint>;

    fn into_iter(self) -> Self::IntoIter {
        self.factors.iter()
    }
}
