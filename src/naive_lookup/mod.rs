//! Naive search for discrete logarithms in tiny subgroups.
//!
//! Walks base^0, base^1, ... until it hits the target. There is no table;
//! solve time is O(order), which is competitive with BSGS only for the very
//! small prime powers that dominate a smooth `p - 1`.

use crate::error::{Error, Result};

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};

/// Largest subgroup order the naive solver accepts.
pub const MAX_NAIVE_ORDER: u64 = 1 << 24;

/// Naive linear-scan solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveLookup;

impl NaiveLookup {
    /// Solves target = base^x mod p by trying x = 0, 1, ..., order-1.
    pub fn solve(
        &self,
        target: &BigUint,
        base: &BigUint,
        order: &BigUint,
        modulus: &BigUint,
    ) -> Result<BigUint> {
        let n = order
            .to_u64()
            .filter(|n| *n <= MAX_NAIVE_ORDER)
            .ok_or_else(|| Error::SubgroupTooLarge {
                order: order.clone(),
            })?;

        let target = target % modulus;
        let base = base % modulus;
        let mut current = BigUint::one();

        for x in 0..n {
            if current == target {
                return Ok(BigUint::from(x));
            }
            current = current * &base % modulus;
        }

        Err(Error::NoSolution {
            order: order.clone(),
        })
    }
}

impl crate::DlogSolver for NaiveLookup {
    fn solve(
        &self,
        target: &BigUint,
        base: &BigUint,
        order: &BigUint,
        modulus: &BigUint,
    ) -> Result<BigUint> {
        NaiveLookup::solve(self, target, base, order, modulus)
    }

    fn name(&self) -> &'static str {
        "naive"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DlogSolver;

    #[test]
    fn naive_handles_identity() {
        let x = NaiveLookup
            .solve(&1u8.into(), &16u8.into(), &7u8.into(), &29u8.into())
            .unwrap();
        assert_eq!(x, BigUint::from(0u8));
    }

    #[test]
    fn naive_agrees_with_bsgs() {
        let p = BigUint::from(4679u16);
        let g = BigUint::from(807u16);
        let order = BigUint::from(4678u16);
        let bsgs = crate::bsgs::BabyStepGiantStep;

        for x in [1u16, 2, 66, 1000, 2339, 4677] {
            let y = g.modpow(&x.into(), &p);
            let naive = DlogSolver::solve(&NaiveLookup, &y, &g, &order, &p).unwrap();
            let fast = DlogSolver::solve(&bsgs, &y, &g, &order, &p).unwrap();
            assert_eq!(naive, BigUint::from(x));
            assert_eq!(fast, naive);
        }
    }

    #[test]
    fn naive_rejects_large_order() {
        let order = BigUint::from(MAX_NAIVE_ORDER + 1);
        let err = NaiveLookup
            .solve(&2u8.into(), &3u8.into(), &order, &(&order + 1u8))
            .unwrap_err();
        assert!(matches!(err, Error::SubgroupTooLarge { .. }));
    }
}
