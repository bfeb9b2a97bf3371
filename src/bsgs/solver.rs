use super::{BabyStepGiantStep, BabyStepTable};
use crate::error::{Error, Result};

use num_bigint::BigUint;
use num_traits::{One, Zero};
use tracing::trace;

impl BabyStepGiantStep {
    /// Solves the discrete logarithm problem using Baby-step Giant-step.
    ///
    /// Given target = base^x mod p with base of order `order`, finds x in
    /// [0, order).
    ///
    /// Algorithm:
    /// 1. Build the baby-step table base^j, j in [0, m).
    /// 2. For i = 0, 1, ..., m-1:
    ///    - Compute gamma = target * (base^(-m))^i
    ///    - If gamma is in the baby-step table with value j, then x = i*m + j
    pub fn solve(
        &self,
        target: &BigUint,
        base: &BigUint,
        order: &BigUint,
        modulus: &BigUint,
    ) -> Result<BigUint> {
        let target = target % modulus;

        // The identity is base^0 in every subgroup
        if target.is_one() {
            return Ok(BigUint::zero());
        }

        // The trivial subgroup holds nothing else
        if order.is_one() {
            return Err(Error::NoSolution {
                order: order.clone(),
            });
        }

        let table = BabyStepTable::generate(base, order, modulus)?;
        let m = table.m;
        trace!(m, %order, "built baby-step table");

        // gamma starts as target, then we multiply by base^(-m) each iteration
        let mut gamma = target.clone();

        for i in 0..m {
            if let Some(j) = table.lookup(&gamma) {
                let x = BigUint::from(i) * m + j;

                debug_assert_eq!(base.modpow(&x, modulus), target);
                trace!(giant_steps = i, %x, "baby-step match");

                return Ok(x);
            }

            gamma = gamma * &table.giant_step % modulus;
        }

        // No solution found in the range [0, m^2)
        Err(Error::NoSolution {
            order: order.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solves_order_seven_subgroup_of_z29() {
        // 2 generates Z_29^*, so 2^4 = 16 has order 7
        let p = BigUint::from(29u8);
        let base = BigUint::from(16u8);
        let order = BigUint::from(7u8);

        for x in 0u8..7 {
            let target = base.modpow(&x.into(), &p);
            let solved = BabyStepGiantStep.solve(&target, &base, &order, &p).unwrap();
            assert_eq!(solved, BigUint::from(x), "failed for x = {}", x);
        }

        // 16^5 = 23 mod 29
        assert_eq!(
            BabyStepGiantStep
                .solve(&23u8.into(), &base, &order, &p)
                .unwrap(),
            BigUint::from(5u8)
        );
    }

    #[test]
    fn order_one_returns_zero() {
        let p = BigUint::from(29u8);
        // base 1 has order 1; the answer is 0 whatever the giant step would be
        let x = BabyStepGiantStep
            .solve(&1u8.into(), &1u8.into(), &1u8.into(), &p)
            .unwrap();
        assert_eq!(x, BigUint::zero());
    }

    #[test]
    fn order_one_rejects_other_targets() {
        let p = BigUint::from(29u8);
        let err = BabyStepGiantStep
            .solve(&5u8.into(), &1u8.into(), &1u8.into(), &p)
            .unwrap_err();
        assert!(matches!(err, Error::NoSolution { .. }));
    }

    #[test]
    fn target_outside_subgroup_has_no_solution() {
        let p = BigUint::from(29u8);
        // 2 is not in the order-7 subgroup generated by 16
        let err = BabyStepGiantStep
            .solve(&2u8.into(), &16u8.into(), &7u8.into(), &p)
            .unwrap_err();
        assert!(matches!(err, Error::NoSolution { .. }));
    }

    #[test]
    fn solves_full_group_of_4679() {
        let p = BigUint::from(4679u16);
        let g = BigUint::from(807u16);
        let order = BigUint::from(4678u16);

        // 807^66 = 1452 mod 4679
        let x = BabyStepGiantStep
            .solve(&1452u16.into(), &g, &order, &p)
            .unwrap();
        assert_eq!(x, BigUint::from(66u8));
    }
}
