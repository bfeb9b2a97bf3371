use super::{BabyStepTable, MAX_BABY_STEPS};
use crate::error::{Error, Result};
use crate::utils;

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};
use std::collections::BTreeMap;

impl BabyStepTable {
    /// Generates the baby-step table for a subgroup of order `order`.
    ///
    /// Baby step: compute base^j for j = 0, 1, ..., m-1 and store them keyed
    /// by value. Also precompute (base^m)^-1 for the giant step phase.
    pub fn generate(base: &BigUint, order: &BigUint, modulus: &BigUint) -> Result<BabyStepTable> {
        let m = utils::ceil_sqrt(order)
            .to_u64()
            .filter(|m| *m <= MAX_BABY_STEPS)
            .ok_or_else(|| Error::SubgroupTooLarge {
                order: order.clone(),
            })?;

        let base = base % modulus;
        let mut baby_steps = BTreeMap::new();
        let mut current = BigUint::one(); // base^0

        for j in 0..m {
            baby_steps.entry(current.clone()).or_insert(j);
            current = current * &base % modulus;
        }

        // current is now base^m
        let giant_step = utils::mod_inverse(&current, modulus)
            .ok_or_else(|| Error::NotInvertible(current.clone(), modulus.clone()))?;

        Ok(BabyStepTable {
            m,
            baby_steps,
            giant_step,
        })
    }

    /// Looks up `value` among the baby steps.
    pub fn lookup(&self, value: &BigUint) -> Option<u64> {
        self.baby_steps.get(value).copied()
    }
}
