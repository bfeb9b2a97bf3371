//! Baby-step Giant-step algorithm for solving discrete logarithms in a
//! subgroup of `Z_p^*` of known order.
//!
//! For a subgroup of order `n` the solver uses `m = ceil(sqrt(n))` baby steps
//! and at most `m` giant steps, so both time and memory are `O(sqrt(n))`.
//! That is only tractable for small factors of `p - 1`, which is what the
//! Pohlig-Hellman decomposition hands it.

pub mod generator;
pub mod solver;

use num_bigint::BigUint;
use std::collections::BTreeMap;

/// Largest number of baby steps a table may hold.
///
/// This bounds the entry count, not the bytes: each entry owns a residue
/// of the modulus' size, so a full table over a 512-bit prime is on the
/// order of 2 GB. Subgroups with `ceil(sqrt(order))` above the cap are
/// rejected with `Error::SubgroupTooLarge` before any table is built.
pub const MAX_BABY_STEPS: u64 = 1 << 24;

/// Baby-step Giant-step solver.
///
/// The solver itself is stateless: every call builds its own
/// [`BabyStepTable`] and drops it on return, so no table is ever shared
/// between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct BabyStepGiantStep;

/// Baby-step table for one solve call.
pub struct BabyStepTable {
    /// m = ceil(sqrt(order)), the number of baby steps.
    pub m: u64,

    /// Baby-step lookup table: maps base^j mod p to j.
    /// Contains base^j for j = 0, 1, ..., m-1, ordered by value. If the base
    /// has smaller order than claimed, duplicates keep their lowest j.
    pub baby_steps: BTreeMap<BigUint, u64>,

    /// Precomputed giant step: (base^m)^-1 mod p, used to compute
    /// target * (base^-m)^i.
    pub giant_step: BigUint,
}

impl crate::DlogSolver for BabyStepGiantStep {
    fn solve(
        &self,
        target: &BigUint,
        base: &BigUint,
        order: &BigUint,
        modulus: &BigUint,
    ) -> crate::Result<BigUint> {
        BabyStepGiantStep::solve(self, target, base, order, modulus)
    }

    fn name(&self) -> &'static str {
        "bsgs"
    }
}
