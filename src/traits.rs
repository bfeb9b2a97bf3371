//! Traits for discrete logarithm solvers.

use crate::error::Result;
use num_bigint::BigUint;

/// Trait for solvers of discrete logarithms inside a cyclic subgroup of
/// known order.
///
/// The Pohlig-Hellman combiner reduces the full problem to one instance of
/// this per factor of `p - 1` and is generic over the solver used.
pub trait DlogSolver {
    /// Solves `target = base^x mod modulus` for `x` in `[0, order)`.
    ///
    /// # Arguments
    /// * `target` - The element whose logarithm is wanted.
    /// * `base` - A generator of the subgroup, of order `order`.
    /// * `order` - The subgroup order.
    /// * `modulus` - The prime `p`.
    ///
    /// # Returns
    /// * `Ok(x)` - The discrete log.
    /// * `Err(Error::NoSolution)` - If no exponent in `[0, order)` works.
    fn solve(
        &self,
        target: &BigUint,
        base: &BigUint,
        order: &BigUint,
        modulus: &BigUint,
    ) -> Result<BigUint>;

    /// Short name used in log output.
    fn name(&self) -> &'static str;
}
