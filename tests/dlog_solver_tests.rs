//! Generic tests for all subgroup DLog solver implementations.
//!
//! For each solver we walk every prime-power subgroup of a few small prime
//! fields and check that it recovers every exponent in [0, order).

use elgamal_dlog::bsgs::BabyStepGiantStep;
use elgamal_dlog::naive_lookup::NaiveLookup;
use elgamal_dlog::{DlogSolver, DomainParameters, FactorTable};
use num_bigint::BigUint;

/// (p, g, factors of p-1 in hex) with g a generator of Z_p^*.
const TEST_DOMAINS: &[(u32, u32, &[&str])] = &[
    (29, 2, &["4", "7"]),
    (673, 5, &["20", "3", "7"]),
    (4679, 807, &["2", "923"]),
    (98533, 2, &["4", "9", "7", "11", "17"]),
];

/// Tests a solver on every value of the subgroup of order `f`.
fn test_all_values<S: DlogSolver>(solver: &S, domain: &DomainParameters, f: &BigUint) {
    let p = domain.modulus();
    let base = domain.pow_generator(&(domain.order() / f));
    let order: u64 = f.try_into().expect("test subgroups fit in u64");

    // Start with base^0 = 1, then step by multiplying with base
    let mut target = BigUint::from(1u8);

    for x in 0..order {
        let result = solver
            .solve(&target, &base, f, p)
            .expect("solver returned error");

        assert_eq!(
            result,
            BigUint::from(x),
            "{} failed for p={}, order={}, x={}",
            solver.name(),
            p,
            f,
            x
        );

        target = target * &base % p;
    }
}

/// Tests a solver across all subgroups in TEST_DOMAINS.
fn test_solver<S: DlogSolver>(solver: S) {
    for (p, g, factors) in TEST_DOMAINS {
        let domain = DomainParameters::new((*p).into(), (*g).into()).unwrap();
        let table = FactorTable::from_hex(&domain, *factors).unwrap();

        for f in &table {
            test_all_values(&solver, &domain, f);
        }
    }
}

#[test]
fn test_bsgs() {
    test_solver(BabyStepGiantStep);
}

#[test]
fn test_naive_lookup() {
    test_solver(NaiveLookup);
}

#[test]
fn test_bsgs_through_trait_object() {
    let solvers: Vec<Box<dyn DlogSolver>> = vec![Box::new(BabyStepGiantStep), Box::new(NaiveLookup)];
    let p = BigUint::from(29u8);

    for solver in &solvers {
        // 16 = 2^4 has order 7 mod 29, and 16^5 = 23
        let x = solver
            .solve(&23u8.into(), &16u8.into(), &7u8.into(), &p)
            .unwrap();
        assert_eq!(x, BigUint::from(5u8), "{}", solver.name());
    }
}
