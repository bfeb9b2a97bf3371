use crate::domain::DomainParameters;
use crate::error::{Error, Result};

use num_bigint::{BigUint, RandBigInt};
use num_traits::{Num, One, Zero};
use rand_core::{CryptoRng, RngCore};

/// Computes `a^-1 mod m`.
///
/// Returns `None` if `gcd(a, m) != 1` or `m` is zero. Modulo 1 every value
/// is congruent to 0, which is then its own inverse.
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    if m.is_zero() {
        return None;
    }

    a.modinv(m)
}

/// Returns the smallest `q` with `q * q >= n`.
pub fn ceil_sqrt(n: &BigUint) -> BigUint {
    let root = n.sqrt();
    if &(&root * &root) == n {
        root
    } else {
        root + 1u8
    }
}

/// Parses a hex string as used by the transport and configuration layers.
///
/// Accepts an optional `0x`/`0X` prefix and surrounding whitespace.
pub fn parse_hex(s: &str) -> Result<BigUint> {
    let trimmed = s.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if digits.is_empty() {
        return Err(Error::Parse(format!("empty hex string {:?}", s)));
    }

    BigUint::from_str_radix(digits, 16)
        .map_err(|e| Error::Parse(format!("invalid hex string {:?}: {}", s, e)))
}

/// Formats a number as lowercase hex without a prefix.
pub fn to_hex(n: &BigUint) -> String {
    n.to_str_radix(16)
}

/// `serde_with` adapter that (de)serializes a `BigUint` as a hex string.
#[cfg(feature = "serde")]
pub struct HexUint;

#[cfg(feature = "serde")]
impl serde_with::SerializeAs<BigUint> for HexUint {
    fn serialize_as<S>(source: &BigUint, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&to_hex(source))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde_with::DeserializeAs<'de, BigUint> for HexUint {
    fn deserialize_as<D>(deserializer: D) -> std::result::Result<BigUint, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        parse_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Draws a uniform value from `[low, high)`.
pub(crate) fn random_below<R: RngCore + CryptoRng>(
    low: &BigUint,
    high: &BigUint,
    rng: &mut R,
) -> BigUint {
    rng.gen_biguint_range(low, high)
}

/// Generates a random discrete log instance: an exponent `x` in `[1, p-2]`
/// and `g^x mod p`.
pub fn generate_dlog_instance<R: RngCore + CryptoRng>(
    domain: &DomainParameters,
    rng: &mut R,
) -> (BigUint, BigUint) {
    let x = random_below(&BigUint::one(), domain.order(), rng);
    let y = domain.generator().modpow(&x, domain.modulus());

    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_core::OsRng;

    #[test]
    fn test_mod_inverse_small_values() {
        assert_eq!(
            mod_inverse(&5u8.into(), &14u8.into()),
            Some(BigUint::from(3u8))
        );
        assert_eq!(
            mod_inverse(&17u8.into(), &3120u16.into()),
            Some(BigUint::from(2753u16))
        );
        // a larger than the modulus is reduced first
        assert_eq!(
            mod_inverse(&19u8.into(), &7u8.into()),
            Some(BigUint::from(3u8))
        );
    }

    #[test]
    fn test_mod_inverse_rejects_non_coprime() {
        assert_eq!(mod_inverse(&6u8.into(), &4678u16.into()), None);
        assert_eq!(mod_inverse(&0u8.into(), &7u8.into()), None);
        assert_eq!(mod_inverse(&3u8.into(), &0u8.into()), None);
    }

    #[test]
    fn test_mod_inverse_modulo_one_is_zero() {
        assert_eq!(
            mod_inverse(&3u8.into(), &1u8.into()),
            Some(BigUint::zero())
        );
    }

    #[test]
    fn test_ceil_sqrt() {
        let cases: Vec<(u64, u64)> = vec![
            (1, 1),
            (2, 2),
            (4, 2),
            (5, 3),
            (7, 3),
            (9, 3),
            (10, 4),
            (4831839503, 69512),
        ];

        for (n, expected) in cases {
            assert_eq!(
                ceil_sqrt(&BigUint::from(n)),
                BigUint::from(expected),
                "ceil_sqrt({}) should be {}",
                n,
                expected
            );
        }
    }

    #[test]
    fn test_parse_hex_accepts_prefix_and_whitespace() {
        assert_eq!(parse_hex("12000050F").unwrap(), BigUint::from(4831839503u64));
        assert_eq!(parse_hex(" 0x14b\n").unwrap(), BigUint::from(331u16));
        assert_eq!(parse_hex("0XfF").unwrap(), BigUint::from(255u8));
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        assert!(matches!(parse_hex(""), Err(Error::Parse(_))));
        assert!(matches!(parse_hex("0x"), Err(Error::Parse(_))));
        assert!(matches!(parse_hex("12g4"), Err(Error::Parse(_))));
    }

    #[test]
    fn test_to_hex_matches_parse_hex() {
        let n = BigUint::from(0xdead_beef_u32);
        assert_eq!(to_hex(&n), "deadbeef");
        assert_eq!(parse_hex(&to_hex(&n)).unwrap(), n);
    }

    #[test]
    fn test_generate_dlog_instance_bounds() {
        let domain = DomainParameters::new(4679u16.into(), 807u16.into()).unwrap();

        for _ in 0..100 {
            let (x, y) = generate_dlog_instance(&domain, &mut OsRng);
            assert!(!x.is_zero());
            assert!(&x < domain.order());
            assert_eq!(domain.generator().modpow(&x, domain.modulus()), y);
        }
    }
}
