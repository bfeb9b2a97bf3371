//! Built-in domains with a fully factored, smooth `p - 1`.

use crate::domain::DomainParameters;
use crate::error::{Error, Result};
use crate::factors::FactorTable;

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// 512-bit prime whose `p - 1` is a product of 69 prime powers, the two
    /// largest just above 2^32.
    Lab512,
}

pub const LAB512_MODULUS: &str = "f3c68dad0ebf3115bd89e3a22ce330fea16a127d27e1343e1d076c3e6d8a3910\
bb0b19d7a953e1136e897cb6310187600f0a50c3398eb5240567eea87b053f41";

/// Smallest generator of the full group. Every prime below 337 divides
/// `p - 1` and is therefore a quadratic residue, so small values fail.
pub const LAB512_GENERATOR: &str = "15b";

pub const LAB512_FACTORS: &[&str] = &[
    "5", "7", "9", "B", "D", "11", "13", "17", "1D", "1F", "25", "29", "2B", "2F", "35", "3B",
    "3D", "40", "43", "47", "49", "4F", "53", "59", "61", "65", "67", "6B", "6D", "71", "7F",
    "83", "89", "8B", "95", "97", "9D", "A3", "A7", "AD", "B3", "B5", "BF", "C1", "C5", "C7",
    "D3", "DF", "E3", "E5", "E9", "EF", "F1", "FB", "101", "107", "10D", "10F", "115", "119",
    "11B", "125", "133", "137", "139", "13D", "14B", "10000000F", "12000050F",
];

impl Preset {
    /// Builds and validates the domain parameters and factor table.
    pub fn load(self) -> Result<(DomainParameters, FactorTable)> {
        let (modulus, generator, factors) = match self {
            Preset::Lab512 => (LAB512_MODULUS, LAB512_GENERATOR, LAB512_FACTORS),
        };

        let domain = DomainParameters::from_hex(modulus, generator)?;
        let table = FactorTable::from_hex(&domain, factors)?;

        Ok((domain, table))
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Preset> {
        match s.to_ascii_lowercase().as_str() {
            "lab512" => Ok(Preset::Lab512),
            other => Err(Error::Parse(format!("unknown preset {:?}", other))),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preset::Lab512 => write!(f, "lab512"),
        }
    }
}
