//! Attack configuration as handed over by the surrounding tooling.
//!
//! All numbers are hex strings, matching what the key server and the
//! transport exchange:
//!
//! ```json
//! {
//!   "modulus": "1247",
//!   "generator": "327",
//!   "factors": ["2", "923"],
//!   "public_key": "5ac"
//! }
//! ```

use crate::domain::DomainParameters;
use crate::error::{Error, Result};
use crate::factors::FactorTable;
use crate::utils::HexUint;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use std::path::Path;

/// Domain, factorization of `p - 1`, and the public key under attack.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackConfig {
    #[serde_as(as = "HexUint")]
    pub modulus: BigUint,
    #[serde_as(as = "HexUint")]
    pub generator: BigUint,
    /// Pairwise coprime prime powers multiplying to `modulus - 1`.
    #[serde_as(as = "Vec<HexUint>")]
    pub factors: Vec<BigUint>,
    #[serde_as(as = "HexUint")]
    pub public_key: BigUint,
}

impl AttackConfig {
    pub fn from_json(json: &str) -> Result<AttackConfig> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<AttackConfig> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;

        AttackConfig::from_json(&json)
    }

    /// Validates the configuration into domain parameters and a factor table.
    pub fn domain(&self) -> Result<(DomainParameters, FactorTable)> {
        let domain = DomainParameters::new(self.modulus.clone(), self.generator.clone())?;
        let factors = FactorTable::new(&domain, self.factors.clone())?;

        Ok((domain, factors))
    }
}
