pub mod bsgs;
#[cfg(feature = "serde")]
pub mod config;
pub mod domain;
pub mod elgamal;
pub mod error;
pub mod factors;
pub mod keys;
pub mod naive_lookup;
pub mod pohlig_hellman;
pub mod presets;
pub mod traits;
pub mod utils;

pub use domain::DomainParameters;
pub use elgamal::{sign, verify, Signature};
pub use error::{Error, Result};
pub use factors::FactorTable;
pub use keys::KeyPair;
pub use pohlig_hellman::recover_private_key;
pub use traits::DlogSolver;
