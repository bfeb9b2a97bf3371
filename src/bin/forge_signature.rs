//! Binary that recovers an El-Gamal private key through Pohlig-Hellman and
//! signs a digest with it.
//!
//! Usage:
//!   cargo run --bin forge_signature -- --config attack.json --digest <hex>
//!   cargo run --bin forge_signature -- --preset lab512 --public-key <hex> --digest <hex>
//!
//! Results go to stdout as hex, logs to stderr (`-v` for per-factor detail,
//! or set `RUST_LOG`).

use anyhow::{bail, Context, Result};
use clap::Parser;
use elgamal_dlog::config::AttackConfig;
use elgamal_dlog::presets::Preset;
use elgamal_dlog::{elgamal, pohlig_hellman, utils, DomainParameters, FactorTable};
use num_bigint::BigUint;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "forge_signature",
    about = "Recover an El-Gamal private key from a smooth-order group and forge a signature"
)]
struct Args {
    /// JSON file with hex `modulus`, `generator`, `factors` and `public_key`
    #[arg(long, conflicts_with = "preset")]
    config: Option<PathBuf>,

    /// Built-in domain to attack instead of a config file
    #[arg(long, requires = "public_key")]
    preset: Option<Preset>,

    /// Public key under attack (hex), used with --preset
    #[arg(long)]
    public_key: Option<String>,

    /// Digest to sign (hex), as produced by the message layer
    #[arg(long)]
    digest: String,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_target(args: &Args) -> Result<(DomainParameters, FactorTable, BigUint)> {
    if let Some(path) = &args.config {
        let config = AttackConfig::load(path).context("failed to load attack configuration")?;
        let (domain, factors) = config.domain().context("invalid attack configuration")?;
        return Ok((domain, factors, config.public_key));
    }

    if let Some(preset) = args.preset {
        let (domain, factors) = preset
            .load()
            .with_context(|| format!("failed to load preset {}", preset))?;
        let public_key = args
            .public_key
            .as_deref()
            .context("--public-key is required with --preset")?;
        let public_key = utils::parse_hex(public_key).context("failed to parse public key")?;
        return Ok((domain, factors, public_key));
    }

    bail!("either --config or --preset is required");
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let (domain, factors, public_key) = load_target(&args)?;
    let digest = utils::parse_hex(&args.digest).context("failed to parse digest")?;

    tracing::info!(
        modulus_bits = domain.modulus().bits(),
        factors = factors.len(),
        "attacking public key"
    );

    let forgery = pohlig_hellman::forge(&digest, &public_key, &domain, &factors)
        .context("failed to forge signature")?;

    if !elgamal::verify(&digest, &forgery.signature, &public_key, &domain) {
        bail!("forged signature does not verify");
    }

    let (r, s) = forgery.signature.to_hex();
    println!("private_key: {}", utils::to_hex(&forgery.private_key));
    println!("sign_r: {}", r);
    println!("sign_s: {}", s);

    Ok(())
}
