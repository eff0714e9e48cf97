//! Airdrop Merkle CLI
//!
//! - `generate`: whitelist JSON in, claims document (`merkleData.json`) out
//! - `verify`: recompute leaves from a claims document and check every proof

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info};

use airdrop_merkle::{
    verify_claim, DistributorApi, DistributorConfig, DistributorService, JsonFileSink,
    JsonFileSource, MerkleDistribution, PARALLEL_THRESHOLD,
};
use airdrop_telemetry::{init_tracing, TelemetryConfig};

/// Airdrop Merkle: commit a whitelist to a Merkle root and emit claim proofs
#[derive(Parser, Debug)]
#[command(name = "airdrop-merkle", version)]
#[command(about = "Merkle root and per-entry proofs for airdrop whitelists")]
struct Args {
    /// Log level (overrides AIRDROP_LOG_LEVEL / RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the tree and write the claims document
    Generate {
        /// Whitelist JSON: [{ "address": "0x…", "amount": "…" }, …]
        #[arg(short, long, env = "AIRDROP_INPUT", default_value = "whitelist.json")]
        input: PathBuf,

        /// Claims document to write
        #[arg(short, long, env = "AIRDROP_OUTPUT", default_value = "merkleData.json")]
        output: PathBuf,

        /// Leaf count at which work moves to the thread pool
        #[arg(long, env = "AIRDROP_PARALLEL_THRESHOLD", default_value_t = PARALLEL_THRESHOLD)]
        parallel_threshold: usize,

        /// Do not re-verify proofs before writing
        #[arg(long)]
        skip_self_check: bool,

        /// Accept entries whose indices are not exactly 0..n
        #[arg(long)]
        allow_index_gaps: bool,

        /// Do not log a warning for repeated accounts
        #[arg(long)]
        quiet_duplicates: bool,
    },

    /// Check claims in a claims document against its root
    Verify {
        /// Claims document to read
        #[arg(short, long, default_value = "merkleData.json")]
        data: PathBuf,

        /// Check only the claim with this index
        #[arg(long)]
        index: Option<u64>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut telemetry = TelemetryConfig::from_env();
    if let Some(level) = &args.log_level {
        telemetry = telemetry.with_log_level(level.clone());
    }
    if let Err(e) = init_tracing(&telemetry) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Generate {
            input,
            output,
            parallel_threshold,
            skip_self_check,
            allow_index_gaps,
            quiet_duplicates,
        } => {
            let config = generate_config(
                parallel_threshold,
                skip_self_check,
                allow_index_gaps,
                quiet_duplicates,
            );
            generate(config, input, output)
        }
        Command::Verify { data, index } => verify(data, index),
    }
}

/// Map `generate` flags onto the service configuration.
fn generate_config(
    parallel_threshold: usize,
    skip_self_check: bool,
    allow_index_gaps: bool,
    quiet_duplicates: bool,
) -> DistributorConfig {
    DistributorConfig {
        parallel_threshold,
        verify_index_sequence: !allow_index_gaps,
        self_verify_proofs: !skip_self_check,
        warn_on_duplicate_accounts: !quiet_duplicates,
    }
}

fn generate(config: DistributorConfig, input: PathBuf, output: PathBuf) -> Result<()> {
    let service = DistributorService::new(
        config,
        JsonFileSource::new(&input),
        JsonFileSink::new(&output),
    );

    let distribution = service
        .generate()
        .with_context(|| format!("Failed to generate Merkle data from {}", input.display()))?;

    println!("Merkle Root: {}", distribution.merkle_root);
    println!("Claims: {}", distribution.claims.len());
    println!("Output: {}", output.display());
    Ok(())
}

fn verify(data: PathBuf, index: Option<u64>) -> Result<()> {
    let distribution = JsonFileSource::new(&data)
        .load_distribution()
        .with_context(|| format!("Failed to read claims document {}", data.display()))?;

    let (checked, failed) = check_claims(&distribution, index)?;
    info!(checked, failed = failed.len(), "Verification finished");

    if !failed.is_empty() {
        bail!(
            "{} of {} claims failed verification (indices: {:?})",
            failed.len(),
            checked,
            failed
        );
    }

    println!("Verified {} claim(s) against {}", checked, distribution.merkle_root);
    Ok(())
}

/// Returns the number of claims checked and the indices that failed.
fn check_claims(distribution: &MerkleDistribution, index: Option<u64>) -> Result<(usize, Vec<u64>)> {
    let root = distribution.root().context("Invalid merkleRoot")?;

    let selected: Vec<_> = distribution
        .claims
        .iter()
        .filter(|record| index.map_or(true, |i| record.index == i))
        .collect();

    if let Some(i) = index {
        if selected.is_empty() {
            bail!("No claim with index {}", i);
        }
    }

    let mut failed = Vec::new();
    for record in &selected {
        let claim = record.to_claim()?;
        if !verify_claim(&claim, &root) {
            failed.push(record.index);
        }
    }

    Ok((selected.len(), failed))
}
