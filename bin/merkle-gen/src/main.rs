//! Airdrop Merkle tree generator
//!
//! Reads an `address,amount` CSV allowlist, commits to it with a sorted-pair
//! Keccak256 Merkle tree and writes the root plus every address's proof to a
//! JSON file for the claim contract and frontend.
//!
//! When the input CSV does not exist a sample dataset is generated and
//! written there first, so the file format can be inspected.

mod config;

use std::{
    fs::{self, File},
    io::Write,
    path::Path,
};

use airdrop_core::{AirdropGenerator, format_units, load_csv, sample};
use airdrop_merkle::format_hash_hex;
use anyhow::{Context, Result, bail};
use tracing::{info, warn};

use crate::config::GeneratorConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("===========================================");
    info!("     Airdrop Merkle Tree Generator");
    info!("===========================================");

    let config = GeneratorConfig::from_env();
    info!("Configuration:");
    info!("  Input:          {}", config.input.display());
    info!("  Output:         {}", config.output.display());
    info!("  Verify samples: {}", config.verify_samples);

    run(&config)
}

fn run(config: &GeneratorConfig) -> Result<()> {
    let records = if config.input.exists() {
        load_csv(&config.input)
            .with_context(|| format!("Failed to load {}", config.input.display()))?
    } else {
        warn!(
            path = %config.input.display(),
            count = config.sample_count,
            "Input CSV not found, generating sample data"
        );
        let records = sample::generate(config.sample_count, config.sample_seed);
        write_file_atomic(&config.input, &sample::to_csv(&records))
            .context("Failed to write sample CSV")?;
        info!(path = %config.input.display(), "Sample CSV written (amounts are whole tokens)");
        records
    };

    info!("Building Merkle tree over {} allocations...", records.len());
    let generator = AirdropGenerator::new(records).context("Failed to build Merkle tree")?;

    let total = generator.total_amount()?;
    info!("Merkle root:  {}", format_hash_hex(&generator.root()));
    info!("Total amount: {} subunits ({} tokens)", total, format_units(total));

    let checks = generator.verify_samples(config.verify_samples)?;
    if checks.iter().any(|check| !check.valid) {
        bail!("Generated proof failed verification, refusing to write {}", config.output.display());
    }

    let summary = generator.summary().context("Failed to generate proofs")?;
    let json = summary.to_json().context("Failed to serialize proofs")?;
    write_file_atomic(&config.output, &json)
        .with_context(|| format!("Failed to write {}", config.output.display()))?;

    info!("Proof data written to {}", config.output.display());
    Ok(())
}

/// Write `contents` to a sibling temp file, then rename it over `path`, so a
/// reader never sees a half-written file.
fn write_file_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).context("Failed to create output directory")?;
    }

    let temp_path = path.with_extension("tmp");
    let mut file = File::create(&temp_path).context("Failed to create temp file")?;
    file.write_all(contents.as_bytes()).context("Failed to write to temp file")?;
    file.flush().context("Failed to flush temp file")?;
    fs::rename(&temp_path, path).context("Failed to move temp file to output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use airdrop_core::{AirdropSummary, parse_csv};

    use super::*;

    fn config_in(dir: &Path) -> GeneratorConfig {
        GeneratorConfig {
            input: dir.join("data").join("airdrop_data.csv"),
            output: dir.join("data").join("merkle_data.json"),
            sample_count: 7,
            sample_seed: 1,
            verify_samples: 3,
        }
    }

    #[test]
    fn test_write_file_atomic_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.json");

        write_file_atomic(&path, "{}").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
        assert!(!path.with_extension("tmp").exists());

        write_file_atomic(&path, "[]").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_run_generates_sample_when_input_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        run(&config).unwrap();

        let csv = fs::read_to_string(&config.input).unwrap();
        assert_eq!(parse_csv(&csv).unwrap(), sample::generate(7, 1));

        let summary = AirdropSummary::from_json(&fs::read_to_string(&config.output).unwrap()).unwrap();
        assert_eq!(summary.total_addresses, 7);
        assert!(summary.verify_all().unwrap());
    }

    #[test]
    fn test_run_uses_existing_csv() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        write_file_atomic(
            &config.input,
            "address,amount\n0x0000000000000000000000000000000000000001,1.5\n",
        )
        .unwrap();

        run(&config).unwrap();

        let summary = AirdropSummary::from_json(&fs::read_to_string(&config.output).unwrap()).unwrap();
        assert_eq!(summary.total_amount, "1500000000000000000");
        assert!(summary.proofs["0x0000000000000000000000000000000000000001"].proof.is_empty());
    }

    #[test]
    fn test_run_writes_nothing_for_invalid_csv() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        write_file_atomic(
            &config.input,
            "address,amount\n0x0000000000000000000000000000000000000001,1..5\n",
        )
        .unwrap();

        assert!(run(&config).is_err());
        assert!(!config.output.exists());
    }
}
