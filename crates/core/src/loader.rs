//! CSV dataset loading
//!
//! Expected layout:
//!
//! ```text
//! address,amount
//! 0x742d35Cc6634C0532925a3b8D0C9e3E04d5c36Ab,100
//! 0x742d35Cc6634C0532925a3b8D0C9e3E04d5c36Ac,2.5
//! ```
//!
//! Amounts are whole-token decimals; they are converted to subunits while
//! loading. The first invalid line aborts the load.

use std::{collections::HashSet, fs, path::Path};

use tracing::{debug, info};

use crate::{
    AirdropError, AllocationRecord,
    amount::format_units,
    record::format_address,
};

/// Number of parsed records echoed at debug level
const PREVIEW_RECORDS: usize = 3;

/// Read and validate a CSV dataset from disk
pub fn load_csv(path: &Path) -> Result<Vec<AllocationRecord>, AirdropError> {
    info!(path = %path.display(), "Loading airdrop data");
    let content = fs::read_to_string(path)?;
    parse_csv(&content)
}

/// Validate a CSV dataset held in memory.
///
/// Blank lines are ignored. Errors are tagged with their 1-indexed line
/// number in `content`, the header being line 1.
pub fn parse_csv(content: &str) -> Result<Vec<AllocationRecord>, AirdropError> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (header_line, header) = lines.next().ok_or_else(|| {
        AirdropError::MalformedDataset(
            "dataset is empty, expected a header and at least one record".to_string(),
        )
    })?;
    let header = header.to_ascii_lowercase();
    if !header.contains("address") || !header.contains("amount") {
        return Err(AirdropError::MalformedDataset(
            "header must contain 'address' and 'amount' columns".to_string(),
        )
        .at_line(header_line));
    }

    let mut records = Vec::new();
    let mut seen = HashSet::new();
    for (line, text) in lines {
        let record = parse_line(text).map_err(|e| e.at_line(line))?;
        if !seen.insert(record.address) {
            return Err(AirdropError::DuplicateAddress(format_address(&record.address)).at_line(line));
        }

        if records.len() < PREVIEW_RECORDS {
            debug!(
                line,
                address = %format_address(&record.address),
                tokens = %format_units(record.amount),
                subunits = %record.amount,
                "Parsed allocation"
            );
        }
        records.push(record);
    }

    if records.is_empty() {
        return Err(AirdropError::MalformedDataset(
            "expected at least one record after the header".to_string(),
        ));
    }

    info!(records = records.len(), "Airdrop data loaded");
    Ok(records)
}

fn parse_line(text: &str) -> Result<AllocationRecord, AirdropError> {
    let mut fields = text.split(',').map(str::trim);
    match (fields.next(), fields.next()) {
        (Some(address), Some(amount)) if !address.is_empty() && !amount.is_empty() => {
            AllocationRecord::parse(address, amount)
        }
        _ => Err(AirdropError::MalformedDataset("missing address or amount field".to_string())),
    }
}
