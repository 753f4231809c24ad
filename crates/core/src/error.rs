//! Error types

use airdrop_merkle::MerkleError;
use thiserror::Error;

/// Errors raised while validating allocations or producing the artifact
#[derive(Debug, Error)]
pub enum AirdropError {
    /// Address is not `0x` followed by 40 hex characters
    #[error("invalid address format: {0:?}")]
    InvalidAddressFormat(String),
    /// Amount does not match `digits[.digits]`
    #[error("invalid amount format: {0:?}")]
    InvalidAmountFormat(String),
    /// Amount has more fractional digits than the token supports
    #[error("amount {amount:?} has {digits} fractional digits, at most 18 are supported")]
    PrecisionOverflow {
        /// Offending amount string
        amount: String,
        /// Number of fractional digits found
        digits: usize,
    },
    /// Amount (or the total) does not fit in 256 bits
    #[error("amount {0} does not fit in 256 bits")]
    AmountOverflow(String),
    /// The same address appears more than once
    #[error("duplicate address {0}")]
    DuplicateAddress(String),
    /// Structural problem with the input dataset
    #[error("malformed dataset: {0}")]
    MalformedDataset(String),
    /// A record-level error tagged with its 1-indexed line in the input
    #[error("line {line}: {source}")]
    Record {
        /// Line number, the header being line 1
        line: usize,
        /// What went wrong on that line
        #[source]
        source: Box<Self>,
    },
    /// Tree construction or proof lookup failed
    #[error(transparent)]
    Merkle(#[from] MerkleError),
    /// Reading or writing a file failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Artifact (de)serialization failed
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AirdropError {
    /// Attach the input line this error was found on
    pub fn at_line(self, line: usize) -> Self {
        Self::Record { line, source: Box::new(self) }
    }

    /// The underlying error, with any line locator removed
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::Record { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Line the error was reported on, if any
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::Record { line, .. } => Some(*line),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_line_wraps_and_unwraps() {
        let err = AirdropError::InvalidAmountFormat("1..2".to_string()).at_line(4);
        assert_eq!(err.line(), Some(4));
        assert!(matches!(err.root_cause(), AirdropError::InvalidAmountFormat(s) if s == "1..2"));
        assert_eq!(err.to_string(), "line 4: invalid amount format: \"1..2\"");
    }

    #[test]
    fn test_leaf_not_found_converts() {
        let err: AirdropError = MerkleError::LeafNotFound("0xab".to_string()).into();
        assert!(matches!(err, AirdropError::Merkle(MerkleError::LeafNotFound(_))));
        assert_eq!(err.line(), None);
    }
}
