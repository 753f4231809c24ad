//! Sample allocations for trying the pipeline without real data

use alloy_primitives::{Address, U256};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    AllocationRecord,
    amount::{SUBUNITS_PER_TOKEN, format_units},
    record::format_address,
};

/// Smallest sample allocation, in whole tokens
const MIN_TOKENS: u64 = 1;

/// Largest sample allocation, in whole tokens
const MAX_TOKENS: u64 = 1_000;

/// Generate `count` allocations of 1 to 1000 whole tokens.
///
/// Addresses are `user0000000000`, `user0000000001`, ... as ASCII,
/// left-padded with zero bytes. The same seed always gives the same amounts.
pub fn generate(count: usize, seed: u64) -> Vec<AllocationRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|index| {
            let tokens = rng.gen_range(MIN_TOKENS..=MAX_TOKENS);
            AllocationRecord::new(sample_address(index), U256::from(tokens) * SUBUNITS_PER_TOKEN)
        })
        .collect()
}

fn sample_address(index: usize) -> Address {
    let label = format!("user{index:010}");
    let label = label.as_bytes();
    let len = label.len().min(20);
    let mut bytes = [0u8; 20];
    bytes[20 - len..].copy_from_slice(&label[..len]);
    Address::from(bytes)
}

/// Render records as an `address,amount` CSV with whole-token amounts
pub fn to_csv(records: &[AllocationRecord]) -> String {
    let mut csv = String::from("address,amount\n");
    for record in records {
        csv.push_str(&format_address(&record.address));
        csv.push(',');
        csv.push_str(&format_units(record.amount));
        csv.push('\n');
    }
    csv
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::loader::parse_csv;

    #[test]
    fn test_generate_is_deterministic() {
        assert_eq!(generate(20, 7), generate(20, 7));
        assert_ne!(generate(20, 7), generate(20, 8));
    }

    #[test]
    fn test_generate_amounts_in_range() {
        let min = U256::from(MIN_TOKENS) * SUBUNITS_PER_TOKEN;
        let max = U256::from(MAX_TOKENS) * SUBUNITS_PER_TOKEN;
        for record in generate(200, 1) {
            assert!(record.amount >= min && record.amount <= max);
            assert!((record.amount % SUBUNITS_PER_TOKEN).is_zero());
        }
    }

    #[test]
    fn test_sample_addresses() {
        let records = generate(50, 3);
        let unique: HashSet<_> = records.iter().map(|r| r.address).collect();
        assert_eq!(unique.len(), 50);

        // "user0000000001" = 75 73 65 72 30 .. 31
        assert_eq!(
            format_address(&records[1].address),
            "0x0000000000007573657230303030303030303031"
        );
    }

    #[test]
    fn test_csv_reloads_to_same_records() {
        let records = generate(12, 99);
        assert_eq!(parse_csv(&to_csv(&records)).unwrap(), records);
    }

    #[test]
    fn test_csv_with_fractional_amounts() {
        let record = AllocationRecord::new(Address::repeat_byte(0xab), U256::from(1_500_000_000_000_000_000u64));
        let csv = to_csv(&[record]);
        assert_eq!(csv, "address,amount\n0xabababababababababababababababababababab,1.5\n");
        assert_eq!(parse_csv(&csv).unwrap(), vec![record]);
    }
}
