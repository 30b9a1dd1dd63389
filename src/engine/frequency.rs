use crate::error::CodecError;
use std::collections::BTreeMap;

/// Occurrence count per distinct byte value in the input.
///
/// A `BTreeMap` keeps symbols in ascending order, so everything derived from
/// the table (heap insertion order, header layout) is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<u8, u64>,
}

impl FrequencyTable {
    /// Count symbol occurrences in a single linear pass.
    pub fn scan(input: &[u8]) -> Result<Self, CodecError> {
        if input.is_empty() {
            return Err(CodecError::EmptyInput);
        }

        let mut counts = BTreeMap::new();
        for &byte in input {
            *counts.entry(byte).or_insert(0u64) += 1;
        }

        Ok(Self { counts })
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Symbols with their counts, ascending by symbol value.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts.iter().map(|(&sym, &count)| (sym, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_sum_to_input_length() {
        let input = b"abracadabra";
        let table = FrequencyTable::scan(input).unwrap();
        let total: u64 = table.iter().map(|(_, c)| c).sum();
        assert_eq!(total, input.len() as u64);
        assert_eq!(table.len(), 5); // a b r c d
    }

    #[test]
    fn every_observed_symbol_has_positive_count() {
        let table = FrequencyTable::scan(b"aab\0\n").unwrap();
        for (_, count) in table.iter() {
            assert!(count >= 1);
        }
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(FrequencyTable::scan(&[]), Err(CodecError::EmptyInput));
    }
}
