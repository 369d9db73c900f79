use crate::ChunkProposerError;

use rollup_node_primitives::RowConsumption;
use std::collections::BTreeMap;

/// The row consumption accumulated by the blocks of a chunk, per sub-circuit.
///
/// The sub-circuits are proven in lockstep, so the chunk is bound by its busiest sub-circuit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChunkRowConsumption(BTreeMap<String, u64>);

impl ChunkRowConsumption {
    /// Adds the row consumption of a block to the accumulated totals.
    ///
    /// Errors if the block carries no row consumption.
    pub fn add(
        &mut self,
        row_consumption: Option<&RowConsumption>,
    ) -> Result<(), ChunkProposerError> {
        let row_consumption = row_consumption.ok_or(ChunkProposerError::MalformedRowConsumption)?;
        for usage in row_consumption {
            let total = self.0.entry(usage.name.clone()).or_default();
            *total = total.saturating_add(usage.row_number);
        }
        Ok(())
    }

    /// Returns the accumulated row consumption of the busiest sub-circuit, or zero if nothing was
    /// accumulated.
    pub fn max(&self) -> u64 {
        self.0.values().copied().max().unwrap_or_default()
    }

    /// Returns the accumulated row consumption of the sub-circuit.
    pub fn get(&self, name: &str) -> Option<u64> {
        self.0.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollup_node_primitives::SubCircuitRowUsage;

    fn usage(a: u64, b: u64) -> RowConsumption {
        vec![SubCircuitRowUsage::new("a", a), SubCircuitRowUsage::new("b", b)].into()
    }

    #[test]
    fn test_empty_accumulator() {
        assert_eq!(ChunkRowConsumption::default().max(), 0);
    }

    #[test]
    fn test_max_is_per_sub_circuit() -> Result<(), ChunkProposerError> {
        let mut acc = ChunkRowConsumption::default();
        acc.add(Some(&usage(10, 5)))?;
        acc.add(Some(&usage(10, 5)))?;

        assert_eq!(acc.get("a"), Some(20));
        assert_eq!(acc.get("b"), Some(10));
        assert_eq!(acc.max(), 20);

        Ok(())
    }

    #[test]
    fn test_new_sub_circuit() -> Result<(), ChunkProposerError> {
        let mut acc = ChunkRowConsumption::default();
        acc.add(Some(&usage(3, 4)))?;
        acc.add(Some(&vec![SubCircuitRowUsage::new("c", 6)].into()))?;

        assert_eq!(acc.get("c"), Some(6));
        assert_eq!(acc.max(), 6);

        // an empty usage is valid and changes nothing.
        acc.add(Some(&RowConsumption::default()))?;
        assert_eq!(acc.max(), 6);

        Ok(())
    }

    #[test]
    fn test_missing_row_consumption() {
        let mut acc = ChunkRowConsumption::default();
        acc.add(Some(&usage(1, 2))).unwrap();

        let err = acc.add(None).unwrap_err();
        assert!(matches!(err, ChunkProposerError::MalformedRowConsumption));
        assert_eq!(acc.max(), 2);
    }
}
