use crate::ChunkProposerError;
use std::time::Duration;

/// Configuration for the chunk proposer.
#[derive(Debug, Clone)]
pub struct ChunkProposerConfig {
    /// The maximum number of blocks in a chunk.
    pub max_block_num_per_chunk: u64,
    /// The maximum number of transactions in a chunk.
    pub max_tx_num_per_chunk: u64,
    /// The maximum over-estimated L1 commit gas of a chunk.
    pub max_l1_commit_gas_per_chunk: u64,
    /// The maximum L1 commit calldata size of a chunk.
    pub max_l1_commit_calldata_size_per_chunk: u64,
    /// The maximum row consumption of the busiest sub-circuit of a chunk.
    pub max_row_consumption_per_chunk: u64,
    /// The age of the first block of a chunk after which the chunk is proposed even if no limit
    /// is reached.
    pub chunk_timeout: Duration,
    /// The multiplier applied to the estimated L1 commit gas before comparing it to the limit.
    pub gas_cost_increase_multiplier: f64,
}

impl ChunkProposerConfig {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ChunkProposerError> {
        if self.max_block_num_per_chunk == 0 {
            return Err(ChunkProposerError::InvalidConfig(
                "max block num per chunk must be greater than zero",
            ))
        }
        if !self.gas_cost_increase_multiplier.is_finite() || self.gas_cost_increase_multiplier < 1.0
        {
            return Err(ChunkProposerError::InvalidConfig(
                "gas cost increase multiplier must be a finite value of at least 1.0",
            ))
        }
        Ok(())
    }

    /// Returns the L1 commit gas over-estimation used to check the gas limit.
    pub(crate) fn overestimate_l1_commit_gas(&self, gas: u64) -> u64 {
        (self.gas_cost_increase_multiplier * gas as f64) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ChunkProposerConfig {
        ChunkProposerConfig {
            max_block_num_per_chunk: 100,
            max_tx_num_per_chunk: 100,
            max_l1_commit_gas_per_chunk: 11_234_567,
            max_l1_commit_calldata_size_per_chunk: 112_345,
            max_row_consumption_per_chunk: 1_048_319,
            chunk_timeout: Duration::from_secs(300),
            gas_cost_increase_multiplier: 1.2,
        }
    }

    #[test]
    fn test_validate_config() {
        assert!(config().validate().is_ok());
        assert!(ChunkProposerConfig { gas_cost_increase_multiplier: 1.0, ..config() }
            .validate()
            .is_ok());

        for invalid in [
            ChunkProposerConfig { max_block_num_per_chunk: 0, ..config() },
            ChunkProposerConfig { gas_cost_increase_multiplier: 0.9, ..config() },
            ChunkProposerConfig { gas_cost_increase_multiplier: f64::NAN, ..config() },
            ChunkProposerConfig { gas_cost_increase_multiplier: f64::INFINITY, ..config() },
        ] {
            assert!(matches!(invalid.validate(), Err(ChunkProposerError::InvalidConfig(_))));
        }
    }

    #[test]
    fn test_overestimate_l1_commit_gas() {
        let config = config();
        assert_eq!(config.overestimate_l1_commit_gas(1_000), 1_200);
        assert_eq!(config.overestimate_l1_commit_gas(0), 0);
        // the over-estimation is truncated.
        assert_eq!(config.overestimate_l1_commit_gas(7), 8);
    }
}
