use crate::constants;

use alloy_primitives::Address;
use rollup_node_chunk_proposer::ChunkProposerConfig;
use std::time::Duration;

/// Proposes chunks out of the executed L2 blocks stored in the database.
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "chunk-proposer", version, about)]
pub(crate) struct ChunkProposerCli {
    /// The chunk proposer arguments.
    #[command(flatten)]
    pub(crate) chunk: ChunkProposerArgs,
    /// The L1 provider arguments.
    #[command(flatten)]
    pub(crate) l1: L1ProviderArgs,
    /// The database arguments.
    #[command(flatten)]
    pub(crate) database: DatabaseArgs,
}

/// The arguments for the chunk proposer.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ChunkProposerArgs {
    /// The maximum number of blocks in a chunk.
    #[arg(long = "chunk.max-block-num", id = "chunk_max_block_num", value_name = "CHUNK_MAX_BLOCK_NUM", env = "CHUNK_MAX_BLOCK_NUM", default_value_t = constants::DEFAULT_MAX_BLOCK_NUM_PER_CHUNK)]
    pub(crate) max_block_num: u64,
    /// The maximum number of transactions in a chunk.
    #[arg(long = "chunk.max-tx-num", id = "chunk_max_tx_num", value_name = "CHUNK_MAX_TX_NUM", env = "CHUNK_MAX_TX_NUM", default_value_t = constants::DEFAULT_MAX_TX_NUM_PER_CHUNK)]
    pub(crate) max_tx_num: u64,
    /// The maximum L1 commit gas of a chunk.
    #[arg(long = "chunk.max-l1-commit-gas", id = "chunk_max_l1_commit_gas", value_name = "CHUNK_MAX_L1_COMMIT_GAS", env = "CHUNK_MAX_L1_COMMIT_GAS", default_value_t = constants::DEFAULT_MAX_L1_COMMIT_GAS_PER_CHUNK)]
    pub(crate) max_l1_commit_gas: u64,
    /// The maximum L1 commit calldata size of a chunk.
    #[arg(long = "chunk.max-l1-commit-calldata-size", id = "chunk_max_l1_commit_calldata_size", value_name = "CHUNK_MAX_L1_COMMIT_CALLDATA_SIZE", env = "CHUNK_MAX_L1_COMMIT_CALLDATA_SIZE", default_value_t = constants::DEFAULT_MAX_L1_COMMIT_CALLDATA_SIZE_PER_CHUNK)]
    pub(crate) max_l1_commit_calldata_size: u64,
    /// The maximum row consumption of a chunk.
    #[arg(long = "chunk.max-row-consumption", id = "chunk_max_row_consumption", value_name = "CHUNK_MAX_ROW_CONSUMPTION", env = "CHUNK_MAX_ROW_CONSUMPTION", default_value_t = constants::DEFAULT_MAX_ROW_CONSUMPTION_PER_CHUNK)]
    pub(crate) max_row_consumption: u64,
    /// The chunk timeout in seconds.
    #[arg(long = "chunk.timeout", id = "chunk_timeout", value_name = "CHUNK_TIMEOUT_SEC", env = "CHUNK_TIMEOUT_SEC", default_value_t = constants::DEFAULT_CHUNK_TIMEOUT_SEC)]
    pub(crate) timeout: u64,
    /// The multiplier applied to the estimated L1 commit gas.
    #[arg(long = "chunk.gas-cost-increase-multiplier", id = "chunk_gas_cost_increase_multiplier", value_name = "CHUNK_GAS_COST_INCREASE_MULTIPLIER", env = "CHUNK_GAS_COST_INCREASE_MULTIPLIER", default_value_t = constants::DEFAULT_GAS_COST_INCREASE_MULTIPLIER)]
    pub(crate) gas_cost_increase_multiplier: f64,
    /// The interval between two proposal cycles in milliseconds.
    #[arg(long = "chunk.poll-interval", id = "chunk_poll_interval", value_name = "CHUNK_POLL_INTERVAL", env = "CHUNK_POLL_INTERVAL", default_value_t = constants::DEFAULT_POLL_INTERVAL)]
    pub(crate) poll_interval: u64,
}

impl ChunkProposerArgs {
    /// Returns the chunk proposer configuration.
    pub(crate) const fn config(&self) -> ChunkProposerConfig {
        ChunkProposerConfig {
            max_block_num_per_chunk: self.max_block_num,
            max_tx_num_per_chunk: self.max_tx_num,
            max_l1_commit_gas_per_chunk: self.max_l1_commit_gas,
            max_l1_commit_calldata_size_per_chunk: self.max_l1_commit_calldata_size,
            max_row_consumption_per_chunk: self.max_row_consumption,
            chunk_timeout: Duration::from_secs(self.timeout),
            gas_cost_increase_multiplier: self.gas_cost_increase_multiplier,
        }
    }
}

/// The arguments for the L1 provider.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct L1ProviderArgs {
    /// The URL for the L1 RPC.
    #[arg(long = "l1.url", id = "l1_url", value_name = "L1_URL", env = "L1_URL")]
    pub(crate) url: reqwest::Url,
    /// The address of the L1 view oracle contract.
    #[arg(long = "l1.view-oracle", id = "l1_view_oracle", value_name = "L1_VIEW_ORACLE", env = "L1_VIEW_ORACLE")]
    pub(crate) view_oracle: Address,
}

/// The database arguments.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct DatabaseArgs {
    /// The database URL.
    #[arg(long = "db.url", id = "db_url", value_name = "DB_URL", env = "DB_URL", default_value = constants::DEFAULT_DATABASE_URL)]
    pub(crate) url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;
    use clap::Parser;

    #[test]
    fn test_parse_defaults() {
        let cli = ChunkProposerCli::try_parse_from([
            "chunk-proposer",
            "--l1.url",
            "http://localhost:8545",
            "--l1.view-oracle",
            "0x5300000000000000000000000000000000000011",
        ])
        .unwrap();

        assert_eq!(cli.l1.view_oracle, address!("0x5300000000000000000000000000000000000011"));
        assert_eq!(cli.database.url, constants::DEFAULT_DATABASE_URL);
        assert_eq!(cli.chunk.poll_interval, constants::DEFAULT_POLL_INTERVAL);

        let config = cli.chunk.config();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_block_num_per_chunk, 100);
        assert_eq!(config.max_tx_num_per_chunk, 100);
        assert_eq!(config.max_l1_commit_gas_per_chunk, 11_234_567);
        assert_eq!(config.max_l1_commit_calldata_size_per_chunk, 112_345);
        assert_eq!(config.max_row_consumption_per_chunk, 1_048_319);
        assert_eq!(config.chunk_timeout, Duration::from_secs(300));
        assert_eq!(config.gas_cost_increase_multiplier, 1.2);
    }

    #[test]
    fn test_parse_chunk_args() {
        let cli = ChunkProposerCli::try_parse_from([
            "chunk-proposer",
            "--l1.url",
            "http://localhost:8545",
            "--l1.view-oracle",
            "0x5300000000000000000000000000000000000011",
            "--chunk.max-block-num",
            "3",
            "--chunk.timeout",
            "10",
            "--chunk.gas-cost-increase-multiplier",
            "1.5",
        ])
        .unwrap();

        let config = cli.chunk.config();
        assert_eq!(config.max_block_num_per_chunk, 3);
        assert_eq!(config.chunk_timeout, Duration::from_secs(10));
        assert_eq!(config.gas_cost_increase_multiplier, 1.5);
    }

    #[test]
    fn test_missing_oracle_address() {
        let res = ChunkProposerCli::try_parse_from([
            "chunk-proposer",
            "--l1.url",
            "http://localhost:8545",
        ]);
        assert!(res.is_err());
    }
}
