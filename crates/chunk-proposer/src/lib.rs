//! This library contains the chunk proposer, which is responsible for grouping the executed L2
//! blocks into chunks.
//!
//! Every proposal cycle packs the unchunked blocks in ascending order until a chunk limit would be
//! breached, the first block of the chunk times out or the chunk holds the maximum number of
//! blocks. The chunk is bound to the L1 block range since the previous chunk through the hash
//! returned by the L1 view oracle, and persisted atomically along with the assignment of its
//! blocks.

use rollup_node_primitives::{Chunk, ChunkInfo, L2Block, SealedChunk};
use rollup_node_providers::L1BlockRangeHashProvider;
use scroll_codec::compute_chunk_hash;
use scroll_db::{Database, DatabaseReadOperations, DatabaseWriteOperations};
use std::{
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

mod config;
pub use config::ChunkProposerConfig;

mod error;
pub use error::{ChunkLimit, ChunkProposerError};

mod metrics;
pub use metrics::{ChunkProposerMetrics, ProposerMetricsSink};

mod outcome;
pub use outcome::{ChunkTrigger, ProposalOutcome};

mod packer;
use packer::{pack_blocks, PackedChunk};

mod row_consumption;
pub use row_consumption::ChunkRowConsumption;

/// The chunk proposer is responsible for grouping the executed L2 blocks into chunks.
///
/// Only one proposal cycle can run at a time for a given proposer.
pub struct ChunkProposer<O, M = ChunkProposerMetrics> {
    /// A reference to the database.
    database: Arc<Database>,
    /// The provider of the L1 block range hash.
    oracle: O,
    /// The proposer configuration.
    config: ChunkProposerConfig,
    /// The sink for the proposer observations.
    metrics: M,
}

impl<O> ChunkProposer<O> {
    /// Creates a new chunk proposer.
    ///
    /// Errors if the configuration is invalid.
    pub fn new(
        database: Arc<Database>,
        oracle: O,
        config: ChunkProposerConfig,
    ) -> Result<Self, ChunkProposerError> {
        config.validate()?;
        tracing::debug!(
            target: "scroll::chunk_proposer",
            max_block_num_per_chunk = config.max_block_num_per_chunk,
            max_tx_num_per_chunk = config.max_tx_num_per_chunk,
            max_l1_commit_gas_per_chunk = config.max_l1_commit_gas_per_chunk,
            max_l1_commit_calldata_size_per_chunk = config.max_l1_commit_calldata_size_per_chunk,
            max_row_consumption_per_chunk = config.max_row_consumption_per_chunk,
            chunk_timeout = ?config.chunk_timeout,
            gas_cost_increase_multiplier = config.gas_cost_increase_multiplier,
            "New chunk proposer"
        );

        Ok(Self { database, oracle, config, metrics: ChunkProposerMetrics::default() })
    }
}

impl<O, M> ChunkProposer<O, M> {
    /// Replaces the metrics sink of the proposer.
    pub fn with_metrics_sink<S: ProposerMetricsSink>(self, metrics: S) -> ChunkProposer<O, S> {
        ChunkProposer {
            database: self.database,
            oracle: self.oracle,
            config: self.config,
            metrics,
        }
    }

    /// Returns the proposer configuration.
    pub const fn config(&self) -> &ChunkProposerConfig {
        &self.config
    }
}

impl<O, M> ChunkProposer<O, M>
where
    O: L1BlockRangeHashProvider,
    M: ProposerMetricsSink,
{
    /// Runs a proposal cycle, persisting the proposed chunk if any.
    ///
    /// Returns the persisted chunk, or `None` if no chunk is ready yet. On error, nothing is
    /// persisted and the same blocks are considered again by the next cycle.
    pub async fn try_propose_chunk(&mut self) -> Result<Option<ChunkInfo>, ChunkProposerError> {
        self.metrics.record_cycle();
        let res = self.propose_and_persist().await;
        if let Err(err) = &res {
            self.metrics.record_failure();
            tracing::error!(target: "scroll::chunk_proposer", %err, "Failed to propose chunk");
        }
        res
    }

    async fn propose_and_persist(&self) -> Result<Option<ChunkInfo>, ChunkProposerError> {
        let parent = self.database.get_latest_chunk().await?;
        let outcome = self.propose_chunk(parent.as_ref()).await?;
        self.metrics.record_outcome(&outcome);
        if let Some(stats) = outcome.stats() {
            tracing::debug!(target: "scroll::chunk_proposer", ?stats, "Proposal outcome");
        }

        let ProposalOutcome::Proposed { chunk, trigger } = outcome else { return Ok(None) };

        self.metrics.record_persist();
        let info = self.persist_chunk(parent.as_ref(), &chunk).await.inspect_err(|_| {
            self.metrics.record_persist_failure();
        })?;

        tracing::info!(
            target: "scroll::chunk_proposer",
            index = info.index,
            hash = ?info.hash,
            start = %info.start_block,
            end = %info.end_block,
            last_applied_l1_block = info.last_applied_l1_block,
            ?trigger,
            "Persisted chunk"
        );
        Ok(Some(info))
    }

    /// Proposes a chunk following the provided parent chunk, without persisting it.
    ///
    /// The candidates are the unchunked blocks, up to the maximum number of blocks per chunk. The
    /// L1 block range hash is resolved once for the range ending at the last applied L1 block of
    /// the last candidate, and attached to the proposed chunk even if it ends up holding fewer
    /// blocks.
    pub async fn propose_chunk(
        &self,
        parent: Option<&ChunkInfo>,
    ) -> Result<ProposalOutcome, ChunkProposerError> {
        let height = self.database.get_unchunked_block_height().await?;
        let mut candidates = self
            .database
            .get_l2_blocks_gte_height(height, self.config.max_block_num_per_chunk)
            .await?;
        truncate_to_contiguous(&mut candidates, height);

        let Some(last_candidate) = candidates.last() else {
            tracing::trace!(target: "scroll::chunk_proposer", height, "No unchunked blocks");
            return Ok(ProposalOutcome::NoBlocks)
        };

        let from = l1_block_range_start(parent);
        let to = last_candidate.last_applied_l1_block;
        let l1_block_range_hash = self.oracle.l1_block_range_hash(from, to).await?;
        tracing::trace!(
            target: "scroll::chunk_proposer",
            from,
            to,
            ?l1_block_range_hash,
            "Resolved L1 block range hash"
        );

        match pack_blocks(&self.config, candidates, unix_timestamp())? {
            PackedChunk::Ready { blocks, stats, trigger } => {
                let hash = compute_chunk_hash(&blocks)?;
                let last_applied_l1_block =
                    blocks.last().map(|b| b.last_applied_l1_block).unwrap_or_default();
                let chunk = Chunk { blocks, last_applied_l1_block, l1_block_range_hash };
                Ok(ProposalOutcome::Proposed { chunk: SealedChunk { chunk, hash, stats }, trigger })
            }
            PackedChunk::NotReady { stats } => Ok(ProposalOutcome::NotEnoughBlocks { stats }),
        }
    }

    /// Persists the chunk and assigns its blocks to it in a single transaction.
    async fn persist_chunk(
        &self,
        parent: Option<&ChunkInfo>,
        chunk: &SealedChunk,
    ) -> Result<ChunkInfo, ChunkProposerError> {
        let tx = self.database.tx_mut().await?;
        let info = tx.insert_chunk(parent, chunk).await?;
        tx.update_l2_blocks_chunk_hash(info.start_block.number, info.end_block.number, info.hash)
            .await?;
        tx.commit().await?;
        Ok(info)
    }
}

impl<O, M> std::fmt::Debug for ChunkProposer<O, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChunkProposer")
            .field("database", &self.database)
            .field("oracle", &"L1BlockRangeHashProvider")
            .field("config", &self.config)
            .field("metrics", &"ProposerMetricsSink")
            .finish()
    }
}

/// Returns the first L1 block of the range following the parent chunk.
///
/// A zero last applied L1 block means the parent holds no L1 reference, in which case the range
/// starts at 0.
pub fn l1_block_range_start(parent: Option<&ChunkInfo>) -> u64 {
    match parent.map(|p| p.last_applied_l1_block) {
        Some(last_applied_l1_block) if last_applied_l1_block != 0 => last_applied_l1_block + 1,
        _ => 0,
    }
}

/// Drops the blocks following the first gap in the candidates, which must start at `height`.
fn truncate_to_contiguous(candidates: &mut Vec<L2Block>, height: u64) {
    let contiguous = candidates
        .iter()
        .zip(height..)
        .take_while(|(block, number)| block.number == *number)
        .count();
    if contiguous < candidates.len() {
        tracing::warn!(
            target: "scroll::chunk_proposer",
            height,
            gap = candidates[contiguous].number,
            "Unchunked blocks are not contiguous"
        );
        candidates.truncate(contiguous);
    }
}

fn unix_timestamp() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or_default()
}
