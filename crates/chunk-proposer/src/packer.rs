use crate::{
    ChunkLimit, ChunkProposerConfig, ChunkProposerError, ChunkRowConsumption, ChunkTrigger,
};

use rollup_node_primitives::{ChunkStats, L2Block};
use scroll_codec::estimate::{block_l1_commit_calldata_size, chunk_l1_commit_gas};
use std::iter;

/// The result of packing candidate blocks into a chunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PackedChunk {
    /// The packed blocks form a chunk ready to be proposed.
    Ready {
        /// The blocks of the chunk.
        blocks: Vec<L2Block>,
        /// The resource usage of the chunk.
        stats: ChunkStats,
        /// The condition which made the chunk ready.
        trigger: ChunkTrigger,
    },
    /// The packed blocks don't form a chunk yet.
    NotReady {
        /// The resource usage of the packed blocks.
        stats: ChunkStats,
    },
}

/// Greedily packs the candidate blocks, in order, into a chunk.
///
/// Packing stops before the first block which would breach a limit of the configuration. If the
/// first candidate alone breaches a limit, packing fails. If all candidates fit, the chunk is
/// ready only if its first block is older than the chunk timeout relative to `now` or if it holds
/// the maximum number of blocks.
pub(crate) fn pack_blocks(
    config: &ChunkProposerConfig,
    candidates: Vec<L2Block>,
    now: u64,
) -> Result<PackedChunk, ChunkProposerError> {
    let mut blocks: Vec<L2Block> = Vec::with_capacity(candidates.len());
    let mut stats = ChunkStats::default();
    let mut row_consumption = ChunkRowConsumption::default();

    for block in candidates {
        let mut next_row_consumption = row_consumption.clone();
        next_row_consumption.add(block.row_consumption.as_ref()).inspect_err(|_| {
            tracing::error!(
                target: "scroll::chunk_proposer",
                number = block.number,
                "Block is missing row consumption"
            );
        })?;

        let next = ChunkStats {
            tx_num: stats.tx_num + block.transactions.len() as u64,
            l1_commit_gas: chunk_l1_commit_gas(blocks.iter().chain(iter::once(&block))),
            l1_commit_calldata_size: stats.l1_commit_calldata_size +
                block_l1_commit_calldata_size(&block),
            total_gas_used: stats.total_gas_used + block.gas_used,
            max_row_consumption: next_row_consumption.max(),
            block_num: stats.block_num + 1,
        };

        if let Some((limit, value, max)) = exceeded_limit(config, &next) {
            if blocks.is_empty() {
                return Err(ChunkProposerError::FirstBlockExceedsLimit {
                    limit,
                    block_number: block.number,
                    value,
                    max,
                })
            }
            tracing::debug!(
                target: "scroll::chunk_proposer",
                %limit,
                value,
                max,
                number = block.number,
                block_num = stats.block_num,
                "Chunk limit reached"
            );
            return Ok(PackedChunk::Ready {
                blocks,
                stats,
                trigger: ChunkTrigger::LimitReached(limit),
            })
        }

        blocks.push(block);
        stats = next;
        row_consumption = next_row_consumption;
    }

    let Some(first) = blocks.first() else { return Ok(PackedChunk::NotReady { stats }) };

    if first.timestamp.saturating_add(config.chunk_timeout.as_secs()) < now {
        tracing::warn!(
            target: "scroll::chunk_proposer",
            number = first.number,
            timestamp = first.timestamp,
            timeout = config.chunk_timeout.as_secs(),
            block_num = stats.block_num,
            "First block timeout reached"
        );
        return Ok(PackedChunk::Ready { blocks, stats, trigger: ChunkTrigger::FirstBlockTimeout })
    }

    if stats.block_num == config.max_block_num_per_chunk {
        tracing::info!(
            target: "scroll::chunk_proposer",
            block_num = stats.block_num,
            "Reached maximum number of blocks in chunk"
        );
        return Ok(PackedChunk::Ready { blocks, stats, trigger: ChunkTrigger::MaxBlockNum })
    }

    tracing::debug!(
        target: "scroll::chunk_proposer",
        block_num = stats.block_num,
        "Pending blocks do not reach any limit and contain no timed out block"
    );
    Ok(PackedChunk::NotReady { stats })
}

/// Returns the first limit breached by the stats along with the compared value and the limit.
fn exceeded_limit(
    config: &ChunkProposerConfig,
    stats: &ChunkStats,
) -> Option<(ChunkLimit, u64, u64)> {
    [
        (ChunkLimit::TxNum, stats.tx_num, config.max_tx_num_per_chunk),
        (
            ChunkLimit::L1CommitGas,
            config.overestimate_l1_commit_gas(stats.l1_commit_gas),
            config.max_l1_commit_gas_per_chunk,
        ),
        (
            ChunkLimit::L1CommitCalldataSize,
            stats.l1_commit_calldata_size,
            config.max_l1_commit_calldata_size_per_chunk,
        ),
        (
            ChunkLimit::RowConsumption,
            stats.max_row_consumption,
            config.max_row_consumption_per_chunk,
        ),
    ]
    .into_iter()
    .find(|(_, value, max)| value > max)
}
