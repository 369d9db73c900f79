use crate::{ChunkTrigger, ProposalOutcome};

use metrics::{Counter, Gauge};
use metrics_derive::Metrics;

/// A sink for the observations of the [`super::ChunkProposer`].
///
/// The proposer only reports to the sink once a proposal cycle returns.
#[auto_impl::auto_impl(&, Arc, Box)]
pub trait ProposerMetricsSink: Send + Sync {
    /// Records the outcome of a proposal.
    fn record_outcome(&self, outcome: &ProposalOutcome);

    /// Records the start of a proposal cycle.
    fn record_cycle(&self);

    /// Records a failed proposal cycle.
    fn record_failure(&self);

    /// Records an attempt to persist a chunk.
    fn record_persist(&self);

    /// Records a failure to persist a chunk.
    fn record_persist_failure(&self);
}

/// The metrics for the [`super::ChunkProposer`].
#[derive(Metrics, Clone)]
#[metrics(scope = "chunk_proposer")]
pub struct ChunkProposerMetrics {
    /// The number of proposal cycles.
    pub propose_chunk_total: Counter,
    /// The number of failed proposal cycles.
    pub propose_chunk_failure_total: Counter,
    /// The number of attempts to persist a chunk.
    pub update_chunk_info_total: Counter,
    /// The number of failures to persist a chunk.
    pub update_chunk_info_failure_total: Counter,
    /// The number of chunks proposed because their first block timed out.
    pub first_block_timeout_reached_total: Counter,
    /// The number of chunks proposed because they hold the maximum number of blocks.
    pub max_block_num_reached_total: Counter,
    /// The number of chunks proposed because a limit was reached.
    pub limit_reached_total: Counter,
    /// The number of cycles which didn't have enough blocks to propose a chunk.
    pub blocks_propose_not_enough_total: Counter,
    /// The number of transactions of the last proposed chunk.
    pub chunk_tx_num: Gauge,
    /// The estimated L1 commit gas of the last proposed chunk.
    pub chunk_estimate_l1_commit_gas: Gauge,
    /// The L1 commit calldata size of the last proposed chunk.
    pub chunk_estimate_l1_commit_calldata_size: Gauge,
    /// The total gas used by the transactions of the last proposed chunk.
    pub chunk_total_l2_tx_gas: Gauge,
    /// The row consumption of the busiest sub-circuit of the last proposed chunk.
    pub chunk_max_row_consumption: Gauge,
    /// The number of blocks of the last proposed chunk.
    pub chunk_block_num: Gauge,
}

impl ProposerMetricsSink for ChunkProposerMetrics {
    fn record_outcome(&self, outcome: &ProposalOutcome) {
        let ProposalOutcome::Proposed { chunk, trigger } = outcome else {
            if matches!(outcome, ProposalOutcome::NotEnoughBlocks { .. }) {
                self.blocks_propose_not_enough_total.increment(1);
            }
            return
        };

        match trigger {
            ChunkTrigger::LimitReached(_) => self.limit_reached_total.increment(1),
            ChunkTrigger::FirstBlockTimeout => self.first_block_timeout_reached_total.increment(1),
            ChunkTrigger::MaxBlockNum => self.max_block_num_reached_total.increment(1),
        }

        let stats = &chunk.stats;
        self.chunk_tx_num.set(stats.tx_num as f64);
        self.chunk_estimate_l1_commit_gas.set(stats.l1_commit_gas as f64);
        self.chunk_estimate_l1_commit_calldata_size.set(stats.l1_commit_calldata_size as f64);
        self.chunk_total_l2_tx_gas.set(stats.total_gas_used as f64);
        self.chunk_max_row_consumption.set(stats.max_row_consumption as f64);
        self.chunk_block_num.set(stats.block_num as f64);
    }

    fn record_cycle(&self) {
        self.propose_chunk_total.increment(1);
    }

    fn record_failure(&self) {
        self.propose_chunk_failure_total.increment(1);
    }

    fn record_persist(&self) {
        self.update_chunk_info_total.increment(1);
    }

    fn record_persist_failure(&self) {
        self.update_chunk_info_failure_total.increment(1);
    }
}
