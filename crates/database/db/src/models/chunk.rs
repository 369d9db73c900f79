use alloy_primitives::B256;
use rollup_node_primitives::{BlockInfo, ChunkInfo, ChunkStats};
use sea_orm::{entity::prelude::*, ActiveValue};

/// A database model that represents a proposed chunk.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "chunk")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    index: i64,
    #[sea_orm(unique)]
    hash: Vec<u8>,
    start_block_number: i64,
    start_block_hash: Vec<u8>,
    end_block_number: i64,
    end_block_hash: Vec<u8>,
    start_block_time: i64,
    total_tx_num: i64,
    total_gas_used: i64,
    total_l1_commit_gas: i64,
    total_l1_commit_calldata_size: i64,
    max_row_consumption: i64,
    last_applied_l1_block: i64,
    l1_block_range_hash: Vec<u8>,
    parent_chunk_hash: Vec<u8>,
}

/// The relation for the chunk model.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// A chunk has many blocks.
    #[sea_orm(has_many = "super::l2_block::Entity")]
    L2Block,
}

impl Related<super::l2_block::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::L2Block.def()
    }
}

/// The active model behavior for the chunk model.
impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ChunkInfo {
    fn from(value: Model) -> Self {
        let stats = ChunkStats {
            tx_num: value.total_tx_num as u64,
            l1_commit_gas: value.total_l1_commit_gas as u64,
            l1_commit_calldata_size: value.total_l1_commit_calldata_size as u64,
            total_gas_used: value.total_gas_used as u64,
            max_row_consumption: value.max_row_consumption as u64,
            block_num: (value.end_block_number - value.start_block_number + 1) as u64,
        };
        Self {
            index: value.index as u64,
            hash: B256::from_slice(&value.hash),
            start_block: BlockInfo {
                number: value.start_block_number as u64,
                hash: B256::from_slice(&value.start_block_hash),
            },
            end_block: BlockInfo {
                number: value.end_block_number as u64,
                hash: B256::from_slice(&value.end_block_hash),
            },
            start_block_time: value.start_block_time as u64,
            stats,
            last_applied_l1_block: value.last_applied_l1_block as u64,
            l1_block_range_hash: B256::from_slice(&value.l1_block_range_hash),
            parent_hash: B256::from_slice(&value.parent_chunk_hash),
        }
    }
}

impl From<ChunkInfo> for ActiveModel {
    fn from(chunk: ChunkInfo) -> Self {
        Self {
            index: ActiveValue::Set(chunk.index as i64),
            hash: ActiveValue::Set(chunk.hash.to_vec()),
            start_block_number: ActiveValue::Set(chunk.start_block.number as i64),
            start_block_hash: ActiveValue::Set(chunk.start_block.hash.to_vec()),
            end_block_number: ActiveValue::Set(chunk.end_block.number as i64),
            end_block_hash: ActiveValue::Set(chunk.end_block.hash.to_vec()),
            start_block_time: ActiveValue::Set(chunk.start_block_time as i64),
            total_tx_num: ActiveValue::Set(chunk.stats.tx_num as i64),
            total_gas_used: ActiveValue::Set(chunk.stats.total_gas_used as i64),
            total_l1_commit_gas: ActiveValue::Set(chunk.stats.l1_commit_gas as i64),
            total_l1_commit_calldata_size: ActiveValue::Set(
                chunk.stats.l1_commit_calldata_size as i64,
            ),
            max_row_consumption: ActiveValue::Set(chunk.stats.max_row_consumption as i64),
            last_applied_l1_block: ActiveValue::Set(chunk.last_applied_l1_block as i64),
            l1_block_range_hash: ActiveValue::Set(chunk.l1_block_range_hash.to_vec()),
            parent_chunk_hash: ActiveValue::Set(chunk.parent_hash.to_vec()),
        }
    }
}
