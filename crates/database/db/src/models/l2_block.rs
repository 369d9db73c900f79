use crate::DatabaseError;

use alloy_primitives::B256;
use rollup_node_primitives::L2Block;
use sea_orm::{entity::prelude::*, ActiveValue};

/// A database model that represents an executed L2 block.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "l2_block")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    number: i64,
    hash: Vec<u8>,
    parent_hash: Vec<u8>,
    timestamp: i64,
    gas_used: i64,
    gas_limit: i64,
    base_fee: Option<i64>,
    transactions: Json,
    row_consumption: Option<Json>,
    last_applied_l1_block: i64,
    chunk_hash: Option<Vec<u8>>,
}

/// The relation for the L2 block model.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// A relation with the chunk table, where the chunk hash column of the block belongs to the
    /// hash column of the chunk table.
    #[sea_orm(
        belongs_to = "super::chunk::Entity",
        from = "Column::ChunkHash",
        to = "super::chunk::Column::Hash"
    )]
    Chunk,
}

impl Related<super::chunk::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Chunk.def()
    }
}

/// The active model behavior for the L2 block model.
impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<L2Block> for ActiveModel {
    type Error = DatabaseError;

    fn try_from(block: L2Block) -> Result<Self, Self::Error> {
        Ok(Self {
            number: ActiveValue::Set(block.number as i64),
            hash: ActiveValue::Set(block.hash.to_vec()),
            parent_hash: ActiveValue::Set(block.parent_hash.to_vec()),
            timestamp: ActiveValue::Set(block.timestamp as i64),
            gas_used: ActiveValue::Set(block.gas_used as i64),
            gas_limit: ActiveValue::Set(block.gas_limit as i64),
            base_fee: ActiveValue::Set(block.base_fee.map(|fee| fee as i64)),
            transactions: ActiveValue::Set(serde_json::to_value(&block.transactions)?),
            row_consumption: ActiveValue::Set(
                block.row_consumption.as_ref().map(serde_json::to_value).transpose()?,
            ),
            last_applied_l1_block: ActiveValue::Set(block.last_applied_l1_block as i64),
            chunk_hash: ActiveValue::Set(None),
        })
    }
}

impl TryFrom<Model> for L2Block {
    type Error = DatabaseError;

    fn try_from(value: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            number: value.number as u64,
            hash: B256::from_slice(&value.hash),
            parent_hash: B256::from_slice(&value.parent_hash),
            timestamp: value.timestamp as u64,
            gas_used: value.gas_used as u64,
            gas_limit: value.gas_limit as u64,
            base_fee: value.base_fee.map(|fee| fee as u64),
            transactions: serde_json::from_value(value.transactions)?,
            // A JSON null is stored for blocks executed without row consumption.
            row_consumption: value
                .row_consumption
                .filter(|rc| !rc.is_null())
                .map(serde_json::from_value)
                .transpose()?,
            last_applied_l1_block: value.last_applied_l1_block as u64,
        })
    }
}
