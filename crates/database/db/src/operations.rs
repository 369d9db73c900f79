use super::{models, DatabaseError};
use crate::{ReadConnectionProvider, WriteConnectionProvider};

use alloy_primitives::B256;
use rollup_node_primitives::{ChunkInfo, L2Block, SealedChunk};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

/// The [`DatabaseReadOperations`] trait provides read-only methods for interacting with the
/// database.
#[async_trait::async_trait]
pub trait DatabaseReadOperations: ReadConnectionProvider + Sync {
    /// Get the chunk with the highest index from the database.
    async fn get_latest_chunk(&self) -> Result<Option<ChunkInfo>, DatabaseError> {
        Ok(models::chunk::Entity::find()
            .order_by_desc(models::chunk::Column::Index)
            .one(self.get_connection())
            .await?
            .map(Into::into))
    }

    /// Get the chunk with the provided index from the database.
    async fn get_chunk_by_index(&self, index: u64) -> Result<Option<ChunkInfo>, DatabaseError> {
        Ok(models::chunk::Entity::find_by_id(index as i64)
            .one(self.get_connection())
            .await?
            .map(Into::into))
    }

    /// Returns the height of the first block which is not part of any chunk.
    ///
    /// This is the block following the end block of the latest chunk, or 1 if no chunk was
    /// proposed yet.
    async fn get_unchunked_block_height(&self) -> Result<u64, DatabaseError> {
        Ok(self.get_latest_chunk().await?.map(|chunk| chunk.end_block.number + 1).unwrap_or(1))
    }

    /// Get at most `limit` L2 blocks with a number greater than or equal to `height`, in
    /// ascending order.
    async fn get_l2_blocks_gte_height(
        &self,
        height: u64,
        limit: u64,
    ) -> Result<Vec<L2Block>, DatabaseError> {
        models::l2_block::Entity::find()
            .filter(models::l2_block::Column::Number.gte(height as i64))
            .order_by_asc(models::l2_block::Column::Number)
            .limit(limit)
            .all(self.get_connection())
            .await?
            .into_iter()
            .map(TryInto::try_into)
            .collect()
    }

    /// Get the L2 blocks assigned to the chunk with the provided hash, in ascending order.
    async fn get_l2_blocks_by_chunk_hash(
        &self,
        chunk_hash: B256,
    ) -> Result<Vec<L2Block>, DatabaseError> {
        models::l2_block::Entity::find()
            .filter(models::l2_block::Column::ChunkHash.eq(chunk_hash.to_vec()))
            .order_by_asc(models::l2_block::Column::Number)
            .all(self.get_connection())
            .await?
            .into_iter()
            .map(TryInto::try_into)
            .collect()
    }
}

/// The [`DatabaseWriteOperations`] trait provides write methods for interacting with the
/// database.
#[async_trait::async_trait]
pub trait DatabaseWriteOperations: WriteConnectionProvider + Sync {
    /// Insert the provided executed [`L2Block`]s into the database. The blocks are inserted
    /// without a chunk assignment.
    async fn insert_l2_blocks(&self, blocks: Vec<L2Block>) -> Result<(), DatabaseError> {
        if blocks.is_empty() {
            return Ok(())
        }
        tracing::trace!(
            target: "scroll::db",
            first = blocks.first().map(|b| b.number),
            last = blocks.last().map(|b| b.number),
            "Inserting L2 blocks into database."
        );
        let blocks = blocks
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<models::l2_block::ActiveModel>, _>>()?;
        models::l2_block::Entity::insert_many(blocks)
            .exec_without_returning(self.get_connection())
            .await?;
        Ok(())
    }

    /// Insert the [`SealedChunk`] into the database as the child of the provided `parent` chunk.
    ///
    /// The first chunk gets index 0 and a zero parent hash. Returns the persisted [`ChunkInfo`].
    async fn insert_chunk(
        &self,
        parent: Option<&ChunkInfo>,
        chunk: &SealedChunk,
    ) -> Result<ChunkInfo, DatabaseError> {
        let (Some(first), Some(last)) = (chunk.chunk.first_block(), chunk.chunk.last_block())
        else {
            return Err(DatabaseError::EmptyChunk(chunk.hash))
        };

        let info = ChunkInfo {
            index: parent.map(|p| p.index + 1).unwrap_or_default(),
            hash: chunk.hash,
            start_block: first.block_info(),
            end_block: last.block_info(),
            start_block_time: first.timestamp,
            stats: chunk.stats,
            last_applied_l1_block: chunk.chunk.last_applied_l1_block,
            l1_block_range_hash: chunk.chunk.l1_block_range_hash,
            parent_hash: parent.map(|p| p.hash).unwrap_or_default(),
        };
        tracing::trace!(
            target: "scroll::db",
            index = info.index,
            hash = ?info.hash,
            start = info.start_block.number,
            end = info.end_block.number,
            "Inserting chunk into database."
        );

        let model: models::chunk::ActiveModel = info.into();
        model.insert(self.get_connection()).await?;
        Ok(info)
    }

    /// Assign the unchunked L2 blocks in the `[start, end]` range to the chunk with the provided
    /// hash.
    ///
    /// Errors if any block in the range is missing or already assigned to a chunk.
    async fn update_l2_blocks_chunk_hash(
        &self,
        start: u64,
        end: u64,
        chunk_hash: B256,
    ) -> Result<(), DatabaseError> {
        tracing::trace!(
            target: "scroll::db",
            start,
            end,
            ?chunk_hash,
            "Assigning L2 blocks to chunk."
        );
        let res = models::l2_block::Entity::update_many()
            .col_expr(models::l2_block::Column::ChunkHash, Expr::value(chunk_hash.to_vec()))
            .filter(models::l2_block::Column::Number.between(start as i64, end as i64))
            .filter(models::l2_block::Column::ChunkHash.is_null())
            .exec(self.get_connection())
            .await?;

        let expected = end.saturating_sub(start) + 1;
        if res.rows_affected != expected {
            tracing::error!(
                target: "scroll::db",
                start,
                end,
                ?chunk_hash,
                updated = res.rows_affected,
                "Unexpected number of blocks assigned to chunk."
            );
            return Err(DatabaseError::ChunkAssignmentMismatch {
                hash: chunk_hash,
                start,
                end,
                updated: res.rows_affected,
            })
        }
        Ok(())
    }
}

impl<T> DatabaseReadOperations for T where T: ReadConnectionProvider + Sync {}
impl<T> DatabaseWriteOperations for T where T: WriteConnectionProvider + Sync {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{l2_block, setup_test_db};

    use alloy_primitives::b256;
    use rollup_node_primitives::{Chunk, ChunkStats};

    fn sealed_chunk(blocks: Vec<L2Block>, hash: B256) -> SealedChunk {
        let last_applied_l1_block = blocks.last().map(|b| b.last_applied_l1_block).unwrap_or(0);
        let stats = ChunkStats {
            tx_num: 3,
            l1_commit_gas: 5_000,
            l1_commit_calldata_size: 200,
            total_gas_used: 21_000,
            max_row_consumption: 42,
            block_num: blocks.len() as u64,
        };
        SealedChunk {
            chunk: Chunk { blocks, last_applied_l1_block, l1_block_range_hash: B256::repeat_byte(7) },
            hash,
            stats,
        }
    }

    #[tokio::test]
    async fn test_unchunked_block_height() -> eyre::Result<()> {
        let db = setup_test_db().await;
        assert_eq!(db.get_unchunked_block_height().await?, 1);

        db.insert_l2_blocks((1..=4).map(|n| l2_block(n, 10)).collect()).await?;
        let blocks = db.get_l2_blocks_gte_height(1, 2).await?;
        let chunk = sealed_chunk(blocks, B256::repeat_byte(1));
        db.insert_chunk(None, &chunk).await?;

        assert_eq!(db.get_unchunked_block_height().await?, 3);

        Ok(())
    }

    #[tokio::test]
    async fn test_insert_chunk_links_parent() -> eyre::Result<()> {
        let db = setup_test_db().await;
        db.insert_l2_blocks((1..=4).map(|n| l2_block(n, 10 + n)).collect()).await?;

        let first_hash = b256!("0x1111111111111111111111111111111111111111111111111111111111111111");
        let first = sealed_chunk(db.get_l2_blocks_gte_height(1, 2).await?, first_hash);
        let first = db.insert_chunk(None, &first).await?;
        assert_eq!(first.index, 0);
        assert_eq!(first.parent_hash, B256::ZERO);
        assert_eq!(first.start_block, l2_block(1, 11).block_info());
        assert_eq!(first.end_block, l2_block(2, 12).block_info());
        assert_eq!(first.last_applied_l1_block, 12);

        let second_hash =
            b256!("0x2222222222222222222222222222222222222222222222222222222222222222");
        let second = sealed_chunk(db.get_l2_blocks_gte_height(3, 2).await?, second_hash);
        let second = db.insert_chunk(Some(&first), &second).await?;
        assert_eq!(second.index, 1);
        assert_eq!(second.parent_hash, first_hash);

        assert_eq!(db.get_latest_chunk().await?, Some(second));
        assert_eq!(db.get_chunk_by_index(0).await?, Some(first));

        Ok(())
    }

    #[tokio::test]
    async fn test_insert_empty_chunk_fails() {
        let db = setup_test_db().await;
        let chunk = sealed_chunk(vec![], B256::repeat_byte(1));
        let err = db.insert_chunk(None, &chunk).await.unwrap_err();
        assert!(matches!(err, DatabaseError::EmptyChunk(_)));
    }

    #[tokio::test]
    async fn test_assign_blocks_to_chunk() -> eyre::Result<()> {
        let db = setup_test_db().await;
        db.insert_l2_blocks((1..=3).map(|n| l2_block(n, 10)).collect()).await?;

        let hash = B256::repeat_byte(9);
        db.update_l2_blocks_chunk_hash(1, 2, hash).await?;

        let assigned = db.get_l2_blocks_by_chunk_hash(hash).await?;
        assert_eq!(assigned.iter().map(|b| b.number).collect::<Vec<_>>(), vec![1, 2]);

        // Assigned blocks can't be assigned again.
        let err = db.update_l2_blocks_chunk_hash(2, 3, B256::repeat_byte(10)).await.unwrap_err();
        assert!(matches!(err, DatabaseError::ChunkAssignmentMismatch { updated: 1, .. }));

        // Missing blocks are reported.
        let err = db.update_l2_blocks_chunk_hash(4, 5, B256::repeat_byte(11)).await.unwrap_err();
        assert!(matches!(err, DatabaseError::ChunkAssignmentMismatch { updated: 0, .. }));

        Ok(())
    }
}
