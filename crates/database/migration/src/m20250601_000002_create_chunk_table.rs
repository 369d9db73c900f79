use super::m20250601_000001_create_l2_block_table::HASH_LENGTH;

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Chunk::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Chunk::Index).big_integer().not_null().primary_key())
                    .col(binary_len_uniq(Chunk::Hash, HASH_LENGTH))
                    .col(big_integer(Chunk::StartBlockNumber))
                    .col(binary_len(Chunk::StartBlockHash, HASH_LENGTH))
                    .col(big_integer(Chunk::EndBlockNumber))
                    .col(binary_len(Chunk::EndBlockHash, HASH_LENGTH))
                    .col(big_integer(Chunk::StartBlockTime))
                    .col(big_integer(Chunk::TotalTxNum))
                    .col(big_integer(Chunk::TotalGasUsed))
                    .col(big_integer(Chunk::TotalL1CommitGas))
                    .col(big_integer(Chunk::TotalL1CommitCalldataSize))
                    .col(big_integer(Chunk::MaxRowConsumption))
                    .col(big_integer(Chunk::LastAppliedL1Block))
                    .col(binary_len(Chunk::L1BlockRangeHash, HASH_LENGTH))
                    .col(binary_len(Chunk::ParentChunkHash, HASH_LENGTH))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_chunk_end_block_number")
                    .col(Chunk::EndBlockNumber)
                    .table(Chunk::Table)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Chunk::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Chunk {
    Table,
    Index,
    Hash,
    StartBlockNumber,
    StartBlockHash,
    EndBlockNumber,
    EndBlockHash,
    StartBlockTime,
    TotalTxNum,
    TotalGasUsed,
    TotalL1CommitGas,
    TotalL1CommitCalldataSize,
    MaxRowConsumption,
    LastAppliedL1Block,
    L1BlockRangeHash,
    ParentChunkHash,
}
