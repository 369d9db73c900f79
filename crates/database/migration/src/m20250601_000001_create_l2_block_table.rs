use sea_orm_migration::{prelude::*, schema::*};

pub(crate) const HASH_LENGTH: u32 = 32;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(L2Block::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(L2Block::Number).big_integer().not_null().primary_key())
                    .col(binary_len(L2Block::Hash, HASH_LENGTH))
                    .col(binary_len(L2Block::ParentHash, HASH_LENGTH))
                    .col(big_integer(L2Block::Timestamp))
                    .col(big_integer(L2Block::GasUsed))
                    .col(big_integer(L2Block::GasLimit))
                    .col(big_integer_null(L2Block::BaseFee))
                    .col(json(L2Block::Transactions))
                    .col(json_null(L2Block::RowConsumption))
                    .col(big_integer(L2Block::LastAppliedL1Block))
                    .col(binary_len_null(L2Block::ChunkHash, HASH_LENGTH))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_l2_block_chunk_hash")
                    .col(L2Block::ChunkHash)
                    .table(L2Block::Table)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(L2Block::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum L2Block {
    Table,
    Number,
    Hash,
    ParentHash,
    Timestamp,
    GasUsed,
    GasLimit,
    BaseFee,
    Transactions,
    RowConsumption,
    LastAppliedL1Block,
    ChunkHash,
}
