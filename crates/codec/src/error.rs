/// An error occurring during the codec process.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The block holds more transactions than the block context can encode.
    #[error("block {number} has {count} transactions, exceeding the codec limit of {}", u16::MAX)]
    TooManyTransactions {
        /// The block number.
        number: u64,
        /// The transaction count.
        count: usize,
    },
    /// The chunk holds no block.
    #[error("cannot encode an empty chunk")]
    EmptyChunk,
}
