/// The default maximum number of blocks in a chunk.
pub(crate) const DEFAULT_MAX_BLOCK_NUM_PER_CHUNK: u64 = 100;

/// The default maximum number of transactions in a chunk.
pub(crate) const DEFAULT_MAX_TX_NUM_PER_CHUNK: u64 = 100;

/// The default maximum L1 commit gas of a chunk.
pub(crate) const DEFAULT_MAX_L1_COMMIT_GAS_PER_CHUNK: u64 = 11_234_567;

/// The default maximum L1 commit calldata size of a chunk.
pub(crate) const DEFAULT_MAX_L1_COMMIT_CALLDATA_SIZE_PER_CHUNK: u64 = 112_345;

/// The default maximum row consumption of a chunk.
pub(crate) const DEFAULT_MAX_ROW_CONSUMPTION_PER_CHUNK: u64 = 1_048_319;

/// The default chunk timeout in seconds.
pub(crate) const DEFAULT_CHUNK_TIMEOUT_SEC: u64 = 300;

/// The default L1 commit gas over-estimation multiplier.
pub(crate) const DEFAULT_GAS_COST_INCREASE_MULTIPLIER: f64 = 1.2;

/// The default interval between two proposal cycles in milliseconds.
pub(crate) const DEFAULT_POLL_INTERVAL: u64 = 2_000;

/// The default database URL.
pub(crate) const DEFAULT_DATABASE_URL: &str = "sqlite://chunk-proposer.db?mode=rwc";
