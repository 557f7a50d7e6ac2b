//! Read-only access to the execution store
//!
//! Executions live in Redis as hashes keyed `<type>:<id>`. Only three reads
//! are needed: key enumeration by glob, hash field get, and hash field
//! listing. Nothing here writes.
//!
//! `RedisStore` talks to a live server over one synchronous connection.
//! `MemoryStore` holds hashes in memory for tests.

mod errors;
mod memory;
mod redis_store;

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use redis_store::RedisStore;

/// Store access contract used by the filter engine and discovery pipeline
pub trait ExecutionStore {
    /// List every key matching a glob pattern
    fn keys(&mut self, pattern: &str) -> StoreResult<Vec<String>>;

    /// Get a hash field.
    ///
    /// Returns `Ok(None)` when the key or the field does not exist.
    fn hget(&mut self, key: &str, field: &str) -> StoreResult<Option<String>>;

    /// List the field names of a hash.
    ///
    /// Returns an empty list when the key does not exist.
    fn hkeys(&mut self, key: &str) -> StoreResult<Vec<String>>;
}
