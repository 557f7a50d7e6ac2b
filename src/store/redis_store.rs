//! Redis-backed execution store
//!
//! One synchronous connection, opened and pinged at startup, used for
//! every read of the run. No pooling and no timeouts beyond the client
//! defaults.

use redis::{Commands, Connection, IntoConnectionInfo};
use tracing::debug;

use super::errors::{StoreError, StoreResult};
use super::ExecutionStore;

/// Live Redis store
pub struct RedisStore {
    addr: String,
    conn: Connection,
}

impl RedisStore {
    /// Connect to Redis and verify the connection with PING.
    ///
    /// `addr` is either `host:port` or a full `redis://` / `rediss://` URL.
    pub fn connect(addr: &str, password: Option<&str>, db: i64) -> StoreResult<Self> {
        let url = connection_url(addr, db);
        let mut info = url
            .as_str()
            .into_connection_info()
            .map_err(|e| StoreError::connection(addr, e.to_string()))?;
        if let Some(password) = password {
            info.redis.password = Some(password.to_string());
        }

        let client =
            redis::Client::open(info).map_err(|e| StoreError::connection(addr, e.to_string()))?;
        let mut conn = client
            .get_connection()
            .map_err(|e| StoreError::connection(addr, e.to_string()))?;

        let pong: String = redis::cmd("PING")
            .query(&mut conn)
            .map_err(|e| StoreError::connection(addr, e.to_string()))?;
        debug!(addr, reply = %pong, "redis connection verified");

        Ok(Self {
            addr: addr.to_string(),
            conn,
        })
    }

    /// Address this store is connected to
    pub fn addr(&self) -> &str {
        &self.addr
    }
}

/// Builds a connection URL from a bare `host:port` address
fn connection_url(addr: &str, db: i64) -> String {
    if addr.starts_with("redis://") || addr.starts_with("rediss://") {
        addr.to_string()
    } else {
        format!("redis://{}/{}", addr, db)
    }
}

impl ExecutionStore for RedisStore {
    fn keys(&mut self, pattern: &str) -> StoreResult<Vec<String>> {
        self.conn
            .keys(pattern)
            .map_err(|e| StoreError::command(format!("KEYS {}", pattern), e.to_string()))
    }

    fn hget(&mut self, key: &str, field: &str) -> StoreResult<Option<String>> {
        self.conn
            .hget(key, field)
            .map_err(|e| StoreError::command(format!("HGET {} {}", key, field), e.to_string()))
    }

    fn hkeys(&mut self, key: &str) -> StoreResult<Vec<String>> {
        self.conn
            .hkeys(key)
            .map_err(|e| StoreError::command(format!("HKEYS {}", key), e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_url_from_host_port() {
        assert_eq!(connection_url("localhost:6379", 0), "redis://localhost:6379/0");
        assert_eq!(connection_url("10.0.0.5:6380", 3), "redis://10.0.0.5:6380/3");
    }

    #[test]
    fn test_connection_url_passthrough() {
        assert_eq!(
            connection_url("redis://cache.internal:6379/2", 0),
            "redis://cache.internal:6379/2"
        );
        assert_eq!(
            connection_url("rediss://cache.internal:6380", 0),
            "rediss://cache.internal:6380"
        );
    }

    #[test]
    fn test_unparseable_addr_is_connection_error() {
        // Rejected while building the connection info, before any socket is opened
        let err = RedisStore::connect("not a host:6379", None, 0)
            .err()
            .expect("connection must fail");
        assert!(err.is_connection());
        assert!(err.to_string().contains("not a host:6379"));
    }
}
