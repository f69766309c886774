//! Time-boxed memoization of query results, keyed by SQL text.
//!
//! An explicit component injected by callers that want it — not a
//! process-wide map. Concurrent callers racing on the same key may both
//! recompute and both write; the last write wins. That is acceptable
//! because cached values are pure functions of the query text, so a
//! duplicate computation is wasted work, not a correctness problem.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use tabula_core::{Connection, Result, Rows};

pub struct QueryCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

struct CacheEntry {
    rows: Rows,
    expires_at: Instant,
}

impl QueryCache {
    /// Creates a cache whose entries expire `ttl` after they are
    /// written.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Runs `sql`, serving a cached result while its entry is live.
    pub fn query(&self, connection: &dyn Connection, sql: &str) -> Result<Rows> {
        if let Some(rows) = self.lookup(sql) {
            tracing::debug!(sql, "query cache hit");
            return Ok(rows);
        }

        // Computed outside the lock; a concurrent caller may do the
        // same and overwrite the entry below.
        let rows = connection.query(sql)?;

        self.lock().insert(
            sql.to_owned(),
            CacheEntry {
                rows: rows.clone(),
                expires_at: Instant::now() + self.ttl,
            },
        );

        Ok(rows)
    }

    /// Drops the entry for `sql`, if present.
    pub fn invalidate(&self, sql: &str) {
        self.lock().remove(sql);
    }

    /// Drops every entry.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lookup(&self, sql: &str) -> Option<Rows> {
        let mut entries = self.lock();

        match entries.get(sql) {
            Some(entry) if entry.expires_at > Instant::now() => Some(entry.rows.clone()),
            Some(_) => {
                entries.remove(sql);
                None
            }
            None => None,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, CacheEntry>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use tabula_core::driver::{ColumnMetadata, ForeignKeyMetadata, PrimaryKeyMetadata};
    use tabula_core::Value;

    /// Counts queries and answers each with a single one-column row.
    struct CountingConnection {
        queries: Cell<usize>,
    }

    impl Connection for CountingConnection {
        fn columns(&self, _: &str, _: Option<&str>) -> Result<Vec<ColumnMetadata>> {
            Ok(vec![])
        }

        fn primary_keys(&self, _: &str, _: Option<&str>) -> Result<Vec<PrimaryKeyMetadata>> {
            Ok(vec![])
        }

        fn imported_keys(&self, _: &str, _: Option<&str>) -> Result<Vec<ForeignKeyMetadata>> {
            Ok(vec![])
        }

        fn table_names(&self) -> Result<Vec<String>> {
            Ok(vec![])
        }

        fn execute(&self, _: &str) -> Result<u64> {
            Ok(0)
        }

        fn query(&self, _: &str) -> Result<Rows> {
            self.queries.set(self.queries.get() + 1);
            Ok(Rows::new(
                1,
                vec![vec![Value::I64(self.queries.get() as i64)]],
            ))
        }
    }

    #[test]
    fn serves_cached_rows_until_expiry() {
        let connection = CountingConnection {
            queries: Cell::new(0),
        };
        let cache = QueryCache::new(Duration::from_secs(60));

        let first = cache.query(&connection, "SELECT 1").unwrap();
        let second = cache.query(&connection, "SELECT 1").unwrap();
        assert_eq!(first, second);
        assert_eq!(connection.queries.get(), 1);

        // A different key recomputes.
        cache.query(&connection, "SELECT 2").unwrap();
        assert_eq!(connection.queries.get(), 2);
    }

    #[test]
    fn expired_entries_recompute() {
        let connection = CountingConnection {
            queries: Cell::new(0),
        };
        let cache = QueryCache::new(Duration::from_secs(0));

        cache.query(&connection, "SELECT 1").unwrap();
        cache.query(&connection, "SELECT 1").unwrap();
        assert_eq!(connection.queries.get(), 2);
    }

    #[test]
    fn invalidate_drops_the_entry() {
        let connection = CountingConnection {
            queries: Cell::new(0),
        };
        let cache = QueryCache::new(Duration::from_secs(60));

        cache.query(&connection, "SELECT 1").unwrap();
        cache.invalidate("SELECT 1");
        cache.query(&connection, "SELECT 1").unwrap();
        assert_eq!(connection.queries.get(), 2);
    }
}
