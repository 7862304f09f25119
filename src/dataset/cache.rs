use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, info};
use tokio::sync::RwLock;

use crate::core::GlimpseError;
use crate::table::Table;

use super::loader::load_csv_path;

struct CacheEntry {
    table: Arc<Table>,
    loaded_at: Instant,
}

/// Read-through cache for repo-path loads, keyed by the request path.
///
/// Entries expire `ttl` after load; expiry is checked on read. Uploaded
/// content never passes through here. Under contention an expired entry may
/// be parsed twice; both loads yield the same table.
pub struct DatasetCache {
    root: PathBuf,
    ttl: Duration,
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl DatasetCache {
    pub fn new(root: PathBuf, ttl: Duration) -> Self {
        Self {
            root,
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Fetch the table for a repo path, reusing a cached parse when fresh.
    pub async fn get_or_load(&self, path: &str) -> Result<Arc<Table>, GlimpseError> {
        {
            let entries = self.entries.read().await;
            if let Some(entry) = entries.get(path) {
                if entry.loaded_at.elapsed() < self.ttl {
                    debug!("cache hit for '{path}'");
                    return Ok(Arc::clone(&entry.table));
                }
            }
        }

        let table = Arc::new(load_csv_path(&self.root, path)?);
        info!("loaded '{path}' ({} rows)", table.num_rows());

        let mut entries = self.entries.write().await;
        entries.insert(
            path.to_string(),
            CacheEntry {
                table: Arc::clone(&table),
                loaded_at: Instant::now(),
            },
        );
        Ok(table)
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
