mod query;
mod source;


pub use query::AurQuery;
pub use source::{CachingSource, HttpMetadataSource, MetadataSource, SnapshotStore};

use log::debug;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::cancellation::CancellationToken;
use crate::config::AurConfig;
use crate::error::{AurError, Result};
use crate::models::package::Package;

/// Query engine over the cached AUR metadata snapshot.
///
/// The snapshot is loaded lazily on the first query that needs it and shared
/// by every query for the rest of the process lifetime. Queries themselves
/// only read the shared snapshot and may run in parallel.
pub struct Client {
    source: Box<dyn MetadataSource>,
    snapshot: Mutex<Option<Arc<Value>>>,
}

impl Client {
    pub fn new(source: Box<dyn MetadataSource>) -> Self {
        Self {
            source,
            snapshot: Mutex::new(None),
        }
    }

    /// Standard production wiring: disk snapshot when fresh, AUR dump otherwise.
    pub fn from_config(config: &AurConfig) -> Self {
        let source = CachingSource::new(
            HttpMetadataSource::new(&config.aur_url, config.timeout()),
            SnapshotStore::new(config.snapshot_path(), config.snapshot_max_age()),
        );
        Self::new(Box::new(source))
    }

    /// Returns the packages matching `query`, deduplicated by name in
    /// first-seen snapshot order.
    pub fn get(&self, token: &CancellationToken, query: &AurQuery) -> Result<Vec<Package>> {
        if query.needles.is_empty() {
            return Ok(Vec::new());
        }

        let snapshot = self.snapshot(token)?;
        let records = snapshot.as_array().ok_or(AurError::InvalidMetadata)?;

        let matcher = query.matcher();
        let mut seen = HashSet::new();
        let mut found = Vec::with_capacity(query.needles.len());

        for record in records {
            if token.is_cancelled() {
                return Err(AurError::Cancelled);
            }

            if !matcher.matches(record) {
                continue;
            }

            let name = record
                .get("Name")
                .and_then(Value::as_str)
                .ok_or(AurError::InvalidMetadata)?;
            if !seen.insert(name.to_string()) {
                continue;
            }

            let package = serde_json::from_value(record.clone()).map_err(|e| {
                AurError::InvalidRecord(format!("unable to convert package '{name}': {e}"))
            })?;
            found.push(package);
        }

        debug!("package query matched {} packages", found.len());
        Ok(found)
    }

    /// Returns the cached snapshot, loading it on the first call.
    ///
    /// The lock is held across the load, so concurrent first-time queries
    /// trigger exactly one load. A failed load stores nothing and the next
    /// call retries.
    fn snapshot(&self, token: &CancellationToken) -> Result<Arc<Value>> {
        // A poisoned lock only means another query panicked mid-load; the
        // slot itself is still usable.
        let mut slot = match self.snapshot.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if let Some(snapshot) = slot.as_ref() {
            return Ok(Arc::clone(snapshot));
        }

        let value = self.source.load(token).map_err(|e| match e {
            AurError::Cancelled => AurError::Cancelled,
            other => AurError::SnapshotLoad(other.to_string()),
        })?;

        let snapshot = Arc::new(value);
        *slot = Some(Arc::clone(&snapshot));
        Ok(snapshot)
    }
}
