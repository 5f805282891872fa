// Copyright 2026 aurum developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use attohttpc::Session;
use flate2::read::GzDecoder;
use log::{debug, warn};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cancellation::CancellationToken;
use crate::error::{AurError, Result};
use crate::user_agent;

const DUMP_PATH: &str = "packages-meta-ext-v1.json.gz";

/// Supplies the raw package dataset the query engine caches.
pub trait MetadataSource: Send + Sync {
    fn load(&self, token: &CancellationToken) -> Result<Value>;
}

/// Fetches the full AUR metadata dump over HTTP.
pub struct HttpMetadataSource {
    session: Session,
    base_url: String,
}

impl HttpMetadataSource {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let mut session = Session::new();
        session.header("User-Agent", user_agent::metadata_client());
        session.timeout(timeout);
        session.proxy_settings(attohttpc::ProxySettings::from_env());

        Self {
            session,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn dump_url(&self) -> String {
        format!("{}/{DUMP_PATH}", self.base_url)
    }
}

impl MetadataSource for HttpMetadataSource {
    fn load(&self, token: &CancellationToken) -> Result<Value> {
        if token.is_cancelled() {
            return Err(AurError::Cancelled);
        }

        let url = self.dump_url();
        debug!("fetching package metadata dump from {url}");

        let response = self.session.get(&url).send()?;
        if !response.is_success() {
            let status = response.status();
            return Err(AurError::MetadataFetch(format!(
                "HTTP error ({}) fetching the package metadata dump",
                status.as_u16()
            )));
        }

        let (_, _, reader) = response.split();
        let value = serde_json::from_reader(GzDecoder::new(reader)).map_err(|e| {
            AurError::MetadataFetch(format!("unable to decode the package metadata dump: {e}"))
        })?;

        Ok(value)
    }
}

/// On-disk copy of the package snapshot, replaced atomically on save.
pub struct SnapshotStore {
    path: PathBuf,
    max_age: Duration,
}

impl SnapshotStore {
    pub fn new(path: PathBuf, max_age: Duration) -> Self {
        Self { path, max_age }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the stored snapshot exists and is younger than `max_age`.
    pub fn is_fresh(&self) -> bool {
        let Ok(metadata) = fs::metadata(&self.path) else {
            return false;
        };
        let Ok(modified) = metadata.modified() else {
            return false;
        };

        match modified.elapsed() {
            Ok(elapsed) => elapsed <= self.max_age,
            Err(_) => false, // If time went backwards, consider stale
        }
    }

    pub fn load(&self) -> Result<Value> {
        if !self.path.exists() {
            return Err(AurError::SnapshotNotFound);
        }

        let contents = fs::read_to_string(&self.path)
            .map_err(|e| AurError::ConfigError(format!("Failed to read snapshot file: {e}")))?;

        let value = serde_json::from_str(&contents).map_err(|_e| AurError::InvalidMetadata)?;
        Ok(value)
    }

    pub fn save(&self, value: &Value) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AurError::ConfigError(format!("Failed to create snapshot directory: {e}"))
            })?;
        }

        let json = serde_json::to_string(value).map_err(|_e| AurError::InvalidMetadata)?;

        // Write to a temporary file first for atomic replacement
        let temp_path = self.path.with_extension("tmp");

        // Clean up any leftover temp file from previous failed attempts
        if temp_path.exists() {
            fs::remove_file(&temp_path).map_err(|e| {
                AurError::ConfigError(format!("Failed to remove old temp file: {e}"))
            })?;
        }

        fs::write(&temp_path, json)
            .map_err(|e| AurError::ConfigError(format!("Failed to write snapshot file: {e}")))?;

        fs::rename(&temp_path, &self.path)
            .map_err(|e| AurError::ConfigError(format!("Failed to rename snapshot file: {e}")))?;

        Ok(())
    }
}

/// Disk-first source: serves the stored snapshot while it is fresh and
/// refetches from the AUR otherwise, saving the result for next time.
pub struct CachingSource {
    remote: HttpMetadataSource,
    store: SnapshotStore,
}

impl CachingSource {
    pub fn new(remote: HttpMetadataSource, store: SnapshotStore) -> Self {
        Self { remote, store }
    }
}

impl MetadataSource for CachingSource {
    fn load(&self, token: &CancellationToken) -> Result<Value> {
        if self.store.is_fresh() {
            match self.store.load() {
                Ok(value) => return Ok(value),
                Err(e) => {
                    warn!("Failed to load package snapshot from disk: {e}. Falling back to the AUR.");
                }
            }
        }

        let value = self.remote.load(token)?;

        if let Err(e) = self.store.save(&value) {
            warn!("Failed to save package snapshot: {e}");
        }

        Ok(value)
    }
}
