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

use crate::error::AurError;
use std::fmt;

pub struct ErrorContext<'a> {
    pub error: &'a AurError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl<'a> ErrorContext<'a> {
    pub fn new(error: &'a AurError) -> Self {
        let (suggestion, details) = match error {
            AurError::Rpc(msg) => {
                let suggestion = Some(
                    "Check your internet connection and the AUR base URL (--url), then try \
                     again."
                        .to_string(),
                );
                let details = Some(format!("RPC failure: {msg}"));
                (suggestion, details)
            }
            AurError::MetadataFetch(msg) => {
                let suggestion = Some(
                    "Check your internet connection. Run 'aurum cache refresh' to retry \
                     fetching the package snapshot."
                        .to_string(),
                );
                let details = Some(format!("Metadata fetch failed: {msg}"));
                (suggestion, details)
            }
            AurError::SnapshotLoad(msg) => {
                let suggestion = Some(
                    "Run 'aurum cache refresh' to rebuild the local package snapshot.".to_string(),
                );
                let details = Some(msg.clone());
                (suggestion, details)
            }
            AurError::SnapshotNotFound => {
                let suggestion = Some(
                    "Run 'aurum cache refresh' to download the AUR package snapshot.".to_string(),
                );
                let details = Some("No package snapshot found on disk.".to_string());
                (suggestion, details)
            }
            AurError::InvalidMetadata => {
                let suggestion = Some(
                    "The local package snapshot is corrupted. Run 'aurum cache clear' followed \
                     by 'aurum cache refresh'."
                        .to_string(),
                );
                let details = None;
                (suggestion, details)
            }
            AurError::Http(http_err) => {
                let error_string = http_err.to_string();
                let suggestion = if error_string.contains("timeout")
                    || error_string.contains("Timeout")
                {
                    Some(
                        "The request timed out. Raise [network] timeout_secs in config.toml if \
                         this keeps happening."
                            .to_string(),
                    )
                } else if error_string.contains("429") {
                    Some(
                        "AUR rate limit exceeded. Please wait a few minutes and try again."
                            .to_string(),
                    )
                } else {
                    Some("Check your internet connection and try again.".to_string())
                };
                let details = Some(format!("HTTP error: {http_err}"));
                (suggestion, details)
            }
            AurError::Io(io_err) => {
                let suggestion = match io_err.kind() {
                    std::io::ErrorKind::PermissionDenied => {
                        Some("Check the permissions of your aurum home directory.".to_string())
                    }
                    std::io::ErrorKind::NotFound => Some(
                        "Ensure the file or directory exists and the path is correct.".to_string(),
                    ),
                    _ => None,
                };
                let details = Some(format!("I/O error: {io_err}"));
                (suggestion, details)
            }
            _ => (None, None),
        };

        ErrorContext {
            error,
            suggestion,
            details,
        }
    }
}

impl<'a> fmt::Display for ErrorContext<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\n\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}
