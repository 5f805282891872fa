mod context;
mod exit_codes;
mod format;
#[cfg(test)]
mod tests;

pub use context::ErrorContext;
pub use exit_codes::get_exit_code;
pub use format::format_error_chain;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AurError {
    #[error("RPC request failed: {0}")]
    Rpc(String),

    #[error("Failed to fetch metadata: {0}")]
    MetadataFetch(String),

    #[error("Unable to load package snapshot: {0}")]
    SnapshotLoad(String),

    #[error("Invalid metadata format")]
    InvalidMetadata,

    #[error("Malformed package record: {0}")]
    InvalidRecord(String),

    #[error("Configuration file error: {0}")]
    ConfigError(String),

    #[error("Package snapshot not found")]
    SnapshotNotFound,

    #[error("Operation cancelled")]
    Cancelled,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Http(#[from] attohttpc::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AurError>;
