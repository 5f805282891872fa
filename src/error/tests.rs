use crate::error::{AurError, format_error_chain, get_exit_code};

#[test]
fn test_exit_codes() {
    assert_eq!(get_exit_code(&AurError::ConfigError("bad".to_string())), 2);
    assert_eq!(get_exit_code(&AurError::Rpc("down".to_string())), 20);
    assert_eq!(
        get_exit_code(&AurError::MetadataFetch("down".to_string())),
        20
    );
    assert_eq!(
        get_exit_code(&AurError::SnapshotLoad("down".to_string())),
        20
    );
    assert_eq!(get_exit_code(&AurError::Cancelled), 130);
    assert_eq!(get_exit_code(&AurError::InvalidMetadata), 1);
    assert_eq!(get_exit_code(&AurError::SnapshotNotFound), 1);
}

#[test]
fn test_error_display() {
    let error = AurError::Rpc("service unavailable".to_string());
    assert_eq!(error.to_string(), "RPC request failed: service unavailable");

    let error = AurError::SnapshotLoad("connection refused".to_string());
    assert_eq!(
        error.to_string(),
        "Unable to load package snapshot: connection refused"
    );
}

#[test]
fn test_format_chain_includes_suggestion() {
    let error = AurError::SnapshotNotFound;
    let formatted = format_error_chain(&error);

    assert!(formatted.starts_with("Error: Package snapshot not found"));
    assert!(formatted.contains("Suggestion: Run 'aurum cache refresh'"));
}

#[test]
fn test_format_chain_includes_details() {
    let error = AurError::Rpc("bad gateway".to_string());
    let formatted = format_error_chain(&error);

    assert!(formatted.contains("Details: RPC failure: bad gateway"));
}
