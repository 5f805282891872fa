use crate::error::AurError;

pub fn get_exit_code(error: &AurError) -> i32 {
    match error {
        AurError::ConfigError(_) => 2,

        AurError::Rpc(_)
        | AurError::MetadataFetch(_)
        | AurError::SnapshotLoad(_)
        | AurError::Http(_) => 20,

        AurError::Cancelled => 130,

        _ => 1,
    }
}
