use crate::error::{AurError, ErrorContext};

pub fn format_error_chain(error: &AurError) -> String {
    let context = ErrorContext::new(error);
    context.to_string()
}
