use shared_types::AppError;

/// Catch-and-log policy for view-layer requests.
///
/// A success yields the value for the caller to store; a failure is logged
/// and yields `None`, so whatever the caller already holds stays as it was.
pub fn settle<T>(what: &str, result: Result<T, AppError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(request = what, error = %err, "Request failed");
            None
        }
    }
}
