/// Error type for binary setup failures.
pub mod custom_error;
