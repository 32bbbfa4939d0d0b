//! Watch errors.

/// Failures registering or releasing a watched path.
pub mod watch_error;
