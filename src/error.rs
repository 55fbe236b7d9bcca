use thiserror::Error;

/// Errors reported by the propagation and maneuver-planning APIs.
///
/// All failures are detected up front, before any integration work starts;
/// a successful call always returns a complete result.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied argument was rejected: unknown integration method,
    /// reversed time span, non-positive step size, or a bi-elliptic
    /// intermediate radius inside the target orbit.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;
