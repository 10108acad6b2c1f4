use thiserror::Error;

/// Result alias used across window operations.
pub type WindowResult<T> = Result<T, WindowError>;

/// Errors surfaced by window state operations.
///
/// Nothing here is fatal to the host: mutating calls log and degrade,
/// queries hand the error to the caller.
#[derive(Debug, Error)]
pub enum WindowError {
    /// No window has been resolved yet.
    #[error("no window handle has been acquired")]
    NotInitialized,

    /// The handle refers to a window that no longer exists.
    #[error("window handle is no longer valid")]
    InvalidHandle,

    /// A style write went through but the re-read did not show it.
    #[error("window style change was not applied: {0}")]
    StyleNotApplied(&'static str),

    /// A lookup (shell worker, enumeration target) found nothing.
    #[error("target window not found: {0}")]
    TargetNotFound(&'static str),

    /// An OS call failed outright.
    #[error("{context} failed with OS error {code}")]
    Os { code: u32, context: &'static str },

    /// The running platform has no window system support.
    #[error("window operations are not supported on this platform")]
    Unsupported,
}

impl WindowError {
    /// Whether this error means the underlying window died, as opposed
    /// to a call failing for some other reason.
    pub fn is_dead_handle(&self) -> bool {
        matches!(self, Self::InvalidHandle)
    }
}
