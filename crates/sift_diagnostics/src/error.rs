//! Errors raised while setting up diagnostic routing.

/// A misconfigured set of consumer registrations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RoutingError {
    /// No consumers were registered, so no diagnostic could ever be emitted.
    #[error("no diagnostic consumers registered")]
    NoConsumers,

    /// Two consumers were registered for the same file.
    #[error("multiple diagnostic consumers registered for file '{0}'")]
    DuplicateFile(String),
}
