//! Error types for interface enumeration.

/// Errors produced while listing the host's network interfaces.
///
/// `AddressResolver` never surfaces these; they exist so enumerators can
/// report what went wrong before the resolver falls back to loopback.
#[derive(Debug, thiserror::Error)]
pub enum EnumerationError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("platform error: {0}")]
    Platform(String),
}
