//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`BtSwitchError`] via `#[from]` or an explicit `into_domain`.

/// Top-level error shared by the domain and application layers.
#[derive(Debug, thiserror::Error)]
pub enum BtSwitchError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The external connectivity tool failed. The source is adapter-specific.
    #[error("connectivity error")]
    Connectivity(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl BtSwitchError {
    /// Render the error together with its source chain on a single line.
    ///
    /// Used when an error is embedded as text in a device status instead of
    /// being propagated.
    #[must_use]
    pub fn to_message(&self) -> String {
        let mut message = match self {
            Self::Validation(err) => err.to_string(),
            Self::Connectivity(err) => err.to_string(),
        };
        let mut source = match self {
            Self::Validation(err) => std::error::Error::source(err),
            Self::Connectivity(err) => err.source(),
        };
        while let Some(err) = source {
            message.push_str(": ");
            message.push_str(&err.to_string());
            source = err.source();
        }
        message
    }
}

/// Domain invariant violations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A device name is empty or whitespace only.
    #[error("device name must not be empty")]
    EmptyName,

    /// Two registry entries share the same name.
    #[error("duplicate device name {0:?}")]
    DuplicateName(String),

    /// A hardware address is not six hex octets separated by `:` or `-`.
    #[error("invalid hardware address {0:?}")]
    InvalidAddress(String),
}
