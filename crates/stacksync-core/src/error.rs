//! Error taxonomy for the reconciliation core.
//!
//! Two layers: [`RegistryError`] is what the registry capability itself can
//! raise (transport failure, non-2xx protocol response) and is propagated
//! unwrapped; [`ReconcileError`] is the closed set of failures a
//! reconciliation run can end in, which callers can match on programmatically
//! instead of string-matching messages.

use thiserror::Error;

/// Failures raised by a [`StackRegistry`] implementation.
///
/// The core never retries or recovers from these; they abort the run as-is.
///
/// [`StackRegistry`]: crate::StackRegistry
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The request never produced a usable response (connection, TLS,
    /// serialization).
    #[error("registry request failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The registry answered with a non-success status.
    #[error("registry returned HTTP {status}: {body}")]
    Api { status: u16, body: String },
}

impl RegistryError {
    /// Creates a new `Transport` error from any underlying error.
    pub fn transport(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Box::new(source))
    }

    /// Creates a new `Api` error.
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// Errors that can end a reconciliation run.
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// A field the chosen action requires is absent from the intent.
    /// Detected before any network call; nothing has been mutated.
    #[error("'{prop}' missing!")]
    MissingProp { prop: &'static str },

    /// Delete targeted a stack the registry does not list.
    #[error("Unable to find stack: [endpointId={endpoint_id}, stackName={stack_name}]")]
    StackNotFound { endpoint_id: i64, stack_name: String },

    /// The registry returned a matching record without a usable identifier —
    /// a contract violation by the remote, not a user input problem.
    #[error("Unable to extract ID from stack: [endpointId={endpoint_id}, stackName={stack_name}]")]
    MalformedStack { endpoint_id: i64, stack_name: String },

    /// The registry call itself failed; propagated unwrapped.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl ReconcileError {
    /// Creates a new `MissingProp` error.
    pub fn missing_prop(prop: &'static str) -> Self {
        Self::MissingProp { prop }
    }

    /// Creates a new `StackNotFound` error.
    pub fn stack_not_found(endpoint_id: i64, stack_name: impl Into<String>) -> Self {
        Self::StackNotFound {
            endpoint_id,
            stack_name: stack_name.into(),
        }
    }

    /// Creates a new `MalformedStack` error.
    pub fn malformed_stack(endpoint_id: i64, stack_name: impl Into<String>) -> Self {
        Self::MalformedStack {
            endpoint_id,
            stack_name: stack_name.into(),
        }
    }

    /// The stable kind name reported to the invoking environment.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingProp { .. } => "MissingPropError",
            Self::StackNotFound { .. } => "StackNotFoundError",
            Self::MalformedStack { .. } => "ParseResponseError",
            Self::Registry(_) => "RegistryError",
        }
    }

    #[must_use]
    pub fn is_missing_prop(&self) -> bool {
        matches!(self, Self::MissingProp { .. })
    }

    #[must_use]
    pub fn is_stack_not_found(&self) -> bool {
        matches!(self, Self::StackNotFound { .. })
    }

    #[must_use]
    pub fn is_malformed_stack(&self) -> bool {
        matches!(self, Self::MalformedStack { .. })
    }
}
