//! Error type shared by the page controller.
//!
//! ERROR HANDLING
//! ==============
//! A reply that arrives with a non-OK status is not an error: it is rendered
//! as a failure status by the flow handler. `ClientError` covers what could
//! not be delivered or decoded, and is logged at the listener boundary
//! instead of being thrown back into JavaScript.

/// Errors produced while wiring or running a page flow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The request could not be completed, or its body could not be read.
    #[error("request to {resource} failed: {message}")]
    Transport { resource: String, message: String },

    /// An element the page contract requires is absent.
    #[error("missing element #{id}")]
    MissingElement { id: String },

    /// A browser API call failed or returned an unexpected type.
    #[error("dom operation failed: {0}")]
    Dom(String),

    /// A redirect value is not a valid percent-encoded URI.
    #[error("malformed URI {input:?}: {reason}")]
    MalformedUri { input: String, reason: &'static str },

    /// Embedded client configuration could not be parsed.
    #[error("config parse failed: {0}")]
    Config(String),
}

impl ClientError {
    pub fn transport(resource: &str, message: impl ToString) -> Self {
        Self::Transport { resource: resource.to_owned(), message: message.to_string() }
    }
}
