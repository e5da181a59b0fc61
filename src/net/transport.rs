//! The seam between page flows and the network.
//!
//! A `Transport` either delivers a reply (any HTTP status) or fails at the
//! transport level. Callers branch on `Reply::ok` for application failures
//! and on `Err` for undeliverable requests.

#![allow(async_fn_in_trait)]

use super::payload::FormPayload;
use crate::error::ClientError;

/// A delivered HTTP reply whose body has not been read yet.
pub trait Reply {
    fn status(&self) -> u16;

    /// `true` for a 2xx status.
    fn ok(&self) -> bool {
        (200..300).contains(&self.status())
    }

    /// Consume the reply and read its body as text.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the body stream fails.
    async fn text(self) -> Result<String, ClientError>;
}

/// Issues POST requests on behalf of the page.
pub trait Transport {
    type Reply: Reply;

    /// POST `payload` (or no body) to `resource`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] when no reply could be obtained.
    async fn post(&self, resource: &str, payload: Option<&FormPayload>) -> Result<Self::Reply, ClientError>;
}
