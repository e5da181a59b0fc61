//! Fire-and-forget logout.

#[cfg(test)]
#[path = "logout_test.rs"]
mod logout_test;

use std::future::Future;
use std::pin::Pin;

use super::page_host::PageHost;
use crate::config::ClientConfig;
use crate::net::transport::{Reply, Transport};

/// The detached logout request, handed to the caller's spawner.
pub type LogoutTask = Pin<Box<dyn Future<Output = ()>>>;

/// Start the logout POST via `spawn`, then leave for the home page.
///
/// Navigation does not wait for the request; its outcome is only logged.
pub fn logout<P, T, S>(page: &P, transport: T, config: &ClientConfig, spawn: S)
where
    P: PageHost,
    T: Transport + 'static,
    S: FnOnce(LogoutTask),
{
    let resource = config.endpoints.logout.clone();
    spawn(Box::pin(async move {
        match transport.post(&resource, None).await {
            Ok(reply) => log::debug!("POST {resource} returned {}", reply.status()),
            Err(e) => log::warn!("{e}"),
        }
    }));
    page.navigate_replace(&config.redirects.home);
}
