//! Per-flow response handling.
//!
//! Every flow treats a non-OK reply the same way: a red `invalid_input`
//! status and nothing else. What an OK reply does differs per flow.

#[cfg(test)]
#[path = "handlers_test.rs"]
mod handlers_test;

use super::page_host::PageHost;
use crate::config::{ClientConfig, Redirects};
use crate::error::ClientError;
use crate::net::transport::Reply;
use crate::pages::dispatch::Flow;
use crate::state::status::{SUCCESS, Status, balance_text};
use crate::util::uri::{decode_uri, query_param};

/// Route a delivered reply to the handler for `flow`.
///
/// # Errors
///
/// Only the transaction flow can fail, when its body cannot be read.
pub async fn handle_reply<P, R>(flow: Flow, page: &P, reply: R, config: &ClientConfig) -> Result<(), ClientError>
where
    P: PageHost,
    R: Reply,
{
    match flow {
        Flow::Login => {
            handle_login(page, &reply, &config.redirects);
            Ok(())
        }
        Flow::Signup => {
            handle_signup(page, &reply, &config.redirects);
            Ok(())
        }
        Flow::Transaction => handle_transaction(page, reply).await,
    }
}

/// OK → navigate to the login redirect target; otherwise `invalid_input`.
pub fn handle_login<P: PageHost, R: Reply>(page: &P, reply: &R, redirects: &Redirects) {
    if !reply.ok() {
        page.show_status(&Status::invalid_input());
        return;
    }
    let target = login_redirect_target(&page.current_href(), redirects);
    log::info!("login accepted, redirecting to {target}");
    page.navigate_replace(&target);
}

/// OK → navigate to the account page; otherwise `invalid_input`.
pub fn handle_signup<P: PageHost, R: Reply>(page: &P, reply: &R, redirects: &Redirects) {
    if !reply.ok() {
        page.show_status(&Status::invalid_input());
        return;
    }
    log::info!("signup accepted, redirecting to {}", redirects.account);
    page.navigate_replace(&redirects.account);
}

/// OK → render the returned balance and a green `success`; otherwise `invalid_input`.
///
/// # Errors
///
/// Returns [`ClientError::Transport`] if the balance body cannot be read.
/// The page is left untouched in that case.
pub async fn handle_transaction<P: PageHost, R: Reply>(page: &P, reply: R) -> Result<(), ClientError> {
    if !reply.ok() {
        page.show_status(&Status::invalid_input());
        return Ok(());
    }
    let balance = reply.text().await?;
    page.set_balance(&balance_text(&balance));
    page.show_status(&Status::success(SUCCESS));
    Ok(())
}

/// Where a successful login goes: the decoded `return_to` parameter of
/// `href` when present and well-formed, the account page otherwise.
pub fn login_redirect_target(href: &str, redirects: &Redirects) -> String {
    match return_to(href, &redirects.return_to_param) {
        Ok(Some(target)) => target,
        Ok(None) => redirects.account.clone(),
        Err(e) => {
            log::warn!("ignoring {}: {e}", redirects.return_to_param);
            redirects.account.clone()
        }
    }
}

/// The `param` query value of `href`, passed through `decodeURI` rules.
///
/// # Errors
///
/// Returns [`ClientError::MalformedUri`] if the value cannot be decoded.
pub fn return_to(href: &str, param: &str) -> Result<Option<String>, ClientError> {
    query_param(href, param).map(|raw| decode_uri(&raw)).transpose()
}
