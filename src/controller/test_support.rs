//! In-memory `PageHost` and `Transport` doubles for flow tests.

use std::cell::RefCell;
use std::rc::Rc;

use super::page_host::PageHost;
use crate::error::ClientError;
use crate::net::payload::FormPayload;
use crate::net::transport::{Reply, Transport};
use crate::state::status::Status;

#[derive(Debug, Default)]
pub struct FakePage {
    pub href: String,
    pub statuses: RefCell<Vec<Status>>,
    pub balance: RefCell<Option<String>>,
    pub resets: RefCell<Vec<String>>,
    pub navigations: RefCell<Vec<String>>,
}

impl FakePage {
    pub fn at(href: &str) -> Self {
        Self { href: href.to_owned(), ..Self::default() }
    }

    pub fn last_status(&self) -> Option<Status> {
        self.statuses.borrow().last().cloned()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }

    pub fn resets(&self) -> Vec<String> {
        self.resets.borrow().clone()
    }
}

impl PageHost for FakePage {
    fn show_status(&self, status: &Status) {
        self.statuses.borrow_mut().push(status.clone());
    }

    fn set_balance(&self, text: &str) {
        *self.balance.borrow_mut() = Some(text.to_owned());
    }

    fn reset_form(&self, form_id: &str) {
        self.resets.borrow_mut().push(form_id.to_owned());
    }

    fn navigate_replace(&self, target: &str) {
        self.navigations.borrow_mut().push(target.to_owned());
    }

    fn current_href(&self) -> String {
        self.href.clone()
    }
}

#[derive(Debug, Clone)]
pub struct FakeReply {
    pub status: u16,
    pub body: Result<String, ClientError>,
}

impl FakeReply {
    pub fn with_status(status: u16) -> Self {
        Self { status, body: Ok(String::new()) }
    }

    pub fn ok_with_body(body: &str) -> Self {
        Self { status: 200, body: Ok(body.to_owned()) }
    }

    pub fn unreadable() -> Self {
        Self { status: 200, body: Err(ClientError::transport("/transaction", "body stream aborted")) }
    }
}

impl Reply for FakeReply {
    fn status(&self) -> u16 {
        self.status
    }

    async fn text(self) -> Result<String, ClientError> {
        self.body
    }
}

/// Records every POST and answers with a fixed outcome.
#[derive(Debug, Clone)]
pub struct FakeTransport {
    outcome: Result<FakeReply, ClientError>,
    calls: Rc<RefCell<Vec<(String, Option<FormPayload>)>>>,
}

impl FakeTransport {
    pub fn replying(reply: FakeReply) -> Self {
        Self { outcome: Ok(reply), calls: Rc::default() }
    }

    pub fn unreachable() -> Self {
        Self { outcome: Err(ClientError::transport("", "network unreachable")), calls: Rc::default() }
    }

    pub fn calls(&self) -> Vec<(String, Option<FormPayload>)> {
        self.calls.borrow().clone()
    }
}

impl Transport for FakeTransport {
    type Reply = FakeReply;

    async fn post(&self, resource: &str, payload: Option<&FormPayload>) -> Result<FakeReply, ClientError> {
        self.calls.borrow_mut().push((resource.to_owned(), payload.cloned()));
        self.outcome.clone().map_err(|e| match e {
            ClientError::Transport { message, .. } => ClientError::transport(resource, message),
            other => other,
        })
    }
}
