//! Page flows: what happens between a submit event and the page update.
//!
//! DESIGN
//! ======
//! Every flow is written against [`page_host::PageHost`] and
//! [`crate::net::transport::Transport`] so the decisions run (and are tested)
//! without a browser. `crate::dom` supplies the browser implementations and
//! the event listeners that drive these functions.

pub mod handlers;
pub mod logout;
pub mod page_host;
pub mod registry;
pub mod submit;

#[cfg(test)]
pub(crate) mod test_support;
