//! Static path → wiring lookup run once at page load.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use crate::config::ClientConfig;

/// Pages that carry client-side behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// `/`, which serves the login form.
    Index,
    Login,
    Signup,
    Account,
}

/// Which response handler a submitted form feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Login,
    Signup,
    Transaction,
}

/// A form whose submission is intercepted and posted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormBinding {
    pub form_id: String,
    pub resource: String,
    pub flow: Flow,
    /// The form has several submit controls and the clicked one must be
    /// added to the payload explicitly.
    pub multi_submit: bool,
}

/// One listener to install on the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    Form(FormBinding),
    Logout { form_id: String },
}

impl Page {
    /// Resolve a `location.pathname`. Unknown paths have no wiring.
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Self::Index),
            "/login" => Some(Self::Login),
            "/signup" => Some(Self::Signup),
            "/account" => Some(Self::Account),
            _ => None,
        }
    }

    pub fn bindings(self, config: &ClientConfig) -> Vec<Binding> {
        let ids = &config.elements;
        let endpoints = &config.endpoints;
        match self {
            Self::Index | Self::Login => vec![Binding::Form(FormBinding {
                form_id: ids.login_form.clone(),
                resource: endpoints.login.clone(),
                flow: Flow::Login,
                multi_submit: false,
            })],
            Self::Signup => vec![Binding::Form(FormBinding {
                form_id: ids.signup_form.clone(),
                resource: endpoints.signup.clone(),
                flow: Flow::Signup,
                multi_submit: false,
            })],
            Self::Account => vec![
                Binding::Form(FormBinding {
                    form_id: ids.transaction_form.clone(),
                    resource: endpoints.transaction.clone(),
                    flow: Flow::Transaction,
                    multi_submit: true,
                }),
                Binding::Logout { form_id: ids.logout_form.clone() },
            ],
        }
    }
}

/// Bindings for `path`, empty when the page has no client-side behavior.
pub fn bindings_for_path(path: &str, config: &ClientConfig) -> Vec<Binding> {
    Page::from_path(path).map(|page| page.bindings(config)).unwrap_or_default()
}
