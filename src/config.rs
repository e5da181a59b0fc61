//! Client configuration: endpoint paths, element ids and redirect targets.
//!
//! Defaults match the banking backend's routes and templates. A page may
//! override any subset by embedding JSON in an element with id
//! [`CONFIG_ELEMENT_ID`]; see [`ClientConfig::from_json`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::ClientError;

/// Id of the optional `<script type="application/json">` element holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "bank-client-config";

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// POST targets for each flow.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub login: String,
    pub signup: String,
    pub transaction: String,
    pub logout: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            login: "/login".into(),
            signup: "/signup".into(),
            transaction: "/transaction".into(),
            logout: "/logout".into(),
        }
    }
}

/// Element ids the server templates provide.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub login_form: String,
    pub signup_form: String,
    pub transaction_form: String,
    pub logout_form: String,
    pub status: String,
    pub current_balance: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            login_form: "login-form".into(),
            signup_form: "signup-form".into(),
            transaction_form: "transaction-form".into(),
            logout_form: "logout-form".into(),
            status: "status".into(),
            current_balance: "current-balance".into(),
        }
    }
}

/// Navigation targets after a flow completes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Redirects {
    /// Landing page after login or signup.
    pub account: String,
    /// Landing page after logout.
    pub home: String,
    /// Query parameter on the login page that overrides `account`.
    pub return_to_param: String,
}

impl Default for Redirects {
    fn default() -> Self {
        Self { account: "/account".into(), home: "/".into(), return_to_param: "return_to".into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub endpoints: Endpoints,
    pub elements: ElementIds,
    pub redirects: Redirects,
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            elements: ElementIds::default(),
            redirects: Redirects::default(),
            log_level: DEFAULT_LOG_LEVEL.into(),
        }
    }
}

impl ClientConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if the JSON is malformed or the log
    /// level is not one of `error`, `warn`, `info`, `debug`, `trace`.
    pub fn from_json(raw: &str) -> Result<Self, ClientError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| ClientError::Config(e.to_string()))?;
        config.level()?;
        Ok(config)
    }

    /// Parse the text of the embedded config element, if there is one.
    ///
    /// A missing or blank element yields the defaults.
    ///
    /// # Errors
    ///
    /// Same as [`ClientConfig::from_json`].
    pub fn from_embedded(raw: Option<&str>) -> Result<Self, ClientError> {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => Self::from_json(raw),
            None => Ok(Self::default()),
        }
    }

    /// Configured log level.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] for an unknown level name.
    pub fn level(&self) -> Result<log::Level, ClientError> {
        parse_level(&self.log_level)
    }

    /// Read overrides from the current document, if any.
    ///
    /// # Errors
    ///
    /// Same as [`ClientConfig::from_json`].
    #[cfg(feature = "hydrate")]
    pub fn from_document() -> Result<Self, ClientError> {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        Self::from_embedded(raw.as_deref())
    }
}

fn parse_level(raw: &str) -> Result<log::Level, ClientError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "error" => Ok(log::Level::Error),
        "warn" => Ok(log::Level::Warn),
        "info" => Ok(log::Level::Info),
        "debug" => Ok(log::Level::Debug),
        "trace" => Ok(log::Level::Trace),
        other => Err(ClientError::Config(format!("unknown log level: {other}"))),
    }
}
