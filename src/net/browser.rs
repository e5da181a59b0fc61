//! `fetch`-backed transport via `gloo-net`. Requires a browser environment.

use gloo_net::http::{Request, Response};

use super::payload::FormPayload;
use super::transport::{Reply, Transport};
use crate::error::ClientError;

/// Sends form payloads as multipart `FormData`, the same encoding a native
/// form submission with `fetch` would use.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

pub struct BrowserReply(Response);

impl Reply for BrowserReply {
    fn status(&self) -> u16 {
        self.0.status()
    }

    fn ok(&self) -> bool {
        self.0.ok()
    }

    async fn text(self) -> Result<String, ClientError> {
        let url = self.0.url();
        self.0.text().await.map_err(|e| ClientError::transport(&url, e))
    }
}

impl Transport for BrowserTransport {
    type Reply = BrowserReply;

    async fn post(&self, resource: &str, payload: Option<&FormPayload>) -> Result<BrowserReply, ClientError> {
        let builder = Request::post(resource);
        let sent = match payload {
            Some(payload) => {
                let request = builder
                    .body(to_form_data(payload)?)
                    .map_err(|e| ClientError::transport(resource, e))?;
                request.send().await
            }
            None => builder.send().await,
        };
        sent.map(BrowserReply)
            .map_err(|e| ClientError::transport(resource, e))
    }
}

fn to_form_data(payload: &FormPayload) -> Result<web_sys::FormData, ClientError> {
    let data = web_sys::FormData::new().map_err(|e| ClientError::Dom(format!("FormData::new: {e:?}")))?;
    for (name, value) in payload.fields() {
        data.append_with_str(name, value)
            .map_err(|e| ClientError::Dom(format!("FormData::append({name}): {e:?}")))?;
    }
    Ok(data)
}
