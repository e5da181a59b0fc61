//! Generic form submission: one POST per submit event.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use super::handlers::handle_reply;
use super::page_host::PageHost;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::net::payload::FormPayload;
use crate::net::transport::Transport;
use crate::pages::dispatch::FormBinding;

/// The submit control that triggered a submit event, as read from its attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submitter {
    pub name: Option<String>,
    pub value: Option<String>,
}

/// Final payload for `binding`: the form's fields, plus the submitter's
/// name/value when the form has several submit controls.
///
/// Building a payload from the form element skips the submitter, so
/// multi-submit forms need it appended by hand.
pub fn build_payload(binding: &FormBinding, mut fields: FormPayload, submitter: Option<Submitter>) -> FormPayload {
    if !binding.multi_submit {
        return fields;
    }
    let Some(Submitter { name, value }) = submitter else {
        log::warn!("#{} submitted without a submit control", binding.form_id);
        return fields;
    };
    if !fields.append_submitter(name, value) {
        log::warn!("#{} submit control is missing a name or value", binding.form_id);
    }
    fields
}

/// POST `payload` for `binding` and render the reply.
///
/// Any delivered reply resets the form before its handler runs. A transport
/// failure returns early: no reset and no status, so the user's input stays
/// in place.
///
/// # Errors
///
/// Returns [`ClientError::Transport`] if the request could not be completed
/// or the reply body could not be read.
pub async fn submit_form<P, T>(
    page: &P,
    transport: &T,
    binding: &FormBinding,
    payload: FormPayload,
    config: &ClientConfig,
) -> Result<(), ClientError>
where
    P: PageHost,
    T: Transport,
{
    log::debug!("POST {} from #{} ({} fields)", binding.resource, binding.form_id, payload.len());
    let reply = transport.post(&binding.resource, Some(&payload)).await?;
    page.reset_form(&binding.form_id);
    handle_reply(binding.flow, page, reply, config).await
}
