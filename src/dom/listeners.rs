//! Submit listener installation.
//!
//! Listeners are attached once per form and their closures are retained in
//! thread-local storage for the lifetime of the page.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{FormData, HtmlFormElement, SubmitEvent};

use super::element_by_id;
use super::page::BrowserPage;
use crate::config::ClientConfig;
use crate::controller::logout::logout;
use crate::controller::registry::ListenerRegistry;
use crate::controller::submit::{Submitter, build_payload, submit_form};
use crate::error::ClientError;
use crate::net::browser::BrowserTransport;
use crate::net::payload::FormPayload;
use crate::pages::dispatch::{Binding, FormBinding, bindings_for_path};

type SubmitHandler = Closure<dyn FnMut(SubmitEvent)>;

thread_local! {
    static REGISTRY: RefCell<ListenerRegistry> = RefCell::new(ListenerRegistry::default());
    static HANDLERS: RefCell<Vec<SubmitHandler>> = const { RefCell::new(Vec::new()) };
}

/// Attach the listeners the current page needs.
///
/// A binding whose form is missing is skipped with a warning; the rest are
/// still attached.
pub fn init(config: Rc<ClientConfig>) {
    let Some(path) = web_sys::window().and_then(|w| w.location().pathname().ok()) else {
        log::warn!("location is unavailable, no listeners attached");
        return;
    };
    let bindings = bindings_for_path(&path, &config);
    if bindings.is_empty() {
        log::debug!("no client-side behavior for {path}");
        return;
    }

    for binding in bindings {
        let result = match binding {
            Binding::Form(form) => attach_form(form, Rc::clone(&config)),
            Binding::Logout { form_id } => attach_logout(&form_id, Rc::clone(&config)),
        };
        if let Err(e) = result {
            log::warn!("listener not attached on {path}: {e}");
        }
    }
}

fn attach_form(binding: FormBinding, config: Rc<ClientConfig>) -> Result<(), ClientError> {
    let form: HtmlFormElement = element_by_id(&binding.form_id)?;
    let binding = Rc::new(binding);
    let target = form.clone();
    let form_id = binding.form_id.clone();

    attach_submit(&form, &form_id, move |event: SubmitEvent| {
        event.prevent_default();
        let payload = match read_payload(&target, &binding, &event) {
            Ok(payload) => payload,
            Err(e) => {
                log::error!("#{} not submitted: {e}", binding.form_id);
                return;
            }
        };
        let binding = Rc::clone(&binding);
        let config = Rc::clone(&config);
        wasm_bindgen_futures::spawn_local(async move {
            let page = BrowserPage::new(&config.elements);
            if let Err(e) = submit_form(&page, &BrowserTransport, &binding, payload, &config).await {
                log::error!("#{} submission failed: {e}", binding.form_id);
            }
        });
    })
}

fn attach_logout(form_id: &str, config: Rc<ClientConfig>) -> Result<(), ClientError> {
    let form: HtmlFormElement = element_by_id(form_id)?;
    attach_submit(&form, form_id, move |event: SubmitEvent| {
        event.prevent_default();
        let page = BrowserPage::new(&config.elements);
        logout(&page, BrowserTransport, &config, wasm_bindgen_futures::spawn_local);
    })
}

fn attach_submit<F>(form: &HtmlFormElement, form_id: &str, handler: F) -> Result<(), ClientError>
where
    F: FnMut(SubmitEvent) + 'static,
{
    if REGISTRY.with(|r| r.borrow().is_attached(form_id)) {
        log::debug!("#{form_id} already has a submit listener");
        return Ok(());
    }

    let callback = SubmitHandler::new(handler);
    form.add_event_listener_with_callback("submit", callback.as_ref().unchecked_ref())
        .map_err(|e| ClientError::Dom(format!("addEventListener on #{form_id}: {e:?}")))?;

    REGISTRY.with(|r| r.borrow_mut().claim(form_id));
    HANDLERS.with(|h| h.borrow_mut().push(callback));
    log::debug!("submit listener attached to #{form_id}");
    Ok(())
}

/// Serialize the form's current fields and, for multi-submit forms, the
/// control that fired the event.
fn read_payload(form: &HtmlFormElement, binding: &FormBinding, event: &SubmitEvent) -> Result<FormPayload, ClientError> {
    let data = FormData::new_with_form(form).map_err(|e| ClientError::Dom(format!("FormData: {e:?}")))?;
    let entries = js_sys::try_iter(data.as_ref())
        .map_err(|e| ClientError::Dom(format!("FormData entries: {e:?}")))?
        .ok_or_else(|| ClientError::Dom("FormData is not iterable".into()))?;

    let mut fields = FormPayload::new();
    for entry in entries {
        let entry = entry.map_err(|e| ClientError::Dom(format!("FormData entry: {e:?}")))?;
        let pair = js_sys::Array::from(&entry);
        // File inputs yield non-string values; the bank forms have none.
        if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            fields.append(name, value);
        }
    }

    let submitter = event.submitter().map(|el| Submitter {
        name: el.get_attribute("name"),
        value: el.get_attribute("value"),
    });
    Ok(build_payload(binding, fields, submitter))
}
