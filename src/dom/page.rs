use web_sys::{HtmlElement, HtmlFormElement};

use super::element_by_id;
use crate::config::ElementIds;
use crate::controller::page_host::PageHost;
use crate::state::status::Status;

/// The live document, addressed through the configured element ids.
#[derive(Debug, Clone)]
pub struct BrowserPage {
    elements: ElementIds,
}

impl BrowserPage {
    pub fn new(elements: &ElementIds) -> Self {
        Self { elements: elements.clone() }
    }
}

impl PageHost for BrowserPage {
    fn show_status(&self, status: &Status) {
        match element_by_id::<HtmlElement>(&self.elements.status) {
            Ok(el) => {
                let _ = el.style().set_property("color", status.color());
                el.set_inner_text(&status.message);
            }
            Err(e) => log::warn!("cannot show status {:?}: {e}", status.message),
        }
    }

    fn set_balance(&self, text: &str) {
        match element_by_id::<HtmlElement>(&self.elements.current_balance) {
            Ok(el) => el.set_inner_text(text),
            Err(e) => log::warn!("cannot show balance: {e}"),
        }
    }

    fn reset_form(&self, form_id: &str) {
        match element_by_id::<HtmlFormElement>(form_id) {
            Ok(form) => form.reset(),
            Err(e) => log::warn!("cannot reset form: {e}"),
        }
    }

    fn navigate_replace(&self, target: &str) {
        let Some(window) = web_sys::window() else {
            log::error!("window is unavailable, cannot navigate to {target}");
            return;
        };
        if let Err(e) = window.location().replace(target) {
            log::error!("navigation to {target} failed: {e:?}");
        }
    }

    fn current_href(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default()
    }
}
