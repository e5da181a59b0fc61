//! Browser bindings: the real `PageHost` and the submit listeners.
//!
//! All of this requires a browser environment and is compiled only with the
//! `hydrate` feature.

pub mod listeners;
pub mod page;

pub use listeners::init;

use wasm_bindgen::JsCast;

use crate::error::ClientError;

fn document() -> Result<web_sys::Document, ClientError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ClientError::Dom("document is unavailable".into()))
}

/// Look up `id` and cast it to the expected element type.
fn element_by_id<E: JsCast>(id: &str) -> Result<E, ClientError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| ClientError::MissingElement { id: id.to_owned() })?
        .dyn_into::<E>()
        .map_err(|_| ClientError::Dom(format!("#{id} has an unexpected element type")))
}
