//! Serialized form fields.

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

/// Ordered name/value pairs collected from a form at submission time.
///
/// Duplicate names are kept, in order, the same way `FormData` keeps them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPayload {
    fields: Vec<(String, String)>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    /// Append the submit control that triggered the event.
    ///
    /// Returns `false` and appends nothing when the control lacks a `name`
    /// or a `value` attribute.
    pub fn append_submitter(&mut self, name: Option<String>, value: Option<String>) -> bool {
        match (name, value) {
            (Some(name), Some(value)) => {
                self.append(name, value);
                true
            }
            _ => false,
        }
    }

    /// First value for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for FormPayload {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self { fields: iter.into_iter().map(|(n, v)| (n.into(), v.into())).collect() }
    }
}
