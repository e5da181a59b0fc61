#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::collections::HashSet;

/// Tracks which forms already have a submit listener on this page.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    attached: HashSet<String>,
}

impl ListenerRegistry {
    /// Record a listener for `form_id`. Returns `false` if one was already recorded.
    pub fn claim(&mut self, form_id: &str) -> bool {
        self.attached.insert(form_id.to_owned())
    }

    pub fn is_attached(&self, form_id: &str) -> bool {
        self.attached.contains(form_id)
    }

    pub fn len(&self) -> usize {
        self.attached.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }
}
