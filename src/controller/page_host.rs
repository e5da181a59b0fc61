use crate::state::status::Status;

/// The page a flow renders into.
///
/// Element lookups are the implementor's concern; a missing element is not
/// an error for the flow that asked for it.
pub trait PageHost {
    /// Write `status` into the status element and color it.
    fn show_status(&self, status: &Status);

    /// Replace the balance element's text.
    fn set_balance(&self, text: &str);

    /// Clear the fields of the form with id `form_id`.
    fn reset_form(&self, form_id: &str);

    /// Navigate to `target`, replacing the current history entry.
    fn navigate_replace(&self, target: &str);

    /// Absolute URL of the current page.
    fn current_href(&self) -> String;
}
