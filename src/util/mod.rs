//! Small pure helpers used by the page flows.

pub mod uri;
