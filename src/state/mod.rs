//! Transient values rendered into the page.
//!
//! DESIGN
//! ======
//! Nothing here outlives a single submission; the DOM itself is the only
//! place feedback is retained between events.

pub mod status;
