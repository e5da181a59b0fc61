//! Networking for the page flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! `payload` models serialized form fields, `transport` is the seam the
//! controller posts through, and `browser` implements it with `gloo-net`.

#[cfg(feature = "hydrate")]
pub mod browser;
pub mod payload;
pub mod transport;
