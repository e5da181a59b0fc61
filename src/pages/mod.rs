//! Page identification and per-page wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders each page; this crate only decides which forms on it
//! get a submit listener and where they post.

pub mod dispatch;
