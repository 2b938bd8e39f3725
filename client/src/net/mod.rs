//! Network helpers for the browser client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Real HTTP happens only under `hydrate`; server-side rendering gets stubs so
//! SSR output stays deterministic.

pub mod assets;
