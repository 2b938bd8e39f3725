//! Routed pages.

pub mod matching;
pub mod playground;
