//! Client-side state models.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain data types held in Leptos signals by pages and components. Keeping
//! them free of DOM types lets the transitions be unit tested natively.

pub mod flow;
pub mod icons;
pub mod matching;
pub mod survey;
