//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render icons, illustrations and widgets while keeping their
//! state in plain models under `state`.

pub mod icon;
pub mod illustration;
pub mod survey_widget;
