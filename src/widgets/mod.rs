//! UI Widgets - modular, reusable UI components
//!
//! Widgets keep their own state types and report back through response
//! structs; the host app owns the state and decides what to do with it.

pub mod card;
pub mod status;
pub mod timeline;
