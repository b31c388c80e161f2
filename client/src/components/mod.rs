//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome (tab bar, class picker) while reading and
//! writing shared state from Leptos context providers.

pub mod class_modal;
pub mod header;
