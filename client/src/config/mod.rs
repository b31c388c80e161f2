//! Client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The web app has no build-time settings; everything it needs (API base,
//! theme, selected class, Telegram identity) is per-browser session state.

pub mod session;

pub use session::SessionConfig;
