//! Panel modules for the single web app route.
//!
//! ARCHITECTURE
//! ============
//! `webapp` bootstraps the session and lays out the panels; each panel owns
//! its request orchestration and keeps pure formatting helpers testable
//! outside the browser.

pub mod admin;
pub mod admin_forms;
pub mod home;
pub mod homework;
pub mod rebuses;
pub mod schedule;
pub mod webapp;
