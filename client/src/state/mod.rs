pub mod auth;
pub mod class_modal;
pub mod homework;
pub mod nav;
