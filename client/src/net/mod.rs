pub mod adapter;
pub mod api;
pub mod error;
pub mod mock;
pub mod mock_store;
pub mod remote;
pub mod types;
