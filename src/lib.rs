pub mod collection;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod observability;
pub mod remote;
pub mod session;
