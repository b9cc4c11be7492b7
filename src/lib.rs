//! agentmatch — recommends an AI coding agent for a task (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod engine;
pub mod env;
pub mod models;
pub mod output;
pub mod server;
