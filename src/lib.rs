//! HARVESTER — auto-compounding agent for MasterChef-style LP farms
//!
//! Library crate exposing all modules for use by integration tests
//! and the binary entry point.

pub mod config;
pub mod types;
pub mod amounts;
pub mod chain;
pub mod engine;
