//! Nomos CLI library exports for integration testing.
//!
//! This module exposes command implementations for use in integration tests.

pub mod backend;
pub mod commands;
pub mod config;
pub mod errors;
