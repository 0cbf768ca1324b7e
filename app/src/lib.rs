//! Gym Planner Application Library
//!
//! The process-owned store, its persistence adapters, the plan generator,
//! and the screen flows that drive them. Exposed as a library for the
//! binary and the integration tests.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod generator;
pub mod locale;
pub mod services;
pub mod state;
pub mod storage;
