//! Serverless benchmark handlers.
//!
//! `cpu_test` factorizes an integer by trial division and `memory_test` grows a
//! list element by element; both report wall-clock time next to the result.
//! The `glue` handlers forward a single parameter to a managed cloud service.

pub mod adapters;
pub mod config;
pub mod error;
pub mod event;
pub mod glue;
pub mod handler;
pub mod memory;
pub mod telemetry;
