//! Thin handlers that pass one request parameter to a managed cloud service.
//!
//! Each service is reached through a trait so the handlers can be exercised
//! without network access; concrete clients live in `crate::adapters`.

pub mod anger;
pub mod language;
pub mod translation;
