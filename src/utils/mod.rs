//! Utility functions for short code generation and URL processing.
//!
//! - [`code_generator`] - Random short code generation
//! - [`canonical_domain`] - Canonical domain extraction from URLs

pub mod canonical_domain;
pub mod code_generator;
