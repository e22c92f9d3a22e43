//! Application layer services implementing business logic.
//!
//! Services orchestrate repository calls and business rules, and provide a
//! clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::url_service::UrlService`] - Shortening, resolution and domain metrics

pub mod services;
