//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`UrlRecord`] - A shortened URL with its canonical domain and access counter
//! - [`NewUrlRecord`] - Insert payload for a URL record
//! - [`DomainMetric`] - Number of shortened links sharing a canonical domain

pub mod domain_metric;
pub mod url_record;

pub use domain_metric::DomainMetric;
pub use url_record::{NewUrlRecord, UrlRecord};
