//! Canonical domain extraction for domain metrics.

use url::Url;

/// Errors that can occur while extracting a canonical domain.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(#[from] url::ParseError),
}

/// Parses `raw` as an absolute URL and returns its canonical domain.
///
/// The canonical domain is the URL authority (`host` or `host:port`) with a
/// single leading `www.` removed. URLs without a host (e.g. `mailto:`) yield
/// an empty domain. Hosts of `http`/`https` URLs are lowercased by the
/// parser, and a port equal to the scheme default is dropped.
///
/// # Errors
///
/// Returns [`DomainError::InvalidFormat`] if `raw` is not a parseable URL.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(canonical_domain("https://www.example.com/page").unwrap(), "example.com");
/// assert_eq!(canonical_domain("http://api.example.com:8080").unwrap(), "api.example.com:8080");
/// ```
pub fn canonical_domain(raw: &str) -> Result<String, DomainError> {
    let parsed = Url::parse(raw)?;
    let host = parsed.host_str().unwrap_or("");

    let authority = match parsed.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    };

    Ok(strip_www(&authority).to_string())
}

/// Removes one leading `www.` from a host.
pub fn strip_www(host: &str) -> &str {
    host.strip_prefix("www.").unwrap_or(host)
}
