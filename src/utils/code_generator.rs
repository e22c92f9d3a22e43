//! Short code generation utilities.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Default length of generated short codes.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Codes that would be shadowed by fixed routes.
const RESERVED_CODES: &[&str] = &["health", "api"];

/// Generates a random short code of `length` characters.
///
/// Each character is drawn independently and uniformly from `[A-Za-z0-9]`
/// using the thread-local random generator. Uniqueness is not guaranteed;
/// collision handling belongs to the caller.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Returns true if `code` collides with a fixed route and must not be issued.
pub fn is_reserved_code(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}
