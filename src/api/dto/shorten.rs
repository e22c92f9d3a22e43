//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten.
    #[validate(url(message = "Invalid URL"))]
    pub url: String,
}

/// Response containing the generated short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_url_passes_validation() {
        let request = ShortenRequest {
            url: "https://example.com/page".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_invalid_url_fails_validation() {
        for url in ["not-a-valid-url", "", "example.com"] {
            let request = ShortenRequest {
                url: url.to_string(),
            };
            assert!(request.validate().is_err(), "{url:?} should be rejected");
        }
    }

    #[test]
    fn test_missing_url_fails_deserialization() {
        let result = serde_json::from_str::<ShortenRequest>("{}");
        assert!(result.is_err());
    }
}
