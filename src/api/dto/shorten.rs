//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Longest long URL accepted by `POST /shorten`.
pub const MAX_URL_LENGTH: u64 = 2048;

/// Request to shorten a single URL.
///
/// Scheme and emptiness checks are performed by the registry itself;
/// this layer only bounds the payload size.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(length(max = MAX_URL_LENGTH, message = "URL is too long"))]
    pub url: String,
}

/// Response for a successfully shortened URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub code: String,
    pub short_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_request() {
        let request: ShortenRequest =
            serde_json::from_str(r#"{ "url": "https://example.com" }"#).unwrap();
        assert_eq!(request.url, "https://example.com");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_missing_url_field_fails() {
        let result = serde_json::from_str::<ShortenRequest>(r#"{ "link": "https://example.com" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_overlong_url_fails_validation() {
        let request = ShortenRequest {
            url: format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH as usize)),
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("url"));
    }

    #[test]
    fn test_serialize_response() {
        let response = ShortenResponse {
            code: "abc123".to_string(),
            short_url: "https://sho.rt/abc123".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["code"], "abc123");
        assert_eq!(json["short_url"], "https://sho.rt/abc123");
    }
}
