//! Bearer Token Extraction
//!
//! Pulls the bearer token out of an `Authorization` header.

use http::HeaderMap;
use http::header::AUTHORIZATION;

/// Extract the token from an `Authorization: Bearer <token>` header
///
/// Returns `None` when the header is absent, not valid UTF-8, uses a
/// different scheme, or carries an empty token.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() { None } else { Some(token) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_extract_valid_bearer() {
        let headers = headers_with("Bearer abc.123.xyz");
        assert_eq!(extract_bearer_token(&headers), Some("abc.123.xyz"));
    }

    #[test]
    fn test_missing_header() {
        let headers = HeaderMap::new();
        assert_eq!(extract_bearer_token(&headers), None);
    }

    #[test]
    fn test_wrong_scheme() {
        let headers = headers_with("Basic dXNlcjpwYXNz");
        assert_eq!(extract_bearer_token(&headers), None);
    }

    #[test]
    fn test_empty_token() {
        let headers = headers_with("Bearer ");
        assert_eq!(extract_bearer_token(&headers), None);

        let headers = headers_with("Bearer    ");
        assert_eq!(extract_bearer_token(&headers), None);
    }

    #[test]
    fn test_scheme_is_case_sensitive() {
        let headers = headers_with("bearer abc");
        assert_eq!(extract_bearer_token(&headers), None);
    }
}
