use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

// ============================================================================
// SESSION - access token + the claims the dashboard displays
// ============================================================================

/// Body of the token endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
}

/// Claims read from the access token payload. The signature is never
/// verified here; the server remains the authority.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub location_code: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub access_token: String,
    pub claims: Claims,
}

impl Session {
    /// Decodes the claims of a freshly issued token.
    pub fn from_token(access_token: String) -> Result<Self, ApiError> {
        let claims = decode_claims(&access_token)?;
        Ok(Self { access_token, claims })
    }

    pub fn location_code(&self) -> Option<&str> {
        let code = self.claims.location_code.trim();
        if code.is_empty() {
            None
        } else {
            Some(code)
        }
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

/// Reads the JSON payload (second segment) of a JWT.
pub fn decode_claims(token: &str) -> Result<Claims, ApiError> {
    let payload = token
        .split('.')
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| ApiError::Token("missing payload segment".to_string()))?;

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| ApiError::Token(format!("payload is not base64url: {}", e)))?;

    serde_json::from_slice::<Claims>(&bytes)
        .map_err(|e| ApiError::Token(format!("payload is not valid claims JSON: {}", e)))
}

#[cfg(test)]
pub(crate) fn encode_test_token(claims: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{}.{}.signature", header, payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_display_claims() {
        let token = encode_test_token(&json!({
            "name": "Rina",
            "email": "rina@example.test",
            "locationCode": "LOC01",
            "iat": 1700000000,
        }));

        let session = Session::from_token(token.clone()).unwrap();
        assert_eq!(session.claims.name, "Rina");
        assert_eq!(session.claims.email, "rina@example.test");
        assert_eq!(session.location_code(), Some("LOC01"));
        assert_eq!(session.bearer(), format!("Bearer {}", token));
    }

    #[test]
    fn padded_payloads_are_accepted() {
        let payload = base64::engine::general_purpose::URL_SAFE.encode(r#"{"name":"A"}"#);
        let token = format!("h.{}.s", payload);
        assert_eq!(decode_claims(&token).unwrap().name, "A");
    }

    #[test]
    fn missing_claims_decode_as_empty() {
        let token = encode_test_token(&json!({ "sub": "42" }));
        let session = Session::from_token(token).unwrap();
        assert_eq!(session.claims, Claims::default());
        assert_eq!(session.location_code(), None);
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        assert!(matches!(decode_claims("not-a-jwt"), Err(ApiError::Token(_))));
        assert!(matches!(decode_claims("a.!!!.c"), Err(ApiError::Token(_))));
        let not_json = format!("a.{}.c", URL_SAFE_NO_PAD.encode("plain text"));
        assert!(matches!(decode_claims(&not_json), Err(ApiError::Token(_))));
    }
}
