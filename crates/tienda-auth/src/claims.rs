use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Claims carried in the payload segment of the session credential.
/// Derived data only: recomputed from the stored token on every check,
/// never persisted on its own.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    /// Seconds since epoch. Absent means the credential never expires.
    #[serde(default)]
    pub exp: Option<i64>,
}

#[derive(Debug, thiserror::Error)]
pub enum ClaimsError {
    #[error("credential does not have three segments")]
    Segments,
    #[error("payload segment is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("payload is not a valid claims object: {0}")]
    Json(#[from] serde_json::Error),
}

impl Claims {
    /// Decode the middle segment of a `header.payload.signature` token.
    /// The signature is not verified here; the backend is the authority
    /// and a tampered token only changes what the client tries to render.
    pub fn decode(token: &str) -> Result<Self, ClaimsError> {
        let mut segments = token.split('.');
        let payload = match (segments.next(), segments.next(), segments.next(), segments.next()) {
            (Some(_), Some(payload), Some(_), None) => payload,
            _ => return Err(ClaimsError::Segments),
        };
        let bytes = URL_SAFE_NO_PAD.decode(payload)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// The role claim resolved against the closed role set. Unknown
    /// codes count as no role.
    pub fn role(&self) -> Option<Role> {
        self.role.as_deref().and_then(Role::from_code)
    }

    pub fn expired_at(&self, now: i64) -> bool {
        matches!(self.exp, Some(exp) if exp < now)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Build an unsigned token the way the backend would: URL-safe
    /// base64 segments joined with dots.
    pub(crate) fn token_with(payload: &serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
        format!("{header}.{body}.firma")
    }

    #[test]
    fn decodes_full_claims() {
        let token = token_with(&serde_json::json!({
            "sub": "42",
            "email": "ana@tienda.gt",
            "role": "MODERADOR",
            "exp": 1_900_000_000i64,
        }));
        let claims = Claims::decode(&token).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.role(), Some(Role::Moderador));
        assert_eq!(claims.exp, Some(1_900_000_000));
    }

    #[test]
    fn optional_fields_default_to_none() {
        let token = token_with(&serde_json::json!({ "sub": "7" }));
        let claims = Claims::decode(&token).unwrap();
        assert!(claims.email.is_none());
        assert!(claims.role().is_none());
        assert!(claims.exp.is_none());
        assert!(!claims.expired_at(i64::MAX));
    }

    #[test]
    fn rejects_wrong_segment_count() {
        assert!(matches!(Claims::decode("solo-un-segmento"), Err(ClaimsError::Segments)));
        assert!(matches!(Claims::decode("a.b"), Err(ClaimsError::Segments)));
        assert!(matches!(Claims::decode("a.b.c.d"), Err(ClaimsError::Segments)));
    }

    #[test]
    fn rejects_invalid_base64() {
        assert!(matches!(Claims::decode("a.!!!.c"), Err(ClaimsError::Base64(_))));
    }

    #[test]
    fn rejects_non_json_payload() {
        let garbage = URL_SAFE_NO_PAD.encode(b"no es json");
        let token = format!("a.{garbage}.c");
        assert!(matches!(Claims::decode(&token), Err(ClaimsError::Json(_))));
    }

    #[test]
    fn unknown_role_code_is_no_role() {
        let token = token_with(&serde_json::json!({ "sub": "1", "role": "GERENTE" }));
        assert_eq!(Claims::decode(&token).unwrap().role(), None);
    }

    #[test]
    fn expiry_is_strictly_less_than_now() {
        let token = token_with(&serde_json::json!({ "sub": "1", "exp": 100 }));
        let claims = Claims::decode(&token).unwrap();
        assert!(claims.expired_at(101));
        assert!(!claims.expired_at(100));
        assert!(!claims.expired_at(99));
    }
}
