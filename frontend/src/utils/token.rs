use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Employee,
    Admin,
}

impl Role {
    /// Only the exact claim `ADMIN` grants admin views.
    pub fn from_claim(raw: &str) -> Self {
        if raw == "ADMIN" {
            Role::Admin
        } else {
            Role::Employee
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "EMPLOYEE",
            Role::Admin => "ADMIN",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub expires_at: DateTime<Utc>,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("token must have three dot-separated segments, found {0}")]
    Segments(usize),
    #[error("token payload is not valid base64url")]
    Base64,
    #[error("token payload is not a JSON object")]
    Json,
    #[error("token claim `{0}` is missing or has the wrong type")]
    Claim(&'static str),
    #[error("token claim `exp` is out of range")]
    Expiry,
    #[error("token contains whitespace")]
    Whitespace,
}

/// Decodes the claims of a compact session token into an [`Identity`].
///
/// Only the structure is checked: the signature is left to the server and
/// expiry is reported through [`Identity::is_expired_at`].
pub fn decode(token: &str) -> Result<Identity, DecodeError> {
    let claims = decode_claims(token)?;

    let id = string_claim(&claims, "sub")?;
    let name = string_claim(&claims, "name")?;
    let email = string_claim(&claims, "email")?;
    let role = string_claim(&claims, "role")?;
    let exp = claims
        .get("exp")
        .and_then(numeric_date)
        .ok_or(DecodeError::Claim("exp"))?;
    let expires_at = DateTime::<Utc>::from_timestamp(exp, 0).ok_or(DecodeError::Expiry)?;

    Ok(Identity {
        id,
        name,
        email,
        role: Role::from_claim(&role),
        expires_at,
    })
}

fn decode_claims(token: &str) -> Result<Map<String, Value>, DecodeError> {
    if token.chars().any(char::is_whitespace) {
        return Err(DecodeError::Whitespace);
    }
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(DecodeError::Segments(parts.len()));
    }
    let payload = parts[1].trim_end_matches('=');
    let decoded = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| DecodeError::Base64)?;
    match serde_json::from_slice::<Value>(&decoded) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(DecodeError::Json),
    }
}

/// NumericDate may carry a fraction; whole seconds are kept.
fn numeric_date(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|secs| secs.is_finite() && secs.abs() < i64::MAX as f64)
            .map(|secs| secs.trunc() as i64)
    })
}

fn string_claim(claims: &Map<String, Value>, key: &'static str) -> Result<String, DecodeError> {
    claims
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(DecodeError::Claim(key))
}

#[cfg(test)]
pub(crate) fn encode_for_test(claims: &Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{}.{}.signature", header, payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn claims() -> Value {
        json!({
            "sub": "1",
            "name": "A",
            "email": "a@x.com",
            "role": "ADMIN",
            "exp": 4_102_444_800i64
        })
    }

    #[test]
    fn decodes_all_required_claims() {
        let identity = decode(&encode_for_test(&claims())).unwrap();
        assert_eq!(identity.id, "1");
        assert_eq!(identity.name, "A");
        assert_eq!(identity.email, "a@x.com");
        assert_eq!(identity.role, Role::Admin);
        assert_eq!(identity.expires_at.timestamp(), 4_102_444_800);
    }

    #[test]
    fn unknown_roles_decode_as_employee() {
        for role in ["EMPLOYEE", "MANAGER", "", "admin", " ADMIN ", "Admin"] {
            let mut raw = claims();
            raw["role"] = json!(role);
            let identity = decode(&encode_for_test(&raw)).unwrap();
            assert_eq!(identity.role, Role::Employee, "role {:?}", role);
        }
    }

    #[test]
    fn each_missing_claim_fails() {
        for key in ["sub", "name", "email", "role", "exp"] {
            let mut raw = claims();
            raw.as_object_mut().unwrap().remove(key);
            let err = decode(&encode_for_test(&raw)).unwrap_err();
            assert!(
                matches!(err, DecodeError::Claim(k) if k == key),
                "expected missing {} but got {:?}",
                key,
                err
            );
        }
    }

    #[test]
    fn mistyped_claims_fail() {
        let mut raw = claims();
        raw["exp"] = json!("tomorrow");
        assert_eq!(
            decode(&encode_for_test(&raw)),
            Err(DecodeError::Claim("exp"))
        );

        let mut raw = claims();
        raw["sub"] = json!(42);
        assert_eq!(
            decode(&encode_for_test(&raw)),
            Err(DecodeError::Claim("sub"))
        );
    }

    #[test]
    fn malformed_tokens_fail() {
        assert_eq!(decode("garbage"), Err(DecodeError::Segments(1)));
        assert_eq!(decode("a.b"), Err(DecodeError::Segments(2)));
        assert_eq!(decode("a.!!!.c"), Err(DecodeError::Base64));

        let not_object = URL_SAFE_NO_PAD.encode("[1,2,3]");
        assert_eq!(
            decode(&format!("h.{}.s", not_object)),
            Err(DecodeError::Json)
        );
    }

    #[test]
    fn padded_payload_is_accepted() {
        let token = encode_for_test(&claims());
        let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
        while parts[1].len() % 4 != 0 {
            parts[1].push('=');
        }
        assert!(decode(&parts.join(".")).is_ok());
    }

    #[test]
    fn fractional_expiry_is_truncated() {
        let mut raw = claims();
        raw["exp"] = json!(4_102_444_800.5f64);
        let identity = decode(&encode_for_test(&raw)).unwrap();
        assert_eq!(identity.expires_at.timestamp(), 4_102_444_800);
    }

    #[test]
    fn tokens_with_whitespace_fail() {
        let token = encode_for_test(&claims());
        assert_eq!(
            decode(&format!("{}\n", token)),
            Err(DecodeError::Whitespace)
        );
        assert_eq!(
            decode(&format!(" {}", token)),
            Err(DecodeError::Whitespace)
        );
    }

    #[test]
    fn expiry_is_reported_not_enforced() {
        let mut raw = claims();
        raw["exp"] = json!(1);
        let identity = decode(&encode_for_test(&raw)).unwrap();
        assert!(identity.is_expired_at(Utc::now()));
    }
}
