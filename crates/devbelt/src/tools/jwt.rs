//! JWT decoding and claim inspection.
//!
//! Decoding only. The signature segment is reported verbatim and
//! never verified.

use std::fmt;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::DecodePaddingMode;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use serde_json::{Map, Value};

use crate::error::{DevbeltError, Result};

/// URL-safe engine that accepts padded and unpadded segments alike.
const URL_SAFE_FORGIVING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Payload key count above which a size advisory is raised.
const LARGE_PAYLOAD_KEYS: usize = 50;

/// Expiry horizon beyond which a long-lived-token advisory is raised.
const LONG_EXPIRY_SECONDS: i64 = 30 * 24 * 3600;

/// A decoded token: both JSON documents plus the raw segments.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedJwt {
    /// Decoded header object.
    pub header: Map<String, Value>,

    /// Decoded payload object.
    pub payload: Map<String, Value>,

    /// Signature segment, verbatim and unverified.
    pub signature: String,

    /// Header segment as it appeared in the token.
    pub raw_header: String,

    /// Payload segment as it appeared in the token.
    pub raw_payload: String,
}

/// Advisory severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The token is unsafe to trust.
    Danger,
    /// Worth fixing.
    Warning,
    /// Informational only.
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
        };
        f.write_str(label)
    }
}

/// One advisory raised while inspecting a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    /// How serious the finding is.
    pub severity: Severity,

    /// Human-readable note.
    pub message: String,
}

/// Claim status as of a specific instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimSummary {
    /// `exp`, in Unix seconds.
    pub expires_at: Option<i64>,

    /// `iat`, in Unix seconds.
    pub issued_at: Option<i64>,

    /// `nbf`, in Unix seconds.
    pub not_before: Option<i64>,

    /// `iss`.
    pub issuer: Option<String>,

    /// `sub`.
    pub subject: Option<String>,

    /// `aud`, when it is a single string.
    pub audience: Option<String>,

    /// Whether `exp` lies in the past. Tokens without `exp` never
    /// expire.
    pub is_expired: bool,

    /// Whether `nbf` has been reached. Tokens without `nbf` are
    /// always active.
    pub is_active: bool,

    /// Advisories, in the order the checks run.
    pub advisories: Vec<Advisory>,
}

/// Decode a JWT without verifying it.
///
/// Returns `Ok(None)` for blank input. A leading case-insensitive
/// `Bearer` prefix and surrounding whitespace are stripped before
/// the three-segment split. Header and payload must both decode to
/// JSON objects.
pub fn decode(token: &str) -> Result<Option<DecodedJwt>> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let mut segments = strip_bearer(trimmed).split('.');
    let (Some(raw_header), Some(raw_payload), Some(signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(DevbeltError::jwt("expected three dot-separated segments"));
    };
    Ok(Some(DecodedJwt {
        header: decode_object(raw_header, "header")?,
        payload: decode_object(raw_payload, "payload")?,
        signature: signature.to_string(),
        raw_header: raw_header.to_string(),
        raw_payload: raw_payload.to_string(),
    }))
}

impl DecodedJwt {
    /// Inspect the claims as of `now` (Unix seconds).
    #[must_use]
    pub fn claims_at(&self, now: i64) -> ClaimSummary {
        let expires_at = claim_seconds(&self.payload, "exp");
        let not_before = claim_seconds(&self.payload, "nbf");

        let mut advisories = Vec::new();
        let algorithm = self.header.get("alg").and_then(Value::as_str);
        if algorithm.is_none() || algorithm == Some("none") {
            advise(
                &mut advisories,
                Severity::Danger,
                "Algorithm is \"none\" or missing. Token is insecure.",
            );
        }
        match expires_at {
            None => advise(
                &mut advisories,
                Severity::Warning,
                "Token has no expiry (exp). It may last forever.",
            ),
            Some(exp) if exp - now > LONG_EXPIRY_SECONDS => advise(
                &mut advisories,
                Severity::Warning,
                "Expiry is more than 30 days in the future.",
            ),
            Some(_) => {}
        }
        if not_before.is_some_and(|nbf| now < nbf) {
            advise(
                &mut advisories,
                Severity::Info,
                "Token is not active yet (nbf is in future).",
            );
        }
        if self.payload.len() > LARGE_PAYLOAD_KEYS {
            advise(
                &mut advisories,
                Severity::Warning,
                "Large payload detected. Avoid storing PII in JWT.",
            );
        }

        ClaimSummary {
            expires_at,
            issued_at: claim_seconds(&self.payload, "iat"),
            not_before,
            issuer: claim_string(&self.payload, "iss"),
            subject: claim_string(&self.payload, "sub"),
            audience: claim_string(&self.payload, "aud"),
            is_expired: expires_at.is_some_and(|exp| now > exp),
            is_active: not_before.is_none_or(|nbf| now >= nbf),
            advisories,
        }
    }
}

/// Strip a leading case-insensitive `Bearer` followed by whitespace.
fn strip_bearer(token: &str) -> &str {
    let Some(rest) = token
        .get(..6)
        .filter(|prefix| prefix.eq_ignore_ascii_case("bearer"))
        .map(|_| &token[6..])
    else {
        return token;
    };
    let stripped = rest.trim_start();
    if stripped.len() == rest.len() {
        // "Bearer" glued to the token body is part of the token.
        return token;
    }
    stripped
}

fn decode_object(segment: &str, name: &str) -> Result<Map<String, Value>> {
    let bytes = URL_SAFE_FORGIVING
        .decode(segment)
        .map_err(|err| DevbeltError::jwt(format!("{name} is not valid base64url: {err}")))?;
    let text = String::from_utf8(bytes)
        .map_err(|_| DevbeltError::jwt(format!("{name} is not UTF-8")))?;
    match serde_json::from_str(&text) {
        Ok(Value::Object(object)) => Ok(object),
        Ok(_) => Err(DevbeltError::jwt(format!("{name} is not a JSON object"))),
        Err(err) => Err(DevbeltError::jwt(format!("{name} is not valid JSON: {err}"))),
    }
}

fn advise(advisories: &mut Vec<Advisory>, severity: Severity, message: &str) {
    advisories.push(Advisory {
        severity,
        message: message.to_string(),
    });
}

fn claim_seconds(payload: &Map<String, Value>, name: &str) -> Option<i64> {
    let value = payload.get(name)?;
    value.as_i64().or_else(|| value.as_f64().map(|v| v as i64))
}

fn claim_string(payload: &Map<String, Value>, name: &str) -> Option<String> {
    payload.get(name).and_then(Value::as_str).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};

    use super::*;

    fn token(header: &str, payload: &str) -> String {
        format!(
            "{}.{}.sig",
            URL_SAFE_NO_PAD.encode(header),
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    const HEADER: &str = r#"{"alg":"HS256","typ":"JWT"}"#;

    #[test]
    fn decodes_all_three_segments() {
        let token = token(HEADER, r#"{"sub":"1234567890","name":"John Doe"}"#);
        let decoded = decode(&token).unwrap().unwrap();
        assert_eq!(decoded.header["alg"], "HS256");
        assert_eq!(decoded.payload["name"], "John Doe");
        assert_eq!(decoded.signature, "sig");
        assert!(!decoded.raw_payload.is_empty());
    }

    #[test]
    fn blank_input_is_none() {
        assert!(decode("  \n").unwrap().is_none());
    }

    #[test]
    fn bearer_prefix_is_stripped() {
        let token = token(HEADER, r#"{"sub":"x"}"#);
        assert!(decode(&format!("Bearer {token}")).unwrap().is_some());
        assert!(decode(&format!("BEARER  {token}")).unwrap().is_some());
        // Without trailing whitespace the prefix is part of the token.
        assert!(decode(&format!("Bearer{token}")).is_err());
    }

    #[test]
    fn wrong_segment_count_is_rejected() {
        let message = decode("one.two").unwrap_err().to_string();
        assert!(message.contains("three"), "{message}");
        assert!(decode("a.b.c.d").is_err());
    }

    #[test]
    fn padded_segments_are_accepted() {
        let padded = format!(
            "{}.{}.",
            URL_SAFE.encode(HEADER),
            URL_SAFE.encode(r#"{"sub":"x"}"#)
        );
        let decoded = decode(&padded).unwrap().unwrap();
        assert_eq!(decoded.signature, "");
    }

    #[test]
    fn payload_must_be_an_object() {
        let message = decode(&token(HEADER, "[1,2]")).unwrap_err().to_string();
        assert!(message.contains("payload is not a JSON object"), "{message}");
    }

    #[test]
    fn header_must_be_valid_json() {
        let message = decode(&token("{oops", r#"{"sub":"x"}"#))
            .unwrap_err()
            .to_string();
        assert!(message.contains("header is not valid JSON"), "{message}");
    }

    #[test]
    fn expired_token_is_flagged() {
        let decoded = decode(&token(HEADER, r#"{"exp":1000}"#)).unwrap().unwrap();
        let claims = decoded.claims_at(2000);
        assert!(claims.is_expired);
        assert!(claims.is_active);
        assert_eq!(claims.expires_at, Some(1000));
        assert!(claims.advisories.is_empty());
    }

    #[test]
    fn missing_expiry_raises_a_warning() {
        let decoded = decode(&token(HEADER, r#"{"sub":"x"}"#)).unwrap().unwrap();
        let claims = decoded.claims_at(2000);
        assert!(!claims.is_expired);
        assert_eq!(claims.advisories.len(), 1);
        assert_eq!(claims.advisories[0].severity, Severity::Warning);
        assert_eq!(
            claims.advisories[0].message,
            "Token has no expiry (exp). It may last forever."
        );
    }

    #[test]
    fn distant_expiry_raises_a_warning() {
        let exp = 1000 + 31 * 24 * 3600;
        let payload = format!(r#"{{"exp":{exp}}}"#);
        let decoded = decode(&token(HEADER, &payload)).unwrap().unwrap();
        let claims = decoded.claims_at(1000);
        assert_eq!(
            claims.advisories[0].message,
            "Expiry is more than 30 days in the future."
        );
    }

    #[test]
    fn future_nbf_means_not_active() {
        let decoded = decode(&token(HEADER, r#"{"exp":3000,"nbf":2500}"#))
            .unwrap()
            .unwrap();
        let claims = decoded.claims_at(2000);
        assert!(!claims.is_active);
        assert!(!claims.is_expired);
        assert_eq!(claims.advisories[0].severity, Severity::Info);
        assert_eq!(
            claims.advisories[0].message,
            "Token is not active yet (nbf is in future)."
        );
    }

    #[test]
    fn unsigned_algorithm_is_dangerous() {
        let decoded = decode(&token(r#"{"alg":"none"}"#, r#"{"exp":3000}"#))
            .unwrap()
            .unwrap();
        let claims = decoded.claims_at(2000);
        assert_eq!(claims.advisories[0].severity, Severity::Danger);

        let missing = decode(&token(r#"{"typ":"JWT"}"#, r#"{"exp":3000}"#))
            .unwrap()
            .unwrap();
        assert_eq!(
            missing.claims_at(2000).advisories[0].message,
            "Algorithm is \"none\" or missing. Token is insecure."
        );
    }

    #[test]
    fn oversized_payload_raises_a_warning() {
        let keys: Vec<String> = (0..51).map(|i| format!("\"k{i}\":1")).collect();
        let payload = format!("{{\"exp\":3000,{}}}", keys.join(","));
        let decoded = decode(&token(HEADER, &payload)).unwrap().unwrap();
        let claims = decoded.claims_at(2000);
        assert!(
            claims
                .advisories
                .iter()
                .any(|advisory| advisory.message.starts_with("Large payload detected")),
        );
    }

    #[test]
    fn registered_claims_are_surfaced() {
        let payload = r#"{"iss":"auth.example","sub":"user-1","aud":"api","iat":1700000000}"#;
        let decoded = decode(&token(HEADER, payload)).unwrap().unwrap();
        let claims = decoded.claims_at(1_700_000_100);
        assert_eq!(claims.issuer.as_deref(), Some("auth.example"));
        assert_eq!(claims.subject.as_deref(), Some("user-1"));
        assert_eq!(claims.audience.as_deref(), Some("api"));
        assert_eq!(claims.issued_at, Some(1_700_000_000));
    }
}
