//! The authorizer contract.
//!
//! An [`Authorizer`] is one pluggable rule evaluated against a request. It
//! yields an [`AuthOutcome`] whose code is compared against the externally
//! configured safe-code set; anything outside that set fails the layer.

use crate::message::Request;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Well-known authorization result codes.
///
/// The code domain is open; these are the values the built-in authorizers
/// emit. Hosts may introduce their own codes as long as the safe-code set in
/// [`ChainConfig`](crate::ChainConfig) is configured to match.
pub mod code {
    /// The request passed this rule.
    pub const OK: u16 = 200;
    /// No usable credential was presented.
    pub const UNAUTHENTICATED: u16 = 401;
    /// A credential was presented but does not grant access.
    pub const FORBIDDEN: u16 = 403;
    /// The request method is not in the allowed set.
    pub const METHOD_NOT_ALLOWED: u16 = 405;
}

/// The ordered `(code, detail)` pair produced by an authorizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthOutcome {
    /// Result code, compared against the configured safe-code set.
    pub code: u16,
    /// Authorizer-defined diagnostic payload.
    pub detail: Value,
}

impl AuthOutcome {
    /// Creates an outcome from a code and a diagnostic detail.
    #[must_use]
    pub fn new(code: u16, detail: impl Into<Value>) -> Self {
        Self {
            code,
            detail: detail.into(),
        }
    }

    /// A passing outcome with no detail.
    #[must_use]
    pub fn ok() -> Self {
        Self::new(code::OK, Value::Null)
    }
}

/// A pluggable authorization rule.
///
/// Implementations are pure decision functions: they read the request and
/// return an outcome, without performing delegation or mutating state. Each
/// layer owns an ordered list of authorizers, instantiated once per layer
/// type and evaluated in order on every entry.
pub trait Authorizer: Send + Sync {
    /// Returns the name of this rule, used in logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Evaluates the rule against a request.
    fn authorize(&self, request: &Request) -> AuthOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ok_outcome_is_safe_code_with_null_detail() {
        let outcome = AuthOutcome::ok();
        assert_eq!(outcome.code, code::OK);
        assert_eq!(outcome.detail, Value::Null);
    }

    #[test]
    fn outcome_carries_detail_payload() {
        let outcome = AuthOutcome::new(code::METHOD_NOT_ALLOWED, json!({ "method": "POST" }));
        assert_eq!(outcome.code, 405);
        assert_eq!(outcome.detail["method"], json!("POST"));
    }

    #[test]
    fn outcome_serializes_as_code_then_detail() {
        let outcome = AuthOutcome::new(code::FORBIDDEN, json!("no api access"));
        let json = serde_json::to_string(&outcome).expect("serialization should work");
        assert_eq!(json, r#"{"code":403,"detail":"no api access"}"#);
    }
}
