//! Built-in authorizers.
//!
//! Authorization rules are external collaborators behind the
//! [`Authorizer`] trait; these are the default implementations the shipped
//! layers wire in. Each returns [`code::OK`] on pass and a non-safe code
//! with a diagnostic detail on failure.

use cerberus_core::{code, AuthOutcome, Authorizer, Request, DEFAULT_TOKEN_HEADER};
use serde_json::{json, Value};

/// Request field holding the method name.
pub const METHOD_FIELD: &str = "method";

/// Request field holding the API key.
pub const API_KEY_FIELD: &str = "api_key";

/// Request field flagging a fresh-token capability query.
pub const AUTH_REQUEST_FIELD: &str = "requesting_authentication";

/// Passes only requests whose method is in an allowed set.
#[derive(Debug, Clone)]
pub struct SafeMethodAuthorizer {
    allowed: Vec<String>,
}

impl Default for SafeMethodAuthorizer {
    fn default() -> Self {
        Self::new(["GET", "HEAD", "OPTIONS"])
    }
}

impl SafeMethodAuthorizer {
    /// Creates an authorizer allowing the given methods.
    #[must_use]
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }
}

impl Authorizer for SafeMethodAuthorizer {
    fn name(&self) -> &'static str {
        "safe_method"
    }

    fn authorize(&self, request: &Request) -> AuthOutcome {
        let method = request
            .param(METHOD_FIELD)
            .and_then(Value::as_str)
            .unwrap_or_default();

        if self
            .allowed
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(method))
        {
            AuthOutcome::ok()
        } else {
            AuthOutcome::new(
                code::METHOD_NOT_ALLOWED,
                json!({ "method": method, "allowed": self.allowed }),
            )
        }
    }
}

/// Passes requests that carry a non-empty API key.
#[derive(Debug, Clone)]
pub struct ApiAuthorizer {
    key_field: String,
}

impl Default for ApiAuthorizer {
    fn default() -> Self {
        Self::new(API_KEY_FIELD)
    }
}

impl ApiAuthorizer {
    /// Creates an authorizer reading the key from the given field.
    #[must_use]
    pub fn new(key_field: impl Into<String>) -> Self {
        Self {
            key_field: key_field.into(),
        }
    }
}

impl Authorizer for ApiAuthorizer {
    fn name(&self) -> &'static str {
        "api_access"
    }

    fn authorize(&self, request: &Request) -> AuthOutcome {
        let present = match request.param(&self.key_field) {
            Some(Value::String(key)) => !key.is_empty(),
            Some(Value::Null) | None => false,
            Some(_) => true,
        };

        if present {
            AuthOutcome::ok()
        } else {
            AuthOutcome::new(code::FORBIDDEN, json!({ "missing": self.key_field }))
        }
    }
}

/// Passes requests that present a usable auth token, and supplies the
/// capability query the identity layer consumes.
#[derive(Debug, Clone)]
pub struct Authenticator {
    token_field: String,
}

impl Default for Authenticator {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_HEADER)
    }
}

impl Authenticator {
    /// Creates an authenticator reading the token from the given field.
    #[must_use]
    pub fn new(token_field: impl Into<String>) -> Self {
        Self {
            token_field: token_field.into(),
        }
    }

    /// Returns `true` if the request is a capability query for a fresh
    /// token rather than a normal authorized call.
    #[must_use]
    pub fn is_requesting_authentication(request: &Request) -> bool {
        request
            .param(AUTH_REQUEST_FIELD)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Extracts the token value from a request field.
    ///
    /// A token field shaped as a two-element `(scheme, token)` list yields
    /// its second element; any other non-null value is the token itself.
    #[must_use]
    pub fn token_value(request: &Request, field: &str) -> Option<Value> {
        match request.param(field)? {
            Value::Array(parts) => parts.get(1).cloned(),
            Value::Null => None,
            value => Some(value.clone()),
        }
    }
}

impl Authorizer for Authenticator {
    fn name(&self) -> &'static str {
        "authenticator"
    }

    fn authorize(&self, request: &Request) -> AuthOutcome {
        if Self::token_value(request, &self.token_field).is_some() {
            AuthOutcome::ok()
        } else {
            AuthOutcome::new(code::UNAUTHENTICATED, json!({ "missing": self.token_field }))
        }
    }
}
