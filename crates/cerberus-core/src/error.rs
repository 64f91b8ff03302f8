//! Error types for chain traversal.
//!
//! No error here is retried or recovered internally: the chain surfaces
//! every failure to the orchestration caller with its full [`ErrorBundle`]
//! so the host can decide how to log it or translate it into a client
//! response.

use crate::bundle::{ErrorBundle, ERROR_BUNDLE_KEYS};
use thiserror::Error;

/// Result type alias for chain operations.
pub type ChainResult<T> = Result<T, ChainError>;

/// Errors raised while a request traverses the chain.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChainError {
    /// The orchestration entry point was invoked on a compose-only layer
    /// type. Always a wiring bug, never retried.
    #[error("layer `{layer}` is abstract and cannot be entered")]
    AbstractLayer {
        /// Name of the abstract layer type.
        layer: String,
        /// Failure context (`authorizer_error` is `None`).
        bundle: ErrorBundle,
    },

    /// An authorizer returned a code outside the safe-code set. Propagates
    /// uncaught to the orchestration caller.
    #[error("authorization failed at layer `{layer}` with code {code}")]
    Unauthorized {
        /// Name of the layer whose authorizer failed.
        layer: String,
        /// The unsafe result code.
        code: u16,
        /// Failure context carrying the failing outcome.
        bundle: ErrorBundle,
    },

    /// An [`ErrorBundle`] was constructed with the wrong field set. A
    /// defensive invariant violation, always fatal.
    #[error(
        "error bundle fields must be exactly {expected:?}, got {supplied:?}",
        expected = ERROR_BUNDLE_KEYS
    )]
    ImproperBundle {
        /// The field set the caller supplied.
        supplied: Vec<String>,
    },
}

impl ChainError {
    /// Creates an abstract-layer error from its bundle.
    #[must_use]
    pub fn abstract_layer(bundle: ErrorBundle) -> Self {
        Self::AbstractLayer {
            layer: bundle.layer.clone(),
            bundle,
        }
    }

    /// Creates an authorization error from a bundle carrying the failing
    /// outcome.
    #[must_use]
    pub fn unauthorized(bundle: ErrorBundle) -> Self {
        let code = bundle.authorizer_error.as_ref().map_or(0, |o| o.code);
        Self::Unauthorized {
            layer: bundle.layer.clone(),
            code,
            bundle,
        }
    }

    /// Creates an improper-bundle error recording the supplied field set.
    #[must_use]
    pub fn improper_bundle(supplied: &[&str]) -> Self {
        Self::ImproperBundle {
            supplied: supplied.iter().map(|key| (*key).to_string()).collect(),
        }
    }

    /// Returns the failure bundle, where this error kind carries one.
    #[must_use]
    pub fn bundle(&self) -> Option<&ErrorBundle> {
        match self {
            Self::AbstractLayer { bundle, .. } | Self::Unauthorized { bundle, .. } => Some(bundle),
            Self::ImproperBundle { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authorizer::{code, AuthOutcome};
    use serde_json::json;

    fn denied_bundle() -> ErrorBundle {
        ErrorBundle::bundle(
            &ERROR_BUNDLE_KEYS,
            vec!["view".to_string()],
            "view",
            Some(AuthOutcome::new(code::METHOD_NOT_ALLOWED, json!("POST"))),
            json!({}),
        )
        .expect("exact keys must pass")
    }

    #[test]
    fn unauthorized_lifts_layer_and_code_from_bundle() {
        let error = ChainError::unauthorized(denied_bundle());
        match &error {
            ChainError::Unauthorized { layer, code, .. } => {
                assert_eq!(layer, "view");
                assert_eq!(*code, 405);
            }
            other => panic!("expected Unauthorized, got {other:?}"),
        }
        assert!(error.to_string().contains("view"));
        assert!(error.to_string().contains("405"));
    }

    #[test]
    fn abstract_layer_error_exposes_bundle() {
        let bundle = ErrorBundle::bundle(
            &ERROR_BUNDLE_KEYS,
            vec!["gate".to_string()],
            "gate",
            None,
            json!({}),
        )
        .expect("exact keys must pass");

        let error = ChainError::abstract_layer(bundle);
        let carried = error.bundle().expect("bundle present");
        assert_eq!(carried.layer, "gate");
        assert!(carried.authorizer_error.is_none());
    }

    #[test]
    fn improper_bundle_has_no_bundle() {
        let error = ChainError::improper_bundle(&["layer"]);
        assert!(error.bundle().is_none());
        assert!(error.to_string().contains("middleware_stack"));
    }
}
