//! Structured failure context.
//!
//! Every chain failure carries an [`ErrorBundle`]: the execution trace at
//! failure time, the layer that detected the failure, the failing authorizer
//! outcome (if any), and a snapshot of the request. The bundle gives the
//! host everything it needs to log or translate the failure without
//! re-deriving context.

use crate::authorizer::AuthOutcome;
use crate::error::{ChainError, ChainResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The exact field set of an [`ErrorBundle`], in order.
pub const ERROR_BUNDLE_KEYS: [&str; 4] =
    ["middleware_stack", "layer", "authorizer_error", "request_dump"];

/// Failure context correlating a chain error with the point of failure.
///
/// Serializes with the fields in [`ERROR_BUNDLE_KEYS`] order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBundle {
    /// The execution trace accumulated on the request at failure time.
    pub middleware_stack: Vec<String>,
    /// Name of the layer type that detected the failure.
    pub layer: String,
    /// The failing authorizer outcome, or `None` if the error originates
    /// elsewhere (e.g. entering an abstract layer).
    pub authorizer_error: Option<AuthOutcome>,
    /// Snapshot of the request at failure time.
    pub request_dump: Value,
}

impl ErrorBundle {
    /// Builds a bundle, validating the caller's field set.
    ///
    /// `keys` must match [`ERROR_BUNDLE_KEYS`] exactly, in order; anything
    /// else fails with [`ChainError::ImproperBundle`]. The check keeps a
    /// layer that overrides its bundle key list from silently producing a
    /// dump the host cannot correlate.
    pub fn bundle(
        keys: &[&str],
        middleware_stack: Vec<String>,
        layer: impl Into<String>,
        authorizer_error: Option<AuthOutcome>,
        request_dump: Value,
    ) -> ChainResult<Self> {
        if keys != &ERROR_BUNDLE_KEYS[..] {
            return Err(ChainError::improper_bundle(keys));
        }
        Ok(Self {
            middleware_stack,
            layer: layer.into(),
            authorizer_error,
            request_dump,
        })
    }
}
