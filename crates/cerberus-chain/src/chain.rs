//! Chain orchestration.
//!
//! [`Chain`] owns the configuration, the terminal [`Router`] collaborator,
//! and the per-type layer registry. Its single entry point,
//! [`Chain::process_request`], sequences every layer entry in the same fixed
//! order; layers re-enter it recursively to delegate, so one request's
//! traversal is a strict call stack.

use tracing::{debug, warn};

use crate::layer::Layer;
use crate::registry::{ErasedLayer, Registry};
use crate::routing::{PassthroughRouter, Router};
use cerberus_core::{
    ChainConfig, ChainError, ChainResult, ErrorBundle, Request, Response, ERROR_BUNDLE_KEYS,
    TRACE_FIELD,
};

/// The authorization chain.
///
/// One `Chain` is shared by the host across requests; the only mutable state
/// it holds is the layer registry, written at most once per layer type.
///
/// # Example
///
/// ```
/// use cerberus_chain::{Chain, ViewLayer};
/// use cerberus_core::{ChainConfig, Request, Response};
///
/// let chain = Chain::builder()
///     .config(ChainConfig::new().with_safe_codes([200, 204]))
///     .build();
///
/// let mut request = Request::new();
/// request.set_param("method", "GET");
/// request.set_param("api_key", "k-123");
///
/// let response = chain.process_request::<ViewLayer>(&mut request, Response::new());
/// assert!(response.is_ok());
/// ```
pub struct Chain {
    config: ChainConfig,
    router: Box<dyn Router>,
    registry: Registry,
}

impl Chain {
    /// Creates a chain builder.
    #[must_use]
    pub fn builder() -> ChainBuilder {
        ChainBuilder::new()
    }

    /// Returns the chain configuration.
    #[must_use]
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Returns the terminal router collaborator.
    #[must_use]
    pub fn router(&self) -> &dyn Router {
        self.router.as_ref()
    }

    /// Processes a request through layer type `L`.
    ///
    /// Fixed order, per entry:
    ///
    /// 1. Append `L::NAME` to the request's execution trace. Unconditional,
    ///    so the trace reflects every attempted entry.
    /// 2. Reject abstract layer types with [`ChainError::AbstractLayer`].
    /// 3. Get or lazily build the layer singleton and its authorizer list.
    /// 4. Authorize: first unsafe outcome fails with
    ///    [`ChainError::Unauthorized`]; errors propagate uncaught.
    /// 5. Run the layer's `process` hook.
    /// 6. Return the result of the layer's `delegate` hook.
    pub fn process_request<L: Layer>(
        &self,
        request: &mut Request,
        mut response: Response,
    ) -> ChainResult<Response> {
        request.append_param(TRACE_FIELD, L::NAME);
        debug!(layer = L::NAME, "entering layer");

        if L::ABSTRACT {
            warn!(layer = L::NAME, "entry attempted on abstract layer");
            return Err(ChainError::abstract_layer(ErrorBundle::bundle(
                &ERROR_BUNDLE_KEYS,
                request.trace(),
                L::NAME,
                None,
                request.snapshot(),
            )?));
        }

        let cell = self.registry.get_or_init::<L>();
        self.authorize(cell.as_ref(), request)?;
        cell.process(request, &mut response);
        cell.delegate(self, request, response)
    }

    /// Evaluates a layer's authorizers in order, failing fast on the first
    /// outcome whose code is outside the safe-code set.
    fn authorize(&self, cell: &dyn ErasedLayer, request: &Request) -> ChainResult<()> {
        for authorizer in cell.authorizers() {
            let outcome = authorizer.authorize(request);
            if !self.config.is_safe(outcome.code) {
                warn!(
                    layer = cell.name(),
                    authorizer = authorizer.name(),
                    code = outcome.code,
                    "authorization failed"
                );
                return Err(ChainError::unauthorized(ErrorBundle::bundle(
                    &ERROR_BUNDLE_KEYS,
                    request.trace(),
                    cell.name(),
                    Some(outcome),
                    request.snapshot(),
                )?));
            }
            debug!(
                layer = cell.name(),
                authorizer = authorizer.name(),
                "authorizer passed"
            );
        }
        Ok(())
    }
}

/// Builder for a [`Chain`].
///
/// Without an application router the chain terminates in a
/// [`PassthroughRouter`], which returns the response unchanged.
pub struct ChainBuilder {
    config: ChainConfig,
    router: Option<Box<dyn Router>>,
}

impl ChainBuilder {
    /// Creates a builder with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ChainConfig::default(),
            router: None,
        }
    }

    /// Sets the chain configuration.
    #[must_use]
    pub fn config(mut self, config: ChainConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the terminal router collaborator.
    #[must_use]
    pub fn router<R: Router + 'static>(mut self, router: R) -> Self {
        self.router = Some(Box::new(router));
        self
    }

    /// Builds the chain.
    #[must_use]
    pub fn build(self) -> Chain {
        Chain {
            config: self.config,
            router: self.router.unwrap_or_else(|| Box::new(PassthroughRouter)),
            registry: Registry::default(),
        }
    }
}

impl Default for ChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}
