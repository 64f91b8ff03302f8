//! The terminal router collaborator.

use cerberus_core::{Request, Response};

/// Application handoff once authorization succeeds at the view layer.
///
/// Routing internals are outside this crate; the chain only requires that a
/// router consume the request and produce the final response.
pub trait Router: Send + Sync {
    /// Routes an authorized request to its handler.
    fn route(&self, request: &mut Request, response: Response) -> Response;
}

/// Router that returns the response unchanged.
///
/// Wired by default when a chain is built without an application router, so
/// the chain's control flow can be exercised standalone.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughRouter;

impl Router for PassthroughRouter {
    fn route(&self, _request: &mut Request, response: Response) -> Response {
        response
    }
}
