//! The terminal view layer.

use crate::authorizers::{ApiAuthorizer, SafeMethodAuthorizer};
use crate::chain::Chain;
use crate::layer::Layer;
use cerberus_core::{Authorizer, ChainResult, Request, Response};

/// Terminal layer guarding access to application views.
///
/// Authorizes the request method against the safe-method set and general
/// API access, then hands off to the chain's [`Router`](crate::Router) and
/// returns its result directly.
#[derive(Debug, Clone, Copy)]
pub struct ViewLayer;

impl Layer for ViewLayer {
    const NAME: &'static str = "view";

    fn build() -> Self {
        Self
    }

    fn authorizers(&self) -> Vec<Box<dyn Authorizer>> {
        vec![
            Box::new(SafeMethodAuthorizer::default()),
            Box::new(ApiAuthorizer::default()),
        ]
    }

    fn delegate(
        &self,
        chain: &Chain,
        request: &mut Request,
        response: Response,
    ) -> ChainResult<Response> {
        Ok(chain.router().route(request, response))
    }
}
