//! The identity layer.

use serde_json::Value;
use tracing::debug;

use crate::authorizers::Authenticator;
use crate::chain::Chain;
use crate::layer::{enter, Layer, LayerEntry};
use crate::layers::view::ViewLayer;
use crate::stacked::Stacked;
use cerberus_core::{Authorizer, ChainResult, Request, Response};

/// Stacked layer authenticating the caller.
///
/// Both of its outcomes are authorized by the same [`Authenticator`] check
/// but diverge in delegation: a request that is specifically asking for a
/// fresh token ("give me a token") short-circuits with the token copied
/// into the response under the configured token header, bypassing the
/// stacked sub-chain entirely; a normal authorized call ("use a token to
/// reach the view") falls through to the stacked [`ViewLayer`].
#[derive(Debug, Clone, Copy)]
pub struct IdentityLayer;

impl Layer for IdentityLayer {
    const NAME: &'static str = "identity";

    fn build() -> Self {
        Self
    }

    fn authorizers(&self) -> Vec<Box<dyn Authorizer>> {
        vec![Box::new(Authenticator::default())]
    }

    fn delegate(
        &self,
        chain: &Chain,
        request: &mut Request,
        mut response: Response,
    ) -> ChainResult<Response> {
        if Authenticator::is_requesting_authentication(request) {
            let header = chain.config().token_header();
            let token = Authenticator::token_value(request, header).unwrap_or(Value::Null);
            response.set_param(header, token);
            debug!(layer = Self::NAME, "short-circuiting with token response");
            return Ok(response);
        }
        self.delegate_stack(chain, request, response)
    }
}

impl Stacked for IdentityLayer {
    const STACK: &'static [LayerEntry] = &[enter::<ViewLayer>];
}
