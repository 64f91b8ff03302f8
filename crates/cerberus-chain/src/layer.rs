//! The per-layer contract.

use crate::chain::Chain;
use cerberus_core::{Authorizer, ChainResult, Request, Response};

/// One stage in the authorization chain, identified by its type.
///
/// A layer supplies three things: its authorizer list (built once per type,
/// when the chain first enters the layer), a `process` hook for layer-local
/// side effects, and a `delegate` hook that decides what happens next.
///
/// # Invariants
///
/// - `process` may mutate request and response but must not decide
///   delegation.
/// - `delegate` either returns a response directly or re-enters
///   [`Chain::process_request`] on further layer types; it must not skip the
///   entry point when forwarding, or the forwarded layer would evade its own
///   authorization.
///
/// Types that only exist to be composed, never entered, set
/// [`ABSTRACT`](Self::ABSTRACT) and are rejected by the entry point before
/// any instantiation or authorization work. The idiomatic shape for such a
/// type is an uninhabited enum, which also makes it non-constructible at
/// compile time.
pub trait Layer: Send + Sync + 'static {
    /// Unique name of this layer type, recorded in the execution trace.
    const NAME: &'static str;

    /// Marks a compose-only type that must never be entered.
    const ABSTRACT: bool = false;

    /// Builds the singleton instance. Called at most once per chain.
    fn build() -> Self
    where
        Self: Sized;

    /// Instantiates this layer's ordered authorizer list.
    ///
    /// Called once, right after [`build`](Self::build); the instances are
    /// cached on the layer's registry cell, not rebuilt per request.
    fn authorizers(&self) -> Vec<Box<dyn Authorizer>> {
        Vec::new()
    }

    /// Layer-local side effects, after authorization and before delegation.
    fn process(&self, request: &mut Request, response: &mut Response) {
        let _ = (request, response);
    }

    /// Decides what happens next: return a response directly (terminal or
    /// short-circuit) or re-enter the chain on further layer types.
    fn delegate(
        &self,
        chain: &Chain,
        request: &mut Request,
        response: Response,
    ) -> ChainResult<Response>;
}

/// A monomorphized chain entry, usable in ordered sub-layer lists.
pub type LayerEntry = fn(&Chain, &mut Request, Response) -> ChainResult<Response>;

/// Enters the chain on layer type `L`.
///
/// This is [`Chain::process_request`] as a free function, so `enter::<L>`
/// coerces to a [`LayerEntry`] in `const` sub-layer lists:
///
/// ```ignore
/// const STACK: &'static [LayerEntry] = &[enter::<ViewLayer>];
/// ```
pub fn enter<L: Layer>(
    chain: &Chain,
    request: &mut Request,
    response: Response,
) -> ChainResult<Response> {
    chain.process_request::<L>(request, response)
}
