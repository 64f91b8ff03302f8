//! Stacked delegation.

use crate::chain::Chain;
use crate::layer::{Layer, LayerEntry};
use cerberus_core::{ChainResult, Request, Response};

/// A layer whose delegation fans out across an ordered list of sub-layers.
///
/// Stacking lets one layer split authorization concerns (identity first,
/// then view-level checks) without each concern knowing about the others'
/// termination behavior. The provided [`delegate_stack`](Self::delegate_stack)
/// runs the sub-entries in order, feeding each the response produced by the
/// previous one, and returns the last response. A sub-layer that extends the
/// response it was given keeps earlier layers' fields; one that replaces it
/// drops them. A concrete layer that needs different aggregation writes its
/// own `delegate`.
///
/// # Example
///
/// ```ignore
/// impl Stacked for IdentityLayer {
///     const STACK: &'static [LayerEntry] = &[enter::<ViewLayer>];
/// }
/// ```
pub trait Stacked: Layer {
    /// The ordered sub-layer entries processed by
    /// [`delegate_stack`](Self::delegate_stack).
    const STACK: &'static [LayerEntry];

    /// Runs the sub-layers in order, returning the last response.
    fn delegate_stack(
        &self,
        chain: &Chain,
        request: &mut Request,
        mut response: Response,
    ) -> ChainResult<Response> {
        for entry in Self::STACK {
            response = entry(chain, request, response)?;
        }
        Ok(response)
    }
}
