//! Per-type layer singletons.
//!
//! Each concrete layer is a type, not an instance: the registry maps a layer
//! type to its single lazily-built instance plus that instance's authorizer
//! list. The cell is written at most once per chain lifetime and read-only
//! thereafter; the write path is guarded so concurrent first entries cannot
//! build two instances or double-instantiate authorizers.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::chain::Chain;
use crate::layer::Layer;
use cerberus_core::{Authorizer, ChainResult, Request, Response};

/// Object-safe view of a layer singleton and its cached authorizers.
pub(crate) trait ErasedLayer: Send + Sync {
    fn name(&self) -> &'static str;
    fn authorizers(&self) -> &[Box<dyn Authorizer>];
    fn process(&self, request: &mut Request, response: &mut Response);
    fn delegate(
        &self,
        chain: &Chain,
        request: &mut Request,
        response: Response,
    ) -> ChainResult<Response>;
}

/// A built layer plus its authorizer instances, cached together.
struct LayerCell<L: Layer> {
    layer: L,
    authorizers: Vec<Box<dyn Authorizer>>,
}

impl<L: Layer> ErasedLayer for LayerCell<L> {
    fn name(&self) -> &'static str {
        L::NAME
    }

    fn authorizers(&self) -> &[Box<dyn Authorizer>] {
        &self.authorizers
    }

    fn process(&self, request: &mut Request, response: &mut Response) {
        self.layer.process(request, response);
    }

    fn delegate(
        &self,
        chain: &Chain,
        request: &mut Request,
        response: Response,
    ) -> ChainResult<Response> {
        self.layer.delegate(chain, request, response)
    }
}

/// Registry of per-type layer cells.
#[derive(Default)]
pub(crate) struct Registry {
    cells: RwLock<HashMap<TypeId, Arc<dyn ErasedLayer>>>,
}

impl Registry {
    /// Returns the cell for `L`, building it on first use.
    pub(crate) fn get_or_init<L: Layer>(&self) -> Arc<dyn ErasedLayer> {
        let key = TypeId::of::<L>();
        if let Some(cell) = self.cells.read().get(&key) {
            return Arc::clone(cell);
        }

        let mut cells = self.cells.write();
        Arc::clone(cells.entry(key).or_insert_with(|| {
            debug!(layer = L::NAME, "building layer singleton");
            let layer = L::build();
            let authorizers = layer.authorizers();
            Arc::new(LayerCell { layer, authorizers })
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static BUILDS: AtomicUsize = AtomicUsize::new(0);

    struct Counted;

    impl Layer for Counted {
        const NAME: &'static str = "counted";

        fn build() -> Self {
            BUILDS.fetch_add(1, Ordering::SeqCst);
            Self
        }

        fn delegate(
            &self,
            _chain: &Chain,
            _request: &mut Request,
            response: Response,
        ) -> ChainResult<Response> {
            Ok(response)
        }
    }

    #[test]
    fn get_or_init_builds_exactly_once() {
        let registry = Registry::default();

        let first = registry.get_or_init::<Counted>();
        let second = registry.get_or_init::<Counted>();

        assert_eq!(BUILDS.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.name(), "counted");
    }
}
