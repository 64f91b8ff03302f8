//! Concrete chain layers.
//!
//! - [`IdentityLayer`] - authenticates the caller; either short-circuits
//!   with a fresh token response or falls through to its stacked sub-chain
//! - [`ViewLayer`] - the chain's default terminal point, handing off to the
//!   application router

pub mod identity;
pub mod view;

pub use identity::IdentityLayer;
pub use view::ViewLayer;
