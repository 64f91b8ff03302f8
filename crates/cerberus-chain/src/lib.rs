//! # Cerberus Chain
//!
//! The layered authorization chain.
//!
//! Every inbound request traverses a chain of layers. Entering a layer
//! always follows the same fixed order:
//!
//! ```text
//! trace append → abstract guard → singleton lookup → authorize → process → delegate
//! ```
//!
//! A layer's `delegate` decides the chain's shape: it can return a response
//! directly (terminal or short-circuit) or recursively re-enter the chain on
//! further layer types. The default wiring is:
//!
//! ```text
//! Request → IdentityLayer ─┬─ short-circuit: fresh token response
//!                          └─ ViewLayer → Router
//! ```
//!
//! ## Example
//!
//! ```
//! use cerberus_chain::{Chain, IdentityLayer};
//! use cerberus_core::{Request, Response};
//!
//! let chain = Chain::builder().build();
//!
//! let mut request = Request::new();
//! request.set_param("method", "GET");
//! request.set_param("api_key", "k-123");
//! request.set_param("x-auth-token", vec!["Bearer", "tok-123"]);
//!
//! let response = chain
//!     .process_request::<IdentityLayer>(&mut request, Response::new())
//!     .expect("authorized request traverses the chain");
//! assert_eq!(request.trace(), vec!["identity", "view"]);
//! # drop(response);
//! ```

#![doc(html_root_url = "https://docs.rs/cerberus-chain/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod authorizers;
mod chain;
mod layer;
pub mod layers;
mod registry;
mod routing;
mod stacked;

pub use chain::{Chain, ChainBuilder};
pub use layer::{enter, Layer, LayerEntry};
pub use layers::{IdentityLayer, ViewLayer};
pub use routing::{PassthroughRouter, Router};
pub use stacked::Stacked;
