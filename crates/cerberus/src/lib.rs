//! # Cerberus
//!
//! **Layered request-authorization chain**
//!
//! Cerberus intercepts every request for authorization before it reaches an
//! application backend. Each layer in the chain authorizes the request
//! against its own ordered authorizer list before handling it or delegating
//! further:
//!
//! ```text
//! Request → IdentityLayer ─┬─ short-circuit: fresh token response
//!                          └─ ViewLayer → Router (application handoff)
//! ```
//!
//! ## Quick start
//!
//! ```
//! use cerberus::prelude::*;
//!
//! let chain = Chain::builder().build();
//!
//! let mut request = Request::new();
//! request.set_param("method", "GET");
//! request.set_param("x-auth-token", vec!["Bearer", "tok-123"]);
//! request.set_param("requesting_authentication", true);
//!
//! let response = chain
//!     .process_request::<IdentityLayer>(&mut request, Response::new())
//!     .expect("token request short-circuits");
//! assert!(response.param("x-auth-token").is_some());
//! ```

#![doc(html_root_url = "https://docs.rs/cerberus/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core data contracts
pub use cerberus_core as core;

// Re-export the chain
pub use cerberus_chain as chain;

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use cerberus_chain::{
        enter, Chain, ChainBuilder, IdentityLayer, Layer, LayerEntry, PassthroughRouter, Router,
        Stacked, ViewLayer,
    };
    pub use cerberus_core::{
        AuthOutcome, Authorizer, ChainConfig, ChainError, ChainResult, ErrorBundle, Request,
        Response,
    };
}
