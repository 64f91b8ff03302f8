//! # Cerberus Core
//!
//! Core data contracts for the Cerberus authorization chain.
//!
//! This crate provides the types shared by every layer of the chain:
//!
//! - [`Request`] / [`Response`] - Order-preserving key-value messages
//! - [`AuthOutcome`] - The `(code, detail)` pair produced by an authorizer
//! - [`Authorizer`] - The pluggable authorization rule trait
//! - [`ErrorBundle`] - Structured failure context (trace, layer, outcome, dump)
//! - [`ChainError`] - Standard error type for chain traversal
//! - [`ChainConfig`] - Safe-code set and token-header configuration

#![doc(html_root_url = "https://docs.rs/cerberus-core/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod authorizer;
mod bundle;
mod config;
mod error;
mod message;

pub use authorizer::{code, AuthOutcome, Authorizer};
pub use bundle::{ErrorBundle, ERROR_BUNDLE_KEYS};
pub use config::{ChainConfig, DEFAULT_TOKEN_HEADER};
pub use error::{ChainError, ChainResult};
pub use message::{Request, Response, TRACE_FIELD};
