//! Request and response message types.
//!
//! Both types are mutable, order-preserving key-value maps. One [`Request`]
//! is shared by every layer a client call traverses; the [`Response`] is
//! threaded through delegation and filled in by whichever layer terminates
//! (or short-circuits) the chain.
//!
//! The request carries one distinguished field, [`TRACE_FIELD`]: the ordered
//! list of layer names entered so far. It is created on first append and is
//! only ever appended to for the lifetime of a request.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name of the request field holding the execution trace.
pub const TRACE_FIELD: &str = "middleware_stack";

/// An inbound request: a mutable, order-preserving map of named fields.
///
/// Field values are [`serde_json::Value`], so a field can hold a scalar
/// (an auth token, a method name) or an ordered list (the execution trace).
///
/// # Example
///
/// ```
/// use cerberus_core::{Request, TRACE_FIELD};
///
/// let mut request = Request::new();
/// request.set_param("method", "GET");
/// request.append_param(TRACE_FIELD, "identity");
/// request.append_param(TRACE_FIELD, "view");
///
/// assert_eq!(request.trace(), vec!["identity", "view"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Request {
    fields: IndexMap<String, Value>,
}

impl Request {
    /// Creates an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of a named field, if present.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Sets a named field, replacing any previous value.
    pub fn set_param(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Appends a value to a named ordered-list field.
    ///
    /// The list is created if the field is absent. An existing scalar value
    /// becomes the first element of the list, so prior entries are never
    /// clobbered.
    pub fn append_param(&mut self, name: &str, value: impl Into<Value>) {
        match self.fields.get_mut(name) {
            Some(Value::Array(items)) => items.push(value.into()),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value.into()]);
            }
            None => {
                self.fields
                    .insert(name.to_string(), Value::Array(vec![value.into()]));
            }
        }
    }

    /// Returns the execution trace: the layer names recorded under
    /// [`TRACE_FIELD`], in entry order.
    ///
    /// Non-string entries are skipped; a request that has not entered any
    /// layer yields an empty trace.
    #[must_use]
    pub fn trace(&self) -> Vec<String> {
        match self.fields.get(TRACE_FIELD) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| item.as_str().map(ToOwned::to_owned))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Returns a point-in-time dump of every field, for diagnostics.
    #[must_use]
    pub fn snapshot(&self) -> Value {
        serde_json::to_value(&self.fields).unwrap_or(Value::Null)
    }

    /// Returns `true` if the request has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A response under construction: a mutable, order-preserving map of named
/// fields, returned to the caller by the layer that terminates the chain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Response {
    fields: IndexMap<String, Value>,
}

impl Response {
    /// Creates an empty response.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of a named field, if present.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Sets a named field, replacing any previous value.
    pub fn set_param(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Returns `true` if no layer has written to the response yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn set_and_read_param() {
        let mut request = Request::new();
        assert!(request.is_empty());

        request.set_param("method", "GET");
        assert_eq!(request.param("method"), Some(&json!("GET")));
        assert_eq!(request.param("missing"), None);
    }

    #[test]
    fn set_param_replaces_previous_value() {
        let mut request = Request::new();
        request.set_param("method", "GET");
        request.set_param("method", "POST");
        assert_eq!(request.param("method"), Some(&json!("POST")));
    }

    #[test]
    fn append_param_creates_list() {
        let mut request = Request::new();
        request.append_param(TRACE_FIELD, "identity");
        assert_eq!(request.param(TRACE_FIELD), Some(&json!(["identity"])));
    }

    #[test]
    fn append_param_preserves_prior_entries() {
        let mut request = Request::new();
        request.append_param(TRACE_FIELD, "identity");
        request.append_param(TRACE_FIELD, "view");
        assert_eq!(request.trace(), vec!["identity", "view"]);
    }

    #[test]
    fn append_param_promotes_scalar_to_list() {
        let mut request = Request::new();
        request.set_param("tags", "first");
        request.append_param("tags", "second");
        assert_eq!(request.param("tags"), Some(&json!(["first", "second"])));
    }

    #[test]
    fn trace_is_empty_without_entries() {
        let request = Request::new();
        assert!(request.trace().is_empty());
    }

    #[test]
    fn trace_skips_non_string_entries() {
        let mut request = Request::new();
        request.append_param(TRACE_FIELD, "identity");
        request.append_param(TRACE_FIELD, 42);
        request.append_param(TRACE_FIELD, "view");
        assert_eq!(request.trace(), vec!["identity", "view"]);
    }

    #[test]
    fn snapshot_captures_fields() {
        let mut request = Request::new();
        request.set_param("method", "GET");
        request.append_param(TRACE_FIELD, "view");

        let dump = request.snapshot();
        assert_eq!(dump["method"], json!("GET"));
        assert_eq!(dump[TRACE_FIELD], json!(["view"]));
    }

    #[test]
    fn response_starts_empty_and_accepts_fields() {
        let mut response = Response::new();
        assert!(response.is_empty());

        response.set_param("x-auth-token", "tok-123");
        assert_eq!(response.param("x-auth-token"), Some(&json!("tok-123")));
    }

    proptest! {
        /// Appending under an arbitrary sequence never truncates or reorders
        /// the trace: after `n` appends the trace is exactly the appended
        /// sequence, in order.
        #[test]
        fn trace_is_monotonically_appended(entries in proptest::collection::vec("[a-z]{1,12}", 0..32)) {
            let mut request = Request::new();
            for (i, entry) in entries.iter().enumerate() {
                request.append_param(TRACE_FIELD, entry.as_str());
                prop_assert_eq!(request.trace().len(), i + 1);
            }
            prop_assert_eq!(request.trace(), entries);
        }
    }
}
