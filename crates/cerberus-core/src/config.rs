//! Configuration for the authorization chain.

use std::collections::HashSet;

use crate::authorizer::code;

/// Default name of the request/response field carrying the auth token.
pub const DEFAULT_TOKEN_HEADER: &str = "x-auth-token";

/// Externally supplied configuration, read-only to the chain core.
#[derive(Debug, Clone)]
pub struct ChainConfig {
    /// Result codes that count as passing an authorizer.
    safe_codes: HashSet<u16>,
    /// Field under which tokens travel in requests and responses.
    token_header: String,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            safe_codes: HashSet::from([code::OK]),
            token_header: DEFAULT_TOKEN_HEADER.to_string(),
        }
    }
}

impl ChainConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the safe-code set.
    #[must_use]
    pub fn with_safe_codes(mut self, codes: impl IntoIterator<Item = u16>) -> Self {
        self.safe_codes = codes.into_iter().collect();
        self
    }

    /// Replaces the token-header field name.
    #[must_use]
    pub fn with_token_header(mut self, header: impl Into<String>) -> Self {
        self.token_header = header.into();
        self
    }

    /// Returns `true` if the code counts as passing.
    #[must_use]
    pub fn is_safe(&self, code: u16) -> bool {
        self.safe_codes.contains(&code)
    }

    /// Returns the token-header field name.
    #[must_use]
    pub fn token_header(&self) -> &str {
        &self.token_header
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_treats_ok_as_safe() {
        let config = ChainConfig::default();
        assert!(config.is_safe(code::OK));
        assert!(!config.is_safe(code::UNAUTHENTICATED));
        assert_eq!(config.token_header(), DEFAULT_TOKEN_HEADER);
    }

    #[test]
    fn safe_codes_are_replaceable() {
        let config = ChainConfig::new().with_safe_codes([0, 200, 204]);
        assert!(config.is_safe(0));
        assert!(config.is_safe(204));
        assert!(!config.is_safe(403));
    }

    #[test]
    fn token_header_is_replaceable() {
        let config = ChainConfig::new().with_token_header("authorization");
        assert_eq!(config.token_header(), "authorization");
    }
}
