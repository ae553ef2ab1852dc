//! Client configuration

/// Client configuration for connecting to the schedule store
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Store base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Bearer token for authentication.
    ///
    /// Retrieved from client-local storage by the host application; a
    /// missing token aborts any persistence call before the request is
    /// made.
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> super::HttpClient {
        super::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let config = ClientConfig::new("https://store.example")
            .with_token("tok-1")
            .with_timeout(5);
        assert_eq!(config.base_url, "https://store.example");
        assert_eq!(config.token.as_deref(), Some("tok-1"));
        assert_eq!(config.timeout, 5);
    }

    #[test]
    fn test_default_has_no_token() {
        let config = ClientConfig::default();
        assert!(config.token.is_none());
        assert_eq!(config.timeout, 30);
    }
}
