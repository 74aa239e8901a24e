//! Public configuration for the command dispatcher.

use std::time::Duration;

/// Configuration for the task API client.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use taskbot_dispatch::DispatchConfig;
///
/// let config = DispatchConfig::new()
///     .with_base_url("http://tasks.internal:8000/tasks/")
///     .with_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// Base URL of the task collection endpoint.
    pub(crate) base_url: String,
    /// Request timeout. An explicit value, not the transport default.
    pub(crate) timeout: Duration,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000/tasks/".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl DispatchConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the task collection endpoint.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout. Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_local_service() {
        let config = DispatchConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:8000/tasks/");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn builders_override_fields() {
        let config = DispatchConfig::new()
            .with_base_url("http://example.com/tasks/")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.base_url, "http://example.com/tasks/");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
