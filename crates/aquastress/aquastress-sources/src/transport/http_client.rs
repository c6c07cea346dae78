//! HTTP client with retry, exponential backoff, timeout, and gzip compression.

use std::time::Duration;

use aquastress_core::config::SourcesConfig;
use aquastress_core::errors::SourceError;

/// Configuration for the HTTP transport layer.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum number of retry attempts.
    pub max_retries: u32,
    /// Initial backoff duration (doubles each retry).
    pub initial_backoff: Duration,
    /// Maximum backoff duration.
    pub max_backoff: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self::from(&SourcesConfig::default())
    }
}

impl From<&SourcesConfig> for HttpClientConfig {
    fn from(c: &SourcesConfig) -> Self {
        Self {
            timeout: Duration::from_secs(c.timeout_secs),
            max_retries: c.max_retries,
            initial_backoff: Duration::from_millis(c.initial_backoff_ms),
            max_backoff: Duration::from_millis(c.max_backoff_ms),
        }
    }
}

/// Backoff before retry `attempt` (1-based), doubling up to `max_backoff`.
pub fn backoff_for_attempt(config: &HttpClientConfig, attempt: u32) -> Duration {
    let mut backoff = config.initial_backoff;
    for _ in 1..attempt {
        backoff = (backoff * 2).min(config.max_backoff);
    }
    backoff.min(config.max_backoff)
}

/// Whether a status is worth retrying: server errors and rate limiting.
pub fn is_retryable_status(status: u16) -> bool {
    status == 429 || (500..600).contains(&status)
}

/// Blocking HTTP transport shared by all providers.
///
/// Construct and drop outside of async contexts; the monitor runs
/// polling cycles on the blocking pool.
#[derive(Debug)]
pub struct HttpClient {
    config: HttpClientConfig,
    client: reqwest::blocking::Client,
}

impl HttpClient {
    pub fn new(config: HttpClientConfig) -> Result<Self, SourceError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .gzip(true)
            .user_agent(concat!("aquastress/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e: reqwest::Error| SourceError::Network {
                provider: "http".to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// GET `url` with query parameters and return the body text.
    ///
    /// Client errors other than 429 fail immediately; network errors and
    /// server errors are retried with backoff.
    pub fn get_text(
        &self,
        provider: &str,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<String, SourceError> {
        let mut last_err = String::new();

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                let backoff = backoff_for_attempt(&self.config, attempt);
                tracing::debug!(
                    provider,
                    attempt,
                    max_retries = self.config.max_retries,
                    backoff_ms = backoff.as_millis() as u64,
                    "retrying request"
                );
                std::thread::sleep(backoff);
            }

            match self.client.get(url).query(query).send() {
                Ok(resp) => {
                    let status = resp.status();
                    if status.is_success() {
                        return resp.text().map_err(|e: reqwest::Error| SourceError::Network {
                            provider: provider.to_string(),
                            reason: format!("reading body failed: {e}"),
                        });
                    }
                    if !is_retryable_status(status.as_u16()) {
                        let body = resp.text().unwrap_or_default();
                        return Err(SourceError::HttpStatus {
                            provider: provider.to_string(),
                            status: status.as_u16(),
                            body: truncate(&body, 200),
                        });
                    }
                    last_err = format!("HTTP {status}");
                }
                Err(e) => {
                    last_err = e.to_string();
                }
            }
        }

        Err(SourceError::RetriesExhausted {
            provider: provider.to_string(),
            attempts: self.config.max_retries + 1,
            last_error: last_err,
        })
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}
