//! Transport layer: blocking HTTP client with retry/backoff.

pub mod http_client;

pub use http_client::{HttpClient, HttpClientConfig};
