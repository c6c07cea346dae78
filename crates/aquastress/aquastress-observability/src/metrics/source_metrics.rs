use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Success and failure counts for one provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderCounts {
    pub successes: u64,
    pub declines: u64,
    pub failures: u64,
}

/// Per-provider outcome counters, keyed by provider name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceMetrics {
    providers: BTreeMap<String, ProviderCounts>,
}

impl SourceMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&mut self, provider: &str) {
        self.entry(provider).successes += 1;
    }

    /// The provider answered but had no complete observation.
    pub fn record_decline(&mut self, provider: &str) {
        self.entry(provider).declines += 1;
    }

    pub fn record_failure(&mut self, provider: &str) {
        self.entry(provider).failures += 1;
    }

    pub fn get(&self, provider: &str) -> ProviderCounts {
        self.providers.get(provider).copied().unwrap_or_default()
    }

    pub fn providers(&self) -> impl Iterator<Item = (&str, &ProviderCounts)> {
        self.providers.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn entry(&mut self, provider: &str) -> &mut ProviderCounts {
        self.providers.entry(provider.to_string()).or_default()
    }
}
