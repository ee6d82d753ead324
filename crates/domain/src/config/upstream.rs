use serde::{Deserialize, Serialize};

/// DNS-over-HTTPS JSON resolver used for recursive answers.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_url")]
    pub url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_url() -> String {
    "https://dns.google/resolve".to_string()
}

fn default_timeout_secs() -> u64 {
    5
}
