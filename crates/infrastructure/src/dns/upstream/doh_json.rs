//! Recursive resolution through a DNS-over-HTTPS JSON API
//! (`application/dns-json`, as served by `https://dns.google/resolve`).
//!
//! ```text
//! GET /resolve?name=example.com.&type=1 HTTP/2
//! Accept: application/dns-json
//!
//! {"Status":0,"Answer":[{"name":"example.com.","type":1,"TTL":300,"data":"93.184.216.34"}]}
//! ```

use async_trait::async_trait;
use ferrous_ns_application::ports::{UpstreamAnswer, UpstreamResolver};
use ferrous_ns_domain::{DomainError, DomainName, RecordType, ResponseCode, UpstreamRecord};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const DNS_JSON_CONTENT_TYPE: &str = "application/dns-json";

#[derive(Debug, Deserialize)]
struct JsonResponse {
    #[serde(rename = "Status")]
    status: u16,
    #[serde(rename = "Answer", default)]
    answer: Vec<JsonRecord>,
    #[serde(rename = "Authority", default)]
    authority: Vec<JsonRecord>,
}

#[derive(Debug, Deserialize)]
struct JsonRecord {
    name: String,
    #[serde(rename = "type")]
    rtype: u16,
    #[serde(rename = "TTL", default)]
    ttl: u32,
    data: String,
}

pub struct DohJsonResolver {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl DohJsonResolver {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .pool_max_idle_per_host(4)
            .build()
            .map_err(|e| {
                DomainError::UpstreamFailure(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            url: url.into(),
            timeout,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl UpstreamResolver for DohJsonResolver {
    async fn resolve(
        &self,
        name: &DomainName,
        record_type: RecordType,
        class: u16,
    ) -> Result<UpstreamAnswer, DomainError> {
        debug!(url = %self.url, name = %name, record_type = %record_type, "Sending DoH JSON query");

        let response = tokio::time::timeout(
            self.timeout,
            self.client
                .get(&self.url)
                .query(&[
                    ("name", name.to_string()),
                    ("type", record_type.code().to_string()),
                ])
                .header("Accept", DNS_JSON_CONTENT_TYPE)
                .send(),
        )
        .await
        .map_err(|_| {
            DomainError::UpstreamFailure(format!("Timeout querying {} for {}", self.url, name))
        })?
        .map_err(|e| {
            DomainError::UpstreamFailure(format!("Request to {} failed: {}", self.url, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::UpstreamFailure(format!(
                "{} returned HTTP {}: {}",
                self.url,
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = tokio::time::timeout(self.timeout, response.bytes())
            .await
            .map_err(|_| {
                DomainError::UpstreamFailure(format!("Timeout reading response from {}", self.url))
            })?
            .map_err(|e| {
                DomainError::UpstreamFailure(format!(
                    "Failed to read response from {}: {}",
                    self.url, e
                ))
            })?;

        let answer = parse_json_answer(&body, class)?;

        debug!(
            name = %name,
            status = %answer.status,
            answers = answer.answers.len(),
            authority = answer.authority.len(),
            "DoH JSON response received"
        );

        Ok(answer)
    }
}

/// Parses a `application/dns-json` body. The JSON format carries no class,
/// so every record takes the class of the question.
pub fn parse_json_answer(body: &[u8], class: u16) -> Result<UpstreamAnswer, DomainError> {
    let response: JsonResponse = serde_json::from_slice(body).map_err(|e| {
        DomainError::UpstreamFailure(format!("Invalid DNS JSON response: {}", e))
    })?;

    let convert = |records: Vec<JsonRecord>| -> Vec<UpstreamRecord> {
        records
            .into_iter()
            .map(|r| UpstreamRecord::new(r.name, r.rtype, class, r.ttl, r.data))
            .collect()
    };

    Ok(UpstreamAnswer {
        status: ResponseCode::from_code((response.status & 0x0F) as u8),
        answers: convert(response.answer),
        authority: convert(response.authority),
    })
}
