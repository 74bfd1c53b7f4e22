use crate::utils::error::{QuickstartError, Result};
use crate::utils::validation::validate_url;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use std::sync::atomic::{AtomicI32, Ordering};

pub const THRIFT_CONTENT_TYPE: &str = "application/x-thrift";
pub const USER_AGENT: &str = concat!("edam-quickstart/", env!("CARGO_PKG_VERSION"));

/// Thrift-over-HTTP transport: every message is a single POST whose response
/// body holds the reply.
#[derive(Debug)]
pub struct THttpTransport {
    client: Client,
    url: String,
    sequence: AtomicI32,
}

impl THttpTransport {
    pub fn open(url: &str) -> Result<Self> {
        validate_url("endpoint", url)?;
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        tracing::debug!("Opened Thrift HTTP transport to {}", url);
        Ok(Self {
            client,
            url: url.to_string(),
            sequence: AtomicI32::new(0),
        })
    }

    pub fn next_sequence(&self) -> i32 {
        self.sequence.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub async fn round_trip(&self, payload: Vec<u8>) -> Result<Vec<u8>> {
        tracing::debug!("POST {} ({} bytes)", self.url, payload.len());
        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, THRIFT_CONTENT_TYPE)
            .header(ACCEPT, THRIFT_CONTENT_TYPE)
            .body(payload)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);
        if !status.is_success() {
            return Err(QuickstartError::HttpStatus {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }

    /// Drops the connection pool. Sequence ids are not reused afterwards
    /// because the transport is consumed.
    pub fn close(self) {
        tracing::debug!(
            "Closing Thrift HTTP transport to {} after {} calls",
            self.url,
            self.sequence.load(Ordering::Relaxed)
        );
        drop(self.client);
    }
}
