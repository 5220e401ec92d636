//! Entry source backed by the blog's JSON API.

use super::{ClientError, EntrySource};
use crate::domain::Entry;
use async_trait::async_trait;
use backoff::future::retry;
use backoff::ExponentialBackoff;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct HttpEntrySource {
    client: Client,
    base_url: String,
}

impl HttpEntrySource {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn entries_url(&self) -> String {
        format!("{}/v1/entries", self.base_url)
    }
}

#[async_trait]
impl EntrySource for HttpEntrySource {
    async fn fetch_entries(&self) -> Result<Vec<Entry>, ClientError> {
        let url = self.entries_url();
        debug!("Fetching entries from {}", url);

        let backoff = ExponentialBackoff {
            max_elapsed_time: Some(Duration::from_secs(10)),
            ..Default::default()
        };

        retry(backoff, || async {
            let response = self.client.get(&url).send().await.map_err(|e| {
                backoff::Error::transient(ClientError::Network(e.to_string()))
            })?;

            let status = response.status();
            if status == 429 {
                return Err(backoff::Error::transient(ClientError::RateLimited));
            }
            if status.is_server_error() {
                return Err(backoff::Error::transient(ClientError::Http {
                    status: status.as_u16(),
                    message: "Server error".to_string(),
                }));
            }
            if !status.is_success() {
                return Err(backoff::Error::permanent(ClientError::Http {
                    status: status.as_u16(),
                    message: "Client error".to_string(),
                }));
            }

            response
                .json::<Vec<Entry>>()
                .await
                .map_err(|e| backoff::Error::permanent(ClientError::Parse(e.to_string())))
        })
        .await
    }
}
