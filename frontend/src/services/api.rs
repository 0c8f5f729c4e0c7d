use gloo::net::http::Request;
use shared::{Entry, EntryPatch, UpdateError};

use crate::services::config::AppConfig;

/// API client for the ledger entry service
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the configured base URL
    pub fn new() -> Self {
        Self {
            base_url: AppConfig::from_build_env().api_base_url,
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn entries_url(&self) -> String {
        format!("{}/api/entries", self.base_url)
    }

    pub fn entry_url(&self, id: &str) -> String {
        format!("{}/api/entries/{}", self.base_url, id)
    }

    /// Get all ledger entries
    pub async fn list_entries(&self) -> Result<Vec<Entry>, String> {
        match Request::get(&self.entries_url()).send().await {
            Ok(response) => {
                if response.ok() {
                    match response.json::<Vec<Entry>>().await {
                        Ok(entries) => Ok(entries),
                        Err(e) => Err(format!("Failed to parse entries: {}", e)),
                    }
                } else {
                    let status = response.status();
                    let error_text = response.text().await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(format!("Server error {}: {}", status, error_text))
                }
            }
            Err(e) => Err(format!("Failed to fetch entries: {}", e)),
        }
    }

    /// Apply `patch` to the entry with `id`.
    ///
    /// `Ok(None)` when the service has no such entry; any other non-success
    /// status is an error.
    pub async fn update_entry(&self, id: &str, patch: &EntryPatch) -> Result<Option<Entry>, UpdateError> {
        let response = Request::patch(&self.entry_url(id))
            .json(patch)
            .map_err(|e| UpdateError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| UpdateError::Network(e.to_string()))?;

        if response.status() == 404 {
            return Ok(None);
        }

        if !response.ok() {
            let message = response.text().await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(UpdateError::Server {
                status: response.status(),
                message,
            });
        }

        response
            .json::<Entry>()
            .await
            .map(Some)
            .map_err(|e| UpdateError::Decode(e.to_string()))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_urls() {
        let client = ApiClient::with_base_url("https://ledger.example.com/".to_string());
        assert_eq!(client.entries_url(), "https://ledger.example.com/api/entries");
        assert_eq!(client.entry_url("abc-123"), "https://ledger.example.com/api/entries/abc-123");
    }

    #[test]
    fn test_default_client_uses_config() {
        let client = ApiClient::new();
        assert_eq!(client.entries_url(), format!("{}/api/entries", AppConfig::from_build_env().api_base_url));
    }
}
