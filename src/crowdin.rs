//! Crowdin translation status client
//!
//! Thin wrapper over the Crowdin API v2 "project progress" endpoint with
//! transparent exhaustive pagination. The [`TranslationStatus`] trait is
//! the seam the pipeline runs against, so tests can substitute a mock.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::LanguageProgress;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Page size for the progress endpoint (Crowdin's maximum)
const PAGE_LIMIT: usize = 500;

/// Source of per-language translation progress
#[async_trait]
pub trait TranslationStatus: Send + Sync {
    /// Fetch progress for every target language of the project, across
    /// all pages, sorted descending by completion percentage.
    async fn project_progress(&self) -> Result<Vec<LanguageProgress>>;
}

/// Crowdin API client using reqwest
pub struct CrowdinClient {
    client: Client,
    token: String,
    base_url: String,
    project_id: u64,
}

#[derive(Deserialize)]
struct ProgressResponse {
    data: Vec<ProgressItem>,
}

#[derive(Deserialize)]
struct ProgressItem {
    data: LanguageProgress,
}

impl CrowdinClient {
    /// Create a new client from the runtime configuration
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token: config.token.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            project_id: config.project_id,
        }
    }

    fn progress_url(&self) -> String {
        format!(
            "{}/projects/{}/languages/progress",
            self.base_url, self.project_id
        )
    }

    async fn fetch_page(&self, offset: usize) -> Result<Vec<LanguageProgress>> {
        let response = self
            .client
            .get(self.progress_url())
            .bearer_auth(&self.token)
            .query(&[("limit", PAGE_LIMIT.to_string()), ("offset", offset.to_string())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::CrowdinApi {
                status: status.as_u16(),
                body,
            });
        }

        let page: ProgressResponse = response.json().await?;
        Ok(page.data.into_iter().map(|item| item.data).collect())
    }
}

#[async_trait]
impl TranslationStatus for CrowdinClient {
    async fn project_progress(&self) -> Result<Vec<LanguageProgress>> {
        let mut languages = Vec::new();

        // Keep paging until a short page signals the end
        loop {
            let page = self.fetch_page(languages.len()).await?;
            let page_len = page.len();
            debug!(offset = languages.len(), page_len, "fetched progress page");
            languages.extend(page);
            if page_len < PAGE_LIMIT {
                break;
            }
        }

        languages.sort_by(|a, b| b.translation_progress.cmp(&a.translation_progress));
        Ok(languages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(base_url: &str) -> Config {
        Config {
            token: "test-token".to_string(),
            project_id: 104,
            base_url: base_url.to_string(),
        }
    }

    fn page_body(entries: &[(&str, u8)]) -> String {
        let items: Vec<serde_json::Value> = entries
            .iter()
            .map(|(id, progress)| {
                serde_json::json!({
                    "data": { "languageId": id, "translationProgress": progress }
                })
            })
            .collect();
        serde_json::json!({
            "data": items,
            "pagination": { "offset": 0, "limit": PAGE_LIMIT }
        })
        .to_string()
    }

    #[tokio::test]
    async fn fetches_and_sorts_descending() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/projects/104/languages/progress")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("limit".into(), "500".into()),
                mockito::Matcher::UrlEncoded("offset".into(), "0".into()),
            ]))
            .match_header("authorization", "Bearer test-token")
            .with_status(200)
            .with_body(page_body(&[("de", 50), ("fr", 95), ("es", 80)]))
            .create_async()
            .await;

        let client = CrowdinClient::new(&config_for(&server.url()));
        let languages = client.project_progress().await.unwrap();

        mock.assert_async().await;
        let ids: Vec<&str> = languages.iter().map(|l| l.language_id.as_str()).collect();
        assert_eq!(ids, vec!["fr", "es", "de"]);
    }

    #[tokio::test]
    async fn non_success_status_is_an_api_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/projects/104/languages/progress")
            .match_query(mockito::Matcher::Any)
            .with_status(401)
            .with_body(r#"{"error":{"message":"Unauthorized"}}"#)
            .create_async()
            .await;

        let client = CrowdinClient::new(&config_for(&server.url()));
        let err = client.project_progress().await.unwrap_err();

        assert!(matches!(err, Error::CrowdinApi { status: 401, .. }));
    }

    #[tokio::test]
    async fn short_page_ends_pagination() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/projects/104/languages/progress")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(page_body(&[("uk", 100)]))
            .expect(1)
            .create_async()
            .await;

        let client = CrowdinClient::new(&config_for(&server.url()));
        let languages = client.project_progress().await.unwrap();

        mock.assert_async().await;
        assert_eq!(languages.len(), 1);
    }

    #[test]
    fn trailing_slash_on_base_url_is_trimmed() {
        let client = CrowdinClient::new(&config_for("https://api.crowdin.com/api/v2/"));
        assert_eq!(
            client.progress_url(),
            "https://api.crowdin.com/api/v2/projects/104/languages/progress"
        );
    }
}
