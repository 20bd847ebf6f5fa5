//! Language detection API.

use crate::client::WitClient;
use crate::error::Result;
use crate::types::LocaleDetectionResult;

/// Query parameters for `GET /language`.
///
/// Wit documents `q` as 0-280 characters and `n` as at most 8. Neither is
/// checked here; out-of-range values are rejected by the server.
#[derive(Debug, Default, serde::Serialize)]
pub struct DetectLocaleQuery {
    /// Text to classify.
    pub q: String,
    /// Maximum number of locales to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<u32>,
}

/// Language API client.
pub struct LanguageApi {
    client: WitClient,
}

impl LanguageApi {
    pub(crate) fn new(client: WitClient) -> Self {
        Self { client }
    }

    /// Detect the locales of a piece of text.
    pub async fn detect(&self, query: &str) -> Result<LocaleDetectionResult> {
        self.detect_with_query(DetectLocaleQuery {
            q: query.to_string(),
            ..Default::default()
        })
        .await
    }

    /// Detect locales, returning at most `max` candidates.
    pub async fn detect_with_max(&self, query: &str, max: u32) -> Result<LocaleDetectionResult> {
        self.detect_with_query(DetectLocaleQuery {
            q: query.to_string(),
            n: Some(max),
        })
        .await
    }

    /// Detect locales with explicit query parameters.
    pub async fn detect_with_query(
        &self,
        query: DetectLocaleQuery,
    ) -> Result<LocaleDetectionResult> {
        self.client.get_with_query(&["language"], &query).await
    }
}
