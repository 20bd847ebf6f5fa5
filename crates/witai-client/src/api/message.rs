//! Message API.

use crate::client::WitClient;
use crate::error::Result;
use crate::normalize::Normalize;
use crate::types::MessageResponse;

/// Query parameters for `GET /message`.
#[derive(Debug, Default, serde::Serialize)]
pub struct MessageQuery {
    /// What the user said.
    pub q: String,
}

/// Message API client.
pub struct MessageApi {
    client: WitClient,
}

impl MessageApi {
    pub(crate) fn new(client: WitClient) -> Self {
        Self { client }
    }

    /// Send an utterance to the app and get its understanding back.
    pub async fn send(&self, query: &str) -> Result<MessageResponse> {
        self.send_with_query(Self::query(query)).await
    }

    /// Send an utterance with explicit query parameters.
    pub async fn send_with_query(&self, query: MessageQuery) -> Result<MessageResponse> {
        let mut response: MessageResponse =
            self.client.get_with_query(&["message"], &query).await?;
        if self.client.normalization().applies_to_single() {
            response.intents.normalize();
        }
        Ok(response)
    }

    /// Send an utterance and return the response body as untyped JSON.
    pub async fn send_raw(&self, query: &str) -> Result<serde_json::Value> {
        self.client
            .get_with_query(&["message"], &Self::query(query))
            .await
    }

    fn query(query: &str) -> MessageQuery {
        MessageQuery {
            q: query.to_string(),
        }
    }
}
