//! Intents API.

use crate::client::WitClient;
use crate::error::{Error, Result};
use crate::normalize::{intent_slug, Normalize};
use crate::types::{CreateIntentRequest, Intent};

/// Intents API client.
pub struct IntentsApi {
    client: WitClient,
}

impl IntentsApi {
    pub(crate) fn new(client: WitClient) -> Self {
        Self { client }
    }

    /// List all intents of the app.
    pub async fn list(&self) -> Result<Vec<Intent>> {
        let mut intents: Vec<Intent> = self.client.get(&["intents"]).await?;
        intents.normalize();
        Ok(intents)
    }

    /// Get an intent by name.
    pub async fn get(&self, name: &str) -> Result<Intent> {
        let name = non_empty(name)?;
        let intent = self.client.get(&["intents", name]).await?;
        Ok(self.finish(intent))
    }

    /// Create an intent.
    ///
    /// The name is lowercased and each space replaced with an underscore, so
    /// `"Book Flight"` is created as `book_flight`.
    pub async fn create(&self, name: &str) -> Result<Intent> {
        let request = CreateIntentRequest {
            name: intent_slug(name),
        };
        let intent = self.client.post(&["intents"], &request).await?;
        Ok(self.finish(intent))
    }

    /// Permanently delete an intent.
    pub async fn delete(&self, name: &str) -> Result<()> {
        let name = non_empty(name)?;
        self.client.delete(&["intents", name]).await
    }

    fn finish(&self, mut intent: Intent) -> Intent {
        if self.client.normalization().applies_to_single() {
            intent.normalize();
        }
        intent
    }
}

fn non_empty(name: &str) -> Result<&str> {
    if name.is_empty() {
        Err(Error::InvalidInput("intent name must not be empty".to_string()))
    } else {
        Ok(name)
    }
}
