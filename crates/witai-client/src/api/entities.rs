//! Entities API.

use crate::client::WitClient;
use crate::error::Result;
use crate::normalize::Normalize;
use crate::types::{Entity, EntityCreateRequest};

/// Entities API client.
pub struct EntitiesApi {
    client: WitClient,
}

impl EntitiesApi {
    pub(crate) fn new(client: WitClient) -> Self {
        Self { client }
    }

    /// List all entities of the app.
    pub async fn list(&self) -> Result<Vec<Entity>> {
        let mut entities: Vec<Entity> = self.client.get(&["entities"]).await?;
        entities.normalize();
        Ok(entities)
    }

    /// Create an entity with roles only.
    ///
    /// Wit always adds a default role named after the entity.
    pub async fn create(&self, name: &str, roles: Vec<String>) -> Result<Entity> {
        self.create_with(name, roles, None, None).await
    }

    /// Create an entity with lookup strategies and keywords.
    ///
    /// Use the `wit$` prefix in `name` for built-in entities. `lookups` and
    /// `keywords` are sent as empty lists when `None`.
    pub async fn create_with(
        &self,
        name: &str,
        roles: Vec<String>,
        lookups: Option<Vec<String>>,
        keywords: Option<Vec<serde_json::Value>>,
    ) -> Result<Entity> {
        let request = EntityCreateRequest::new(name, roles, lookups, keywords);
        let mut entity: Entity = self.client.post(&["entities"], &request).await?;
        if self.client.normalization().applies_to_single() {
            entity.normalize();
        }
        Ok(entity)
    }
}
