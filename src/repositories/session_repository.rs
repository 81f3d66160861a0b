use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use log::info;
use mongodb::{
    bson::doc,
    options::{IndexOptions, ReplaceOptions},
    Collection, IndexModel,
};
use tokio::sync::RwLock;

use crate::{db::Database, errors::AppResult, models::domain::ChatSession};

#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// The live session for `user_id`; expired sessions are reported as absent.
    async fn get(&self, user_id: &str) -> AppResult<Option<ChatSession>>;
    async fn save(&self, session: ChatSession) -> AppResult<ChatSession>;
    /// Returns whether a session was removed.
    async fn delete(&self, user_id: &str) -> AppResult<bool>;
}

pub struct MongoSessionRepository {
    collection: Collection<ChatSession>,
}

impl MongoSessionRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let user_id_options = IndexOptions::builder().unique(true).build();
        let user_id_model = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(user_id_options)
            .build();
        self.collection.create_index(user_id_model).await?;
        info!("Created unique index on chat_sessions.user_id");

        // Documents expire as soon as their own expires_at passes.
        let ttl_options = IndexOptions::builder()
            .expire_after(Duration::from_secs(0))
            .build();
        let ttl_model = IndexModel::builder()
            .keys(doc! { "expires_at": 1 })
            .options(ttl_options)
            .build();
        self.collection.create_index(ttl_model).await?;
        info!("Created TTL index on chat_sessions.expires_at");

        Ok(())
    }
}

#[async_trait]
impl SessionRepository for MongoSessionRepository {
    async fn get(&self, user_id: &str) -> AppResult<Option<ChatSession>> {
        let session = self
            .collection
            .find_one(doc! { "user_id": user_id })
            .await?;
        // The TTL monitor only runs periodically.
        Ok(session.filter(|s| !s.is_expired()))
    }

    async fn save(&self, session: ChatSession) -> AppResult<ChatSession> {
        let options = ReplaceOptions::builder().upsert(true).build();
        self.collection
            .replace_one(doc! { "user_id": &session.user_id }, &session)
            .with_options(options)
            .await?;
        Ok(session)
    }

    async fn delete(&self, user_id: &str) -> AppResult<bool> {
        let result = self
            .collection
            .delete_one(doc! { "user_id": user_id })
            .await?;
        Ok(result.deleted_count > 0)
    }
}

#[derive(Default)]
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<String, ChatSession>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn get(&self, user_id: &str) -> AppResult<Option<ChatSession>> {
        let sessions = self.sessions.read().await;
        Ok(sessions
            .get(user_id)
            .filter(|s| !s.is_expired())
            .cloned())
    }

    async fn save(&self, session: ChatSession) -> AppResult<ChatSession> {
        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, s| !s.is_expired());
        sessions.insert(session.user_id.clone(), session.clone());
        Ok(session)
    }

    async fn delete(&self, user_id: &str) -> AppResult<bool> {
        let mut sessions = self.sessions.write().await;
        Ok(sessions
            .remove(user_id)
            .is_some_and(|s| !s.is_expired()))
    }
}
