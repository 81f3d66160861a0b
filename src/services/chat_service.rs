use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{ChatMessage, ChatSession},
    repositories::SessionRepository,
    services::{
        model_service::ChatModel,
        prompt_builder::{PromptBuilder, PromptOutcome},
    },
};

pub struct ChatService {
    prompt_builder: Arc<PromptBuilder>,
    model: Arc<dyn ChatModel>,
    sessions: Arc<dyn SessionRepository>,
    session_ttl_seconds: i64,
}

impl ChatService {
    pub fn new(
        prompt_builder: Arc<PromptBuilder>,
        model: Arc<dyn ChatModel>,
        sessions: Arc<dyn SessionRepository>,
        session_ttl_seconds: i64,
    ) -> Self {
        Self {
            prompt_builder,
            model,
            sessions,
            session_ttl_seconds,
        }
    }

    // Store loads read files; keep them off the async workers.
    async fn prepare_prompt(&self, user_input: &str) -> AppResult<PromptOutcome> {
        let builder = Arc::clone(&self.prompt_builder);
        let input = user_input.to_string();
        tokio::task::spawn_blocking(move || builder.prepare(&input)).await?
    }

    pub async fn generate_prompt(&self, user_input: &str) -> AppResult<String> {
        Ok(self.prepare_prompt(user_input).await?.into_text())
    }

    /// Starts a fresh conversation, replacing any existing session for `user_id`.
    /// An unrecognized program is answered directly and opens no session.
    pub async fn start_chat(&self, user_id: &str, user_input: &str) -> AppResult<String> {
        let prompt = match self.prepare_prompt(user_input).await? {
            PromptOutcome::ProgramNotRecognized { message } => return Ok(message),
            PromptOutcome::Ready { prompt, .. } => prompt,
        };

        let reply = self.model.send(&[], &prompt).await?;

        let mut session = ChatSession::new(user_id, self.session_ttl_seconds);
        session.record_exchange(&prompt, user_input, &reply);
        self.sessions.save(session).await?;
        log::info!("Started chat session for {}", user_id);

        Ok(reply)
    }

    pub async fn continue_chat(&self, user_id: &str, message: &str) -> AppResult<String> {
        let mut session = self
            .sessions
            .get(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Invalid or missing chat history".to_string()))?;

        let reply = self.model.send(&session.model_history, message).await?;

        session.record_exchange(message, message, &reply);
        session.refresh_expiry(self.session_ttl_seconds);
        self.sessions.save(session).await?;

        Ok(reply)
    }

    pub async fn reset_chat(&self, user_id: &str) -> AppResult<()> {
        if self.sessions.delete(user_id).await? {
            log::info!("Reset chat session for {}", user_id);
            Ok(())
        } else {
            Err(AppError::NotFound("User session not found".to_string()))
        }
    }

    pub async fn chat_history(&self, user_id: &str) -> AppResult<Vec<ChatMessage>> {
        self.sessions
            .get(user_id)
            .await?
            .map(|session| session.raw_history)
            .ok_or_else(|| {
                AppError::NotFound(format!("No chat history found for user '{}'", user_id))
            })
    }
}
