use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde_json::{json, Value};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{ChatMessage, ChatRole},
};

/// A hosted generative model that continues a conversation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Sends `message` after `history` and returns the model's reply text.
    async fn send(&self, history: &[ChatMessage], message: &str) -> AppResult<String>;
}

/// Talks to any OpenAI-compatible chat completions endpoint (Gemini exposes one).
pub struct OpenAiCompatibleModel {
    client: Client<OpenAIConfig>,
    model_name: String,
}

impl OpenAiCompatibleModel {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_base(config.model_api_base.clone())
            .with_api_key(config.model_api_key.expose_secret().to_string());

        Self {
            client: Client::with_config(openai_config),
            model_name: config.model_name.clone(),
        }
    }
}

fn role_name(role: ChatRole) -> &'static str {
    match role {
        ChatRole::User => "user",
        ChatRole::Model => "assistant",
    }
}

pub fn build_request(model_name: &str, history: &[ChatMessage], message: &str) -> Value {
    let mut messages: Vec<Value> = history
        .iter()
        .map(|turn| json!({ "role": role_name(turn.role), "content": turn.text() }))
        .collect();
    messages.push(json!({ "role": "user", "content": message }));

    json!({
        "model": model_name,
        "messages": messages,
    })
}

pub fn extract_reply(response: &Value) -> AppResult<String> {
    response
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(Value::as_str)
        .map(|content| content.trim().to_string())
        .ok_or_else(|| AppError::ModelError("model response contained no message content".to_string()))
}

#[async_trait]
impl ChatModel for OpenAiCompatibleModel {
    async fn send(&self, history: &[ChatMessage], message: &str) -> AppResult<String> {
        let request = build_request(&self.model_name, history, message);
        log::debug!(
            "Sending {} history turns to {}",
            history.len(),
            self.model_name
        );

        let response: Value = self.client.chat().create_byot(request).await?;
        extract_reply(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_request_maps_roles() {
        let history = vec![ChatMessage::user("prompt"), ChatMessage::model("plan")];
        let request = build_request("gemini-test", &history, "and electives?");

        assert_eq!(request["model"], "gemini-test");
        let messages = request["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0]["role"], "user");
        assert_eq!(messages[1]["role"], "assistant");
        assert_eq!(messages[1]["content"], "plan");
        assert_eq!(messages[2]["content"], "and electives?");
    }

    #[test]
    fn test_extract_reply_trims_content() {
        let response = json!({
            "choices": [{ "index": 0, "message": { "role": "assistant", "content": "  Take IESM210.\n" } }]
        });
        assert_eq!(extract_reply(&response).unwrap(), "Take IESM210.");
    }

    #[test]
    fn test_extract_reply_without_choices() {
        let err = extract_reply(&json!({ "choices": [] })).unwrap_err();
        assert!(matches!(err, AppError::ModelError(_)));
    }

    #[test]
    fn test_model_is_constructible_from_config() {
        let model = OpenAiCompatibleModel::new(&Config::test_config());
        assert_eq!(model.model_name, "test-model");
    }
}
