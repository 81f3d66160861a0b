use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StartChatRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 128))]
    pub user_id: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 10000))]
    pub user_input: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContinueChatRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 128))]
    pub user_id: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 10000))]
    pub message: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ResetChatRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 128))]
    pub user_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatHistoryParams {
    pub user_id: Option<String>,
}

impl ChatHistoryParams {
    pub fn user_id(&self) -> Option<&str> {
        self.user_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GeneratePromptRequest {
    #[serde(default)]
    #[validate(length(max = 10000))]
    pub user_input: String,
}
