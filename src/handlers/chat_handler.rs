use actix_web::{get, post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{
        request::{
            ChatHistoryParams, ContinueChatRequest, GeneratePromptRequest, ResetChatRequest,
            StartChatRequest,
        },
        response::{ChatHistoryResponse, ChatResponse, PromptResponse},
    },
};

fn request_id(req: &HttpRequest) -> String {
    get_request_id(req).unwrap_or_else(|| "-".to_string())
}

#[post("/api/start_chat")]
pub async fn start_chat(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<StartChatRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request
        .validate()
        .map_err(|_| AppError::ValidationError("user_id and message required".to_string()))?;

    log::info!("[{}] start_chat for {}", request_id(&req), request.user_id);
    let response = state
        .chat_service
        .start_chat(&request.user_id, &request.user_input)
        .await?;
    Ok(HttpResponse::Ok().json(ChatResponse::new(response)))
}

#[post("/api/continue_chat")]
pub async fn continue_chat(
    state: web::Data<AppState>,
    req: HttpRequest,
    request: web::Json<ContinueChatRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request
        .validate()
        .map_err(|_| AppError::ValidationError("user_id and message required".to_string()))?;

    log::info!("[{}] continue_chat for {}", request_id(&req), request.user_id);
    let response = state
        .chat_service
        .continue_chat(&request.user_id, &request.message)
        .await?;
    Ok(HttpResponse::Ok().json(ChatResponse::new(response)))
}

#[post("/api/reset_chat")]
pub async fn reset_chat(
    state: web::Data<AppState>,
    request: web::Json<ResetChatRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request
        .validate()
        .map_err(|_| AppError::ValidationError("user_id is required".to_string()))?;

    state.chat_service.reset_chat(&request.user_id).await?;
    Ok(HttpResponse::Ok().json(ChatResponse::new("Chat reset")))
}

#[get("/api/chat_history")]
pub async fn chat_history(
    state: web::Data<AppState>,
    query: web::Query<ChatHistoryParams>,
) -> Result<HttpResponse, AppError> {
    let user_id = query
        .user_id()
        .ok_or_else(|| AppError::ValidationError("user_id is required".to_string()))?;

    let history = state.chat_service.chat_history(user_id).await?;
    Ok(HttpResponse::Ok().json(ChatHistoryResponse {
        user_id: user_id.to_string(),
        history,
    }))
}

/// Returns the prompt that would be sent to the model, without sending it.
#[post("/api/generate_prompt")]
pub async fn generate_prompt(
    state: web::Data<AppState>,
    request: web::Json<GeneratePromptRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let prompt = state.chat_service.generate_prompt(&request.user_input).await?;
    Ok(HttpResponse::Ok().json(PromptResponse { prompt }))
}
