pub mod chat_handler;
pub mod health_handler;

use actix_web::web;

pub use chat_handler::{chat_history, continue_chat, generate_prompt, reset_chat, start_chat};
pub use health_handler::{health_check, health_check_ready};

/// Registers every route the service exposes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(start_chat)
        .service(continue_chat)
        .service(reset_chat)
        .service(chat_history)
        .service(generate_prompt)
        .service(health_check)
        .service(health_check_ready);
}
