use std::sync::Arc;

use crate::{
    config::{Config, SessionBackend},
    db::Database,
    errors::AppResult,
    models::domain::SynonymTables,
    repositories::{
        InMemorySessionRepository, JsonCourseDataStore, MongoSessionRepository, SessionRepository,
    },
    services::{
        chat_service::ChatService, model_service::OpenAiCompatibleModel,
        preference_extractor::PreferenceExtractor, prompt_builder::PromptBuilder,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ChatService>,
    pub config: Arc<Config>,
    pub db: Option<Database>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let tables = match &config.synonyms_path {
            Some(path) => {
                log::info!("Loading synonym tables from {}", path.display());
                SynonymTables::from_json_file(path)?
            }
            None => SynonymTables::default(),
        };
        let store = Arc::new(JsonCourseDataStore::new(&config));
        let prompt_builder = Arc::new(PromptBuilder::new(PreferenceExtractor::new(tables), store));
        let model = Arc::new(OpenAiCompatibleModel::new(&config));

        let (sessions, db): (Arc<dyn SessionRepository>, Option<Database>) =
            match config.session_backend {
                SessionBackend::Mongo => {
                    let db = Database::connect(&config).await?;
                    let repository = MongoSessionRepository::new(&db, &config.sessions_collection);
                    repository.ensure_indexes().await?;
                    (Arc::new(repository), Some(db))
                }
                SessionBackend::Memory => {
                    log::warn!("Using in-memory session store; sessions are lost on restart");
                    (Arc::new(InMemorySessionRepository::new()), None)
                }
            };

        let chat_service = Arc::new(ChatService::new(
            prompt_builder,
            model,
            sessions,
            config.session_ttl_seconds,
        ));

        Ok(Self {
            chat_service,
            config: Arc::new(config),
            db,
        })
    }

    pub fn from_parts(chat_service: Arc<ChatService>, config: Config) -> Self {
        Self {
            chat_service,
            config: Arc::new(config),
            db: None,
        }
    }
}
