use std::env;
use std::path::PathBuf;

use secrecy::SecretString;

/// Where chat sessions are kept between requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionBackend {
    Mongo,
    Memory,
}

impl SessionBackend {
    fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => SessionBackend::Memory,
            _ => SessionBackend::Mongo,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub allowed_origin: String,
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub sessions_collection: String,
    pub session_ttl_seconds: i64,
    pub session_backend: SessionBackend,
    pub model_api_base: String,
    pub model_api_key: SecretString,
    pub model_name: String,
    pub catalog_path: PathBuf,
    pub offerings_path: PathBuf,
    pub requirements_path: PathBuf,
    pub restrictions_path: PathBuf,
    pub synonyms_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            allowed_origin: env::var("ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "course-planner-local".to_string()),
            sessions_collection: env::var("SESSIONS_COLLECTION")
                .unwrap_or_else(|_| "chat_sessions".to_string()),
            session_ttl_seconds: env::var("SESSION_TTL_SECONDS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(3600),
            session_backend: SessionBackend::parse(
                &env::var("SESSION_BACKEND").unwrap_or_else(|_| "mongo".to_string()),
            ),
            model_api_base: env::var("MODEL_API_BASE").unwrap_or_else(|_| {
                "https://generativelanguage.googleapis.com/v1beta/openai".to_string()
            }),
            model_api_key: SecretString::from(
                env::var("GEMINI_API_KEY").unwrap_or_default(),
            ),
            model_name: env::var("MODEL_NAME").unwrap_or_else(|_| "gemini-2.5-pro".to_string()),
            catalog_path: data_path("CATALOG_PATH", "data/scraped_courses/aua_courses_all_faculties.json"),
            offerings_path: data_path("OFFERINGS_PATH", "data/scraped_courses/aua_courses_by_semester.json"),
            requirements_path: data_path("REQUIREMENTS_PATH", "data/requirements/degree_requirements.json"),
            restrictions_path: data_path("RESTRICTIONS_PATH", "data/requirements/program_courses.json"),
            synonyms_path: env::var("SYNONYMS_PATH").ok().map(PathBuf::from),
        }
    }

    /// Panics if the model credentials were never supplied.
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        if self.model_api_key.expose_secret().trim().is_empty() {
            panic!(
                "FATAL: GEMINI_API_KEY is not set! Set GEMINI_API_KEY to a valid API key for the generative model."
            );
        }

        if self.session_ttl_seconds <= 0 {
            panic!(
                "FATAL: SESSION_TTL_SECONDS must be positive, got {}.",
                self.session_ttl_seconds
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 5000,
            allowed_origin: "http://localhost:5173".to_string(),
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "course-planner-test".to_string(),
            sessions_collection: "chat_sessions".to_string(),
            session_ttl_seconds: 60,
            session_backend: SessionBackend::Memory,
            model_api_base: "http://localhost:9999/v1".to_string(),
            model_api_key: SecretString::from("test_api_key".to_string()),
            model_name: "test-model".to_string(),
            catalog_path: PathBuf::from("catalog.json"),
            offerings_path: PathBuf::from("offerings.json"),
            requirements_path: PathBuf::from("requirements.json"),
            restrictions_path: PathBuf::from("restrictions.json"),
            synonyms_path: None,
        }
    }
}

fn data_path(var: &str, default: &str) -> PathBuf {
    env::var(var)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}
