pub mod chat_service;
pub mod course_normalizer;
pub mod eligibility_filter;
pub mod model_service;
pub mod preference_extractor;
pub mod prompt_builder;
pub mod text;
