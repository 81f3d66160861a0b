pub mod course_store;
pub mod session_repository;

pub use course_store::{CourseDataStore, InMemoryCourseDataStore, JsonCourseDataStore};
pub use session_repository::{InMemorySessionRepository, MongoSessionRepository, SessionRepository};
