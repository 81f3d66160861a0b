pub mod chat_session;
pub mod course;
pub mod preferences;
pub mod requirement;
pub use chat_session::{ChatMessage, ChatRole, ChatSession};
pub use course::{CourseRecord, NormalizedOffering, RawOffering};
pub use preferences::{ProgramSynonym, StudentPreferences, SynonymTables, WorkloadSynonym};
pub use requirement::DegreeRequirementEntry;
