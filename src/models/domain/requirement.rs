use serde::{Deserialize, Serialize};

use crate::services::text::title_case;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct DegreeRequirementEntry {
    pub program: String,
    #[serde(default)]
    pub raw_text: String,
}

impl DegreeRequirementEntry {
    pub fn new(program: &str, raw_text: &str) -> Self {
        DegreeRequirementEntry {
            program: program.to_string(),
            raw_text: raw_text.to_string(),
        }
    }

    /// Placeholder for a program whose requirement document was never extracted.
    pub fn empty_for(program_id: &str) -> Self {
        DegreeRequirementEntry {
            program: title_case(&program_id.replace('_', " ")),
            raw_text: String::new(),
        }
    }
}
