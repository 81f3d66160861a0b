use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::AppResult;

/// What the student told us about themselves, derived from a single chat message.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StudentPreferences {
    /// `None` means no known program phrase matched; filtering must not run.
    pub program_id: Option<String>,
    pub raw_program_phrase: String,
    pub max_credits: Option<u32>,
    pub workload_explicitly_mentioned: bool,
    pub completed_course_codes: BTreeSet<String>,
    /// Always in Monday..Friday order.
    pub unavailable_days: Vec<String>,
    pub interests: Vec<String>,
}

impl StudentPreferences {
    pub fn is_program_recognized(&self) -> bool {
        self.program_id.is_some()
    }
}

/// A phrase that identifies a degree program, with the program's nominal full-time load.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProgramSynonym {
    pub phrase: String,
    pub program_id: String,
    pub credits: u32,
}

/// A word describing workload intensity and the share of the full load it stands for.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct WorkloadSynonym {
    pub word: String,
    pub ratio: f64,
}

/// Ordered lookup tables used by the preference extractor. The first matching
/// entry in declaration order wins, so the order here is part of the contract.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SynonymTables {
    pub programs: Vec<ProgramSynonym>,
    pub workloads: Vec<WorkloadSynonym>,
}

impl SynonymTables {
    pub fn from_json_file(path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let tables = serde_json::from_str(&contents)?;
        Ok(tables)
    }
}

impl Default for SynonymTables {
    fn default() -> Self {
        let programs = [
            ("ll.m.", "llm", 9),
            ("llm", "llm", 9),
            ("master of laws", "llm", 9),
            ("ma hrsj", "ma_hrsj", 12),
            ("human rights and social justice", "ma_hrsj", 12),
            ("master of arts in human rights and social justice", "ma_hrsj", 12),
            ("ma tefl", "ma_tefl", 12),
            ("tefl", "ma_tefl", 12),
            ("master of arts in teaching english as a foreign language", "ma_tefl", 12),
            ("mse", "mse", 9),
            ("master of science in economics", "mse", 9),
            ("mba", "mba", 11),
            ("master of business administration", "mba", 11),
            ("msm", "msm", 15),
            ("master of science in management", "msm", 15),
            ("me iesm", "ms_iesm", 15),
            ("ms iesm", "ms_iesm", 15),
            (
                "master of engineering in industrial engineering & systems management",
                "ms_iesm",
                15,
            ),
            ("ms cis", "ms_cis", 15),
            ("cis", "ms_cis", 15),
            ("computer and information science", "ms_cis", 15),
            ("mph", "mph", 18),
            ("public health", "mph", 18),
            ("master of public health", "mph", 18),
            ("maird", "ma_ird", 12),
            ("international relations and diplomacy", "ma_ird", 12),
            ("master of arts in international relations and diplomacy", "ma_ird", 12),
            ("mpa", "mpa", 12),
            ("master of public affairs", "mpa", 12),
        ]
        .into_iter()
        .map(|(phrase, program_id, credits)| ProgramSynonym {
            phrase: phrase.to_string(),
            program_id: program_id.to_string(),
            credits,
        })
        .collect();

        let workloads = [
            ("light", 0.6),
            ("easy", 0.6),
            ("low", 0.6),
            ("moderate", 0.8),
            ("normal", 0.8),
            ("balanced", 0.8),
            ("heavy", 1.0),
            ("maximum", 1.0),
            ("intensive", 1.0),
        ]
        .into_iter()
        .map(|(word, ratio)| WorkloadSynonym {
            word: word.to_string(),
            ratio,
        })
        .collect();

        SynonymTables {
            programs,
            workloads,
        }
    }
}
