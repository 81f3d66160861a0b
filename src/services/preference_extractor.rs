use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    constants::prompts::PROGRAM_NOT_RECOGNIZED,
    models::domain::{StudentPreferences, SynonymTables},
    services::text::{normalize_code, title_case},
};

const WEEKDAYS: [&str; 5] = ["monday", "tuesday", "wednesday", "thursday", "friday"];
const COMPLETED_MARKER: &str = "completed courses";

static PROGRAM_CONNECTOR_RE: Lazy<Regex> = Lazy::new(|| {
    regex::Regex::new(
        r"(?:student in|studying|pursuing|major of|majoring in|enrolled in|degree in)\s+([a-z ]+)",
    )
    .expect("PROGRAM_CONNECTOR_RE is a valid regex pattern")
});

// Deliberately lenient: any three digits, optionally prefixed by 2-4 letters.
static COMPLETED_CODE_RE: Lazy<Regex> = Lazy::new(|| {
    regex::Regex::new(r"\b(?:[a-z]{2,4}\s*)?\d{3}\b")
        .expect("COMPLETED_CODE_RE is a valid regex pattern")
});

/// Turns a free-text chat message into [`StudentPreferences`]. Pure; no I/O.
#[derive(Clone, Debug, Default)]
pub struct PreferenceExtractor {
    tables: SynonymTables,
}

impl PreferenceExtractor {
    pub fn new(tables: SynonymTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &SynonymTables {
        &self.tables
    }

    pub fn extract(&self, user_input: &str) -> StudentPreferences {
        let input_lower = user_input.to_lowercase();

        let mut prefs = StudentPreferences {
            program_id: None,
            raw_program_phrase: PROGRAM_NOT_RECOGNIZED.to_string(),
            max_credits: None,
            workload_explicitly_mentioned: false,
            completed_course_codes: BTreeSet::new(),
            unavailable_days: Vec::new(),
            interests: Vec::new(),
        };

        match self
            .tables
            .programs
            .iter()
            .find(|entry| input_lower.contains(entry.phrase.as_str()))
        {
            Some(entry) => {
                log::debug!("Matched program phrase '{}' -> {}", entry.phrase, entry.program_id);
                prefs.program_id = Some(entry.program_id.clone());
                prefs.max_credits = Some(entry.credits);
                prefs.raw_program_phrase = title_case(&entry.phrase);
            }
            None => {
                if let Some(phrase) = connector_phrase(&input_lower) {
                    prefs.raw_program_phrase = title_case(&phrase);
                }
            }
        }

        if let Some(index) = input_lower.find(COMPLETED_MARKER) {
            let remainder = &input_lower[index + COMPLETED_MARKER.len()..];
            prefs.completed_course_codes = COMPLETED_CODE_RE
                .find_iter(remainder)
                .map(|m| normalize_code(m.as_str()))
                .collect();
        }

        if let Some(workload) = self
            .tables
            .workloads
            .iter()
            .find(|entry| input_lower.contains(entry.word.as_str()))
        {
            if let Some(credits) = prefs.max_credits {
                prefs.max_credits = Some((credits as f64 * workload.ratio) as u32);
                prefs.workload_explicitly_mentioned = true;
            }
        }

        for day in WEEKDAYS {
            if input_lower.contains(&format!("no classes on {day}")) {
                prefs.unavailable_days.push(title_case(day));
            }
        }

        prefs
    }
}

fn connector_phrase(input_lower: &str) -> Option<String> {
    let captures = PROGRAM_CONNECTOR_RE.captures(input_lower)?;
    let phrase = captures.get(1)?.as_str().trim();
    if phrase.is_empty() {
        None
    } else {
        Some(phrase.to_string())
    }
}
