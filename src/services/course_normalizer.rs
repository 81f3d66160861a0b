use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    models::domain::{CourseRecord, NormalizedOffering, RawOffering},
    services::text::normalize_code,
};

static OFFERING_CODE_RE: Lazy<Regex> = Lazy::new(|| {
    regex::Regex::new(r"\(([A-Z]{2,4}\s*\d{3})\)\s*$")
        .expect("OFFERING_CODE_RE is a valid regex pattern")
});

/// Code in trailing parentheses of a schedule "Course" cell, e.g. "Statistics\n\n(IESM210)".
pub fn offering_code(course_text: &str) -> Option<String> {
    OFFERING_CODE_RE
        .captures(course_text)
        .and_then(|captures| captures.get(1))
        .map(|m| normalize_code(m.as_str()))
}

fn offering_title(course_text: &str) -> String {
    let first = course_text.split("\n\n").next().unwrap_or_default();
    OFFERING_CODE_RE.replace(first, "").trim().to_string()
}

fn parse_credits(value: &str) -> f64 {
    value.trim().parse::<f64>().unwrap_or(0.0)
}

/// Joins semester offerings against the catalog. Rows without a trailing course code are
/// dropped; sections of the same course are kept as separate rows in input order.
pub fn normalize_offerings(
    catalog: &[CourseRecord],
    offerings: &[RawOffering],
) -> Vec<NormalizedOffering> {
    let mut index: HashMap<String, &CourseRecord> = HashMap::with_capacity(catalog.len());
    for record in catalog {
        index.entry(normalize_code(&record.code)).or_insert(record);
    }

    let mut dropped = 0usize;
    let normalized: Vec<NormalizedOffering> = offerings
        .iter()
        .filter_map(|raw| {
            let Some(code) = offering_code(&raw.course) else {
                dropped += 1;
                return None;
            };
            let catalog_entry = index.get(&code);

            Some(NormalizedOffering {
                title: offering_title(&raw.course),
                description: catalog_entry
                    .map(|c| c.description.clone())
                    .unwrap_or_default(),
                prerequisites: catalog_entry
                    .map(|c| c.prerequisites.clone())
                    .unwrap_or_default(),
                credits: parse_credits(&raw.credits),
                code,
                raw: raw.clone(),
            })
        })
        .collect();

    if dropped > 0 {
        log::debug!("Dropped {} offering rows without a course code", dropped);
    }

    normalized
}
