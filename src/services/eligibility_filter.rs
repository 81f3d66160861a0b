use std::collections::BTreeSet;

use crate::{
    models::domain::{DegreeRequirementEntry, NormalizedOffering, StudentPreferences},
    services::text::{course_codes_in, normalize_code},
};

/// True when every course code mentioned in `prerequisites` has been completed.
/// A course that lists no prerequisites is always satisfied.
pub fn prerequisites_satisfied(prerequisites: &str, completed: &BTreeSet<String>) -> bool {
    course_codes_in(prerequisites)
        .iter()
        .all(|code| completed.contains(code))
}

/// Courses the student may take this term, in input order.
///
/// `allowed_codes` is the program's course allowlist; an empty set means the program has
/// none. Credit limits are not enforced here.
pub fn filter_eligible(
    normalized: Vec<NormalizedOffering>,
    prefs: &StudentPreferences,
    requirement: &DegreeRequirementEntry,
    allowed_codes: &BTreeSet<String>,
) -> Vec<NormalizedOffering> {
    let required: BTreeSet<String> = course_codes_in(&requirement.raw_text).into_iter().collect();
    let allowed: BTreeSet<String> = allowed_codes.iter().map(|c| normalize_code(c)).collect();
    let completed = &prefs.completed_course_codes;

    let total = normalized.len();
    let eligible: Vec<NormalizedOffering> = normalized
        .into_iter()
        .filter(|course| {
            prerequisites_satisfied(&course.prerequisites, completed)
                && !completed.contains(&course.code)
                && required.contains(&course.code)
                && (allowed.is_empty() || allowed.contains(&course.code))
        })
        .collect();

    log::debug!(
        "{} of {} offerings eligible for {} ({} required codes)",
        eligible.len(),
        total,
        requirement.program,
        required.len()
    );

    eligible
}
