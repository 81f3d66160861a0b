use std::sync::Arc;

use crate::{
    constants::prompts::{
        ADVISOR_PREAMBLE, CLARIFICATION_REQUEST, ELIGIBLE_COURSES_HEADER, NONE_LISTED,
        NOT_SPECIFIED, NO_ELIGIBLE_COURSES, PLAN_INSTRUCTIONS, PROGRAM_NOT_RECOGNIZED,
        UNKNOWN_COMPLETED_NOTE,
    },
    errors::AppResult,
    models::domain::{NormalizedOffering, StudentPreferences},
    repositories::CourseDataStore,
    services::{
        course_normalizer::normalize_offerings, eligibility_filter::filter_eligible,
        preference_extractor::PreferenceExtractor,
    },
};

/// Result of turning a chat message into model input.
#[derive(Clone, Debug, PartialEq)]
pub enum PromptOutcome {
    /// Prompt ready to send to the model.
    Ready {
        prompt: String,
        preferences: StudentPreferences,
        eligible_count: usize,
    },
    /// The program could not be identified; `message` asks the student to clarify and is
    /// meant for the student, not the model.
    ProgramNotRecognized { message: String },
}

impl PromptOutcome {
    pub fn into_text(self) -> String {
        match self {
            PromptOutcome::Ready { prompt, .. } => prompt,
            PromptOutcome::ProgramNotRecognized { message } => message,
        }
    }
}

pub struct PromptBuilder {
    extractor: PreferenceExtractor,
    store: Arc<dyn CourseDataStore>,
}

impl PromptBuilder {
    pub fn new(extractor: PreferenceExtractor, store: Arc<dyn CourseDataStore>) -> Self {
        Self { extractor, store }
    }

    /// Extracts preferences, loads fresh snapshots of every store and filters the semester's
    /// offerings down to what the student can take.
    pub fn prepare(&self, user_input: &str) -> AppResult<PromptOutcome> {
        let preferences = self.extractor.extract(user_input);

        let Some(program_id) = preferences.program_id.as_deref() else {
            log::info!(
                "Program not recognized (fallback phrase: {})",
                preferences.raw_program_phrase
            );
            return Ok(PromptOutcome::ProgramNotRecognized {
                message: clarification_message(user_input, &preferences),
            });
        };

        let catalog = self.store.catalog()?;
        let offerings = self.store.offerings()?;
        let requirement = self.store.requirement(program_id)?;
        let allowed = self.store.course_restrictions(program_id)?;

        let normalized = normalize_offerings(&catalog, &offerings);
        let eligible = filter_eligible(normalized, &preferences, &requirement, &allowed);
        log::info!("Built prompt for {} with {} eligible offerings", program_id, eligible.len());

        let prompt = render_prompt(user_input, &preferences, &eligible);
        Ok(PromptOutcome::Ready {
            prompt,
            eligible_count: eligible.len(),
            preferences,
        })
    }

    pub fn build_prompt(&self, user_input: &str) -> AppResult<String> {
        Ok(self.prepare(user_input)?.into_text())
    }
}

pub fn clarification_message(user_input: &str, prefs: &StudentPreferences) -> String {
    let opening = if prefs.raw_program_phrase == PROGRAM_NOT_RECOGNIZED {
        "Sorry, I couldn't recognize your degree program.".to_string()
    } else {
        format!(
            "Sorry, I couldn't match \"{}\" to a degree program I know.",
            prefs.raw_program_phrase
        )
    };
    format!("{opening} {CLARIFICATION_REQUEST}\n\nYour message: {user_input}")
}

/// Plain-sentence caveats for whatever the student left unsaid.
pub fn fallback_notes(prefs: &StudentPreferences) -> Vec<String> {
    let mut notes = Vec::new();

    if !prefs.workload_explicitly_mentioned {
        if let Some(credits) = prefs.max_credits {
            notes.push(format!(
                "The student did not state a workload preference. A full-time load for {} is {} credits; use it as the credit limit, and you may adjust it if the student's message suggests otherwise.",
                prefs.raw_program_phrase, credits
            ));
        }
    }

    if prefs.completed_course_codes.is_empty() {
        notes.push(UNKNOWN_COMPLETED_NOTE.to_string());
    }

    notes
}

fn join_or(items: impl IntoIterator<Item = impl AsRef<str>>, empty: &str) -> String {
    let joined = items
        .into_iter()
        .map(|item| item.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        empty.to_string()
    } else {
        joined
    }
}

/// Renders the full model prompt. Deterministic for identical inputs.
pub fn render_prompt(
    user_input: &str,
    prefs: &StudentPreferences,
    eligible: &[NormalizedOffering],
) -> String {
    let mut out = String::with_capacity(4096);

    out.push_str(ADVISOR_PREAMBLE);
    out.push_str("\n\n");

    out.push_str("Student program: ");
    out.push_str(&prefs.raw_program_phrase);
    out.push_str("\n\n");

    if eligible.is_empty() {
        out.push_str(NO_ELIGIBLE_COURSES);
        out.push_str("\n\n");
    } else {
        out.push_str(ELIGIBLE_COURSES_HEADER);
        out.push('\n');
        let courses = serde_json::to_string_pretty(eligible).unwrap_or_else(|_| "[]".to_string());
        out.push_str(&courses);
        out.push_str("\n\n");
    }

    out.push_str("Student profile:\n");
    out.push_str(&format!(
        "- Interests: {}\n",
        join_or(&prefs.interests, NOT_SPECIFIED)
    ));
    out.push_str(&format!(
        "- Preferred credit limit: {}\n",
        prefs
            .max_credits
            .map(|credits| format!("{credits} credits"))
            .unwrap_or_else(|| NOT_SPECIFIED.to_string())
    ));
    out.push_str(&format!(
        "- Completed courses: {}\n",
        join_or(&prefs.completed_course_codes, NONE_LISTED)
    ));
    out.push_str(&format!(
        "- Unavailable days: {}\n",
        join_or(&prefs.unavailable_days, NONE_LISTED)
    ));

    let notes = fallback_notes(prefs);
    if !notes.is_empty() {
        out.push_str("\nNotes:\n");
        for note in &notes {
            out.push_str("- ");
            out.push_str(note);
            out.push('\n');
        }
    }

    out.push_str("\nStudent's original message:\n\"\"\"\n");
    out.push_str(user_input);
    out.push_str("\n\"\"\"\n\n");

    out.push_str(PLAN_INSTRUCTIONS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{iesm_store, iesm_store_with_restrictions};

    fn builder() -> PromptBuilder {
        PromptBuilder::new(PreferenceExtractor::default(), Arc::new(iesm_store()))
    }

    #[test]
    fn test_unrecognized_program_short_circuits() {
        let input = "Hi! What should I take?";
        let text = builder().build_prompt(input).unwrap();

        assert!(text.starts_with("Sorry, I couldn't recognize your degree program."));
        assert!(text.ends_with(&format!("Your message: {input}")));
    }

    #[test]
    fn test_fallback_phrase_is_named_in_clarification() {
        let outcome = builder().prepare("I'm studying marine biology").unwrap();

        let PromptOutcome::ProgramNotRecognized { message } = outcome else {
            panic!("expected clarification");
        };
        assert!(message.contains("\"Marine Biology\""));
    }

    #[test]
    fn test_prompt_lists_only_eligible_courses() {
        let outcome = builder()
            .prepare("I'm in MS IESM, heavy workload. Completed courses: IESM101")
            .unwrap();

        let PromptOutcome::Ready {
            prompt,
            eligible_count,
            preferences,
        } = outcome
        else {
            panic!("expected a prompt");
        };

        // IESM210 (two sections) needs IESM101; IESM310 needs IESM210; IESM101 is done.
        assert_eq!(eligible_count, 3);
        assert_eq!(preferences.max_credits, Some(15));
        assert!(prompt.contains("\"code\": \"IESM210\""));
        assert!(prompt.contains("\"code\": \"IESM220\""));
        assert!(!prompt.contains("\"code\": \"IESM310\""));
        assert!(!prompt.contains("\"code\": \"IESM101\""));
        assert!(!prompt.contains("\"code\": \"ART100\""));
        assert!(prompt.contains("- Preferred credit limit: 15 credits"));
        assert!(prompt.contains("- Completed courses: IESM101"));
        assert!(!prompt.contains("\nNotes:\n"));
    }

    #[test]
    fn test_fallback_notes_when_nothing_stated() {
        let prompt = builder().build_prompt("I'm in MS IESM").unwrap();

        assert!(prompt.contains("- Interests: Not specified"));
        assert!(prompt.contains("- Completed courses: None"));
        assert!(prompt.contains("- Unavailable days: None"));
        assert!(prompt.contains("A full-time load for Ms Iesm is 15 credits"));
        assert!(prompt.contains(UNKNOWN_COMPLETED_NOTE));
    }

    #[test]
    fn test_prompt_echoes_input_and_days() {
        let input = "MS IESM, no classes on Friday, no classes on Monday";
        let prompt = builder().build_prompt(input).unwrap();

        assert!(prompt.contains(input));
        assert!(prompt.contains("- Unavailable days: Monday, Friday"));
        assert!(prompt.ends_with(PLAN_INSTRUCTIONS));
    }

    #[test]
    fn test_restrictions_apply() {
        let builder = PromptBuilder::new(
            PreferenceExtractor::default(),
            Arc::new(iesm_store_with_restrictions(&["IESM220"])),
        );

        let outcome = builder
            .prepare("MS IESM. completed courses: IESM101")
            .unwrap();
        let PromptOutcome::Ready { eligible_count, prompt, .. } = outcome else {
            panic!("expected a prompt");
        };
        assert_eq!(eligible_count, 1);
        assert!(prompt.contains("\"code\": \"IESM220\""));
    }

    #[test]
    fn test_no_eligible_courses_message() {
        let prompt = builder().build_prompt("I'm in MBA").unwrap();
        assert!(prompt.contains(NO_ELIGIBLE_COURSES));
    }

    #[test]
    fn test_build_prompt_is_idempotent() {
        let input = "MS IESM, light workload, completed courses: IESM101 IESM210";
        let builder = builder();

        assert_eq!(
            builder.build_prompt(input).unwrap(),
            builder.build_prompt(input).unwrap()
        );
    }
}
