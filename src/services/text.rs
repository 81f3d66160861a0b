use once_cell::sync::Lazy;
use regex::Regex;

static COURSE_CODE_RE: Lazy<Regex> = Lazy::new(|| {
    regex::Regex::new(r"\b[A-Z]{2,4}\s*\d{3}\b").expect("COURSE_CODE_RE is a valid regex pattern")
});

/// Strips all whitespace and upper-cases, so "cs 101" and "CS101" compare equal.
pub fn normalize_code(code: &str) -> String {
    code.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

/// Every catalog-shaped course code in `text`, normalized, in order of appearance.
pub fn course_codes_in(text: &str) -> Vec<String> {
    COURSE_CODE_RE
        .find_iter(text)
        .map(|m| normalize_code(m.as_str()))
        .collect()
}

/// Upper-cases the first letter of every run of letters and lower-cases the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_is_letter = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            out.push(c);
            previous_is_letter = false;
        }
    }
    out
}
