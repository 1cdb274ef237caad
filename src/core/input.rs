// LandSearch - core/input.rs
//
// Live input sanitisers for the free-text search fields. Applied on every
// edit so the form never holds characters a record field cannot contain.

use regex::Regex;
use std::sync::OnceLock;

fn holder_name_reject() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Letters, Devanagari, whitespace.
    RE.get_or_init(|| Regex::new(r"[^a-zA-Z\x{0900}-\x{097F}\s]").expect("static regex"))
}

fn survey_no_reject() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Alphanumerics, Devanagari, and the separators used in survey numbers.
    RE.get_or_init(|| Regex::new(r"[^a-zA-Z0-9\x{0900}-\x{097F}/\-.\s]").expect("static regex"))
}

/// Strip everything except ASCII letters, Devanagari and whitespace.
pub fn sanitize_holder_name(input: &str) -> String {
    holder_name_reject().replace_all(input, "").into_owned()
}

/// Strip everything except ASCII alphanumerics, Devanagari, `/`, `-`, `.`
/// and whitespace.
pub fn sanitize_survey_no(input: &str) -> String {
    survey_no_reject().replace_all(input, "").into_owned()
}
