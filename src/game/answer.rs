use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE_REGEX: Regex = Regex::new(r"\s+").unwrap();
}

/// Case and internal spacing are never significant when comparing answers.
fn normalize(text: &str) -> String {
    WHITESPACE_REGEX
        .replace_all(&text.to_lowercase(), "")
        .into()
}

/// Checks `user_input` against a comma-separated list of accepted spellings.
pub fn is_correct(user_input: &str, accepted_field: &str) -> bool {
    let guess = normalize(user_input);
    accepted_field
        .split(',')
        .any(|candidate| normalize(candidate.trim()) == guess)
}
