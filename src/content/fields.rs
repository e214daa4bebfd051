//! Comma-separated list fields
//!
//! Tags, tools, metrics, roles and certifications are edited as one line of
//! text. Parsing splits on `,`, trims each token and drops empty ones, so
//! `join_list` followed by `parse_list` yields the same sequence.

/// Parse free text into a list of trimmed, non-empty tokens
pub fn parse_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Render a list back into editable text
pub fn join_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ")
}
