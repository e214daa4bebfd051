//! Parsing and shallow validation of serialized documents

use serde_json::Value;
use thiserror::Error;

use super::SiteContent;

/// Top-level sections a document must carry to be accepted
const REQUIRED_SECTIONS: [&str; 2] = ["siteSettings", "hero"];

/// Errors raised while reading a serialized document
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to parse content JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Invalid content document: {0}")]
    Schema(String),
}

/// Minimal shape guard against corrupted or foreign JSON.
///
/// A document passes when it is an object whose `siteSettings` and `hero`
/// entries are non-empty objects. Nothing else is inspected.
pub fn is_structurally_valid(value: &Value) -> bool {
    missing_section(value).is_none()
}

fn missing_section(value: &Value) -> Option<&'static str> {
    let Some(object) = value.as_object() else {
        return Some(REQUIRED_SECTIONS[0]);
    };
    REQUIRED_SECTIONS.into_iter().find(|name| {
        !object
            .get(*name)
            .and_then(Value::as_object)
            .is_some_and(|section| !section.is_empty())
    })
}

/// Parse serialized bytes into a document.
///
/// Not well-formed JSON is a `Parse` error. Well-formed JSON that misses a
/// required section, or whose fields do not fit the document types, is a
/// `Schema` error.
pub fn parse_document(input: impl AsRef<[u8]>) -> Result<SiteContent, ContentError> {
    let value: Value = serde_json::from_slice(input.as_ref()).map_err(ContentError::Parse)?;
    document_from_value(value)
}

/// Typed conversion of an already-parsed JSON value, with the shallow check
pub fn document_from_value(value: Value) -> Result<SiteContent, ContentError> {
    if let Some(section) = missing_section(&value) {
        return Err(ContentError::Schema(format!(
            "missing or empty `{}` section",
            section
        )));
    }
    serde_json::from_value(value).map_err(|e| ContentError::Schema(e.to_string()))
}

/// Portable text form: pretty-printed JSON with 2-space indentation
pub fn to_pretty_json(content: &SiteContent) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_foreign_json_is_invalid() {
        assert!(!is_structurally_valid(&json!({"foo": 1})));
        assert!(!is_structurally_valid(&json!([1, 2, 3])));
        assert!(!is_structurally_valid(&json!(null)));
    }

    #[test]
    fn test_required_sections_are_enough() {
        let value = json!({
            "siteSettings": {"name": "A"},
            "hero": {"name": "B"}
        });
        assert!(is_structurally_valid(&value));

        let content = document_from_value(value).unwrap();
        assert_eq!(content.site_settings.name, "A");
        assert_eq!(content.hero.name, "B");
        assert!(content.projects.is_empty());
    }

    #[test]
    fn test_empty_or_non_object_sections_are_invalid() {
        assert!(!is_structurally_valid(&json!({"siteSettings": {}, "hero": {"name": "B"}})));
        assert!(!is_structurally_valid(&json!({"siteSettings": {"name": "A"}, "hero": null})));
        assert!(!is_structurally_valid(&json!({"siteSettings": "x", "hero": {"name": "B"}})));
    }

    #[test]
    fn test_parse_error_kinds() {
        assert!(matches!(
            parse_document("{not json"),
            Err(ContentError::Parse(_))
        ));
        assert!(matches!(
            parse_document(r#"{"foo": 1}"#),
            Err(ContentError::Schema(_))
        ));
        let wrong_type = r#"{"siteSettings": {"name": "A"}, "hero": {"roles": "oops"}}"#;
        assert!(matches!(
            parse_document(wrong_type),
            Err(ContentError::Schema(_))
        ));
    }

    #[test]
    fn test_pretty_json_uses_two_spaces() {
        let text = to_pretty_json(&SiteContent::default()).unwrap();
        assert!(text.starts_with("{\n  \"siteSettings\": {\n    \"name\""));
    }
}
