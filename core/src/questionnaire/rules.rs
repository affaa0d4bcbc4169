//! TOML loading for questionnaire definitions.
//!
//! Provides two loading methods:
//! - `default_questionnaire()` - Loads the question set compiled into the binary
//! - `load_questionnaire(path)` - Loads a custom question set from a file path
//!
//! Deserializing a `Questionnaire` validates it, so both paths hand out
//! only well-formed sets.

use anyhow::{Context, Result};
use std::path::Path;

use super::types::Questionnaire;

/// Default question set embedded at compile time from
/// `core/config/questionnaire.toml`.
const DEFAULT_QUESTIONNAIRE: &str = include_str!("../../config/questionnaire.toml");

/// Parse and validate a question set from TOML text.
pub fn parse_questionnaire(content: &str) -> Result<Questionnaire> {
    toml::from_str(content).context("invalid questionnaire definition")
}

/// Load a question set from a TOML file at the given path.
///
/// # Returns
/// * `Ok(Questionnaire)` - Parsed and validated question set
/// * `Err` - If the file cannot be read, the TOML is invalid, or validation fails
pub fn load_questionnaire(path: &Path) -> Result<Questionnaire> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let questionnaire = parse_questionnaire(&content)?;
    tracing::info!(
        "Loaded {} questions from {}",
        questionnaire.len(),
        path.display()
    );
    Ok(questionnaire)
}

/// Get the six-question constitution assessment embedded in the binary.
///
/// # Panics
/// Panics if the embedded TOML is invalid (this would be a compile-time bug).
pub fn default_questionnaire() -> Questionnaire {
    parse_questionnaire(DEFAULT_QUESTIONNAIRE)
        .expect("embedded questionnaire.toml must be a valid question set")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_questionnaire_has_six_questions() {
        let q = default_questionnaire();
        assert_eq!(q.len(), 6);

        let ids: Vec<_> = q.questions().iter().map(|q| q.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "skin-texture",
                "skin-issues",
                "sun-reaction",
                "body-temperature",
                "energy-pattern",
                "stress-response",
            ]
        );
    }

    #[test]
    fn test_every_default_option_weighs_three() {
        let q = default_questionnaire();
        for question in q.questions() {
            for option in &question.options {
                assert_eq!(
                    option.weights().total(),
                    3,
                    "option '{}' of '{}'",
                    option.text,
                    question.id
                );
            }
        }
    }

    #[test]
    fn test_sun_reaction_has_split_weights() {
        let q = default_questionnaire();
        let sun = q.find("sun-reaction").unwrap();
        assert_eq!(sun.options[0].text, "Burns easily, tans minimally");
        assert_eq!((sun.options[0].vata, sun.options[0].pitta, sun.options[0].kapha), (2, 1, 0));
        assert_eq!((sun.options[2].vata, sun.options[2].pitta, sun.options[2].kapha), (0, 1, 2));
    }

    #[test]
    fn test_parse_rejects_invalid_set() {
        let toml = r#"
            [[questions]]
            id = "only"
            prompt = "Only one option?"
            options = [{ text = "yes", vata = 1, pitta = 0, kapha = 0 }]
        "#;
        let err = parse_questionnaire(toml).unwrap_err();
        assert!(format!("{:#}", err).contains("options"), "{:#}", err);
    }

    #[test]
    fn test_parse_rejects_overflowing_weights() {
        let option = r#"{ text = "heavy", vata = 4294967295, pitta = 1, kapha = 0 }"#;
        let toml = format!(
            "[[questions]]\nid = \"heavy\"\nprompt = \"Heavy?\"\noptions = [{0}, {0}, {0}, {0}]\n",
            option
        );
        let err = parse_questionnaire(&toml).unwrap_err();
        assert!(format!("{:#}", err).contains("overflow"), "{:#}", err);
    }

    #[test]
    fn test_parse_rejects_empty_set() {
        assert!(parse_questionnaire("questions = []").is_err());
    }

    #[test]
    fn test_load_questionnaire_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DEFAULT_QUESTIONNAIRE.as_bytes()).unwrap();

        let loaded = load_questionnaire(file.path()).unwrap();
        assert_eq!(loaded, default_questionnaire());
    }

    #[test]
    fn test_load_questionnaire_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_questionnaire(&dir.path().join("missing.toml"));
        assert!(result.is_err());
    }
}
