//! Type definitions for the constitution questionnaire.
//!
//! Question sets deserialize from TOML (see `config/questionnaire.toml`);
//! scores and answers serialize to JSON for display and debugging.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::error::QuestionnaireError;

/// Number of options every question must offer.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// One of the three Ayurvedic constitution categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dosha {
    Vata,
    Pitta,
    Kapha,
}

impl Dosha {
    /// Registration order. Every per-dosha iteration, including the
    /// dominant-dosha tie-break, walks this array front to back.
    pub const ALL: [Dosha; 3] = [Dosha::Vata, Dosha::Pitta, Dosha::Kapha];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dosha::Vata => "vata",
            Dosha::Pitta => "pitta",
            Dosha::Kapha => "kapha",
        }
    }
}

impl fmt::Display for Dosha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-dosha integer totals. Used both for a single option's weights and
/// for the summed score of a whole answer set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoshaScores {
    pub vata: u32,
    pub pitta: u32,
    pub kapha: u32,
}

impl DoshaScores {
    pub fn new(vata: u32, pitta: u32, kapha: u32) -> Self {
        Self { vata, pitta, kapha }
    }

    pub fn get(&self, dosha: Dosha) -> u32 {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }

    /// Sum across all three doshas, widened so it cannot overflow.
    pub fn total(&self) -> u64 {
        u64::from(self.vata) + u64::from(self.pitta) + u64::from(self.kapha)
    }

    /// Scores paired with their dosha, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (Dosha, u32)> + '_ {
        Dosha::ALL.into_iter().map(move |d| (d, self.get(d)))
    }
}

/// Saturates at `u32::MAX`. Validated question sets never get there.
impl AddAssign for DoshaScores {
    fn add_assign(&mut self, rhs: Self) {
        self.vata = self.vata.saturating_add(rhs.vata);
        self.pitta = self.pitta.saturating_add(rhs.pitta);
        self.kapha = self.kapha.saturating_add(rhs.kapha);
    }
}

impl Add for DoshaScores {
    type Output = DoshaScores;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

/// A single answer choice and the weight it contributes to each dosha.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    /// Label shown to the user
    pub text: String,
    pub vata: u32,
    pub pitta: u32,
    pub kapha: u32,
}

impl QuestionOption {
    pub fn weights(&self) -> DoshaScores {
        DoshaScores::new(self.vata, self.pitta, self.kapha)
    }
}

/// A question with its ordered answer options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Stable identifier used as the answer key (e.g., "skin-texture")
    pub id: String,
    /// Question text shown to the user
    pub prompt: String,
    pub options: Vec<QuestionOption>,
}

impl Question {
    pub fn option(&self, index: usize) -> Result<&QuestionOption, QuestionnaireError> {
        self.options
            .get(index)
            .ok_or_else(|| QuestionnaireError::OptionOutOfRange {
                question: self.id.clone(),
                index,
                available: self.options.len(),
            })
    }
}

/// The full ordered question set, as loaded from `questionnaire.toml`.
///
/// Only validated sets can be built, whether through `new` or through
/// deserialization, so a set is never empty and its scores cannot overflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuestionnaireFile")]
pub struct Questionnaire {
    questions: Vec<Question>,
}

/// On-disk shape of a question set, before validation.
#[derive(Deserialize)]
struct QuestionnaireFile {
    questions: Vec<Question>,
}

impl TryFrom<QuestionnaireFile> for Questionnaire {
    type Error = QuestionnaireError;

    fn try_from(file: QuestionnaireFile) -> Result<Self, Self::Error> {
        Questionnaire::new(file.questions)
    }
}

impl Questionnaire {
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionnaireError> {
        let questionnaire = Self { questions };
        questionnaire.validate()?;
        Ok(questionnaire)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn find(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Check the structural guarantees scoring relies on.
    ///
    /// Every option must contribute at least 1 in total, which keeps the
    /// score total of any complete answer set above zero. The heaviest
    /// possible answer set must still total no more than `u32::MAX`.
    fn validate(&self) -> Result<(), QuestionnaireError> {
        if self.questions.is_empty() {
            return Err(QuestionnaireError::InvalidQuestionSet(
                "question set is empty".to_string(),
            ));
        }

        let mut seen = std::collections::HashSet::new();
        let mut ceiling: u32 = 0;
        for question in &self.questions {
            if !seen.insert(question.id.as_str()) {
                return Err(QuestionnaireError::InvalidQuestionSet(format!(
                    "duplicate question id '{}'",
                    question.id
                )));
            }
            if question.options.len() != OPTIONS_PER_QUESTION {
                return Err(QuestionnaireError::InvalidQuestionSet(format!(
                    "question '{}' has {} options, expected {}",
                    question.id,
                    question.options.len(),
                    OPTIONS_PER_QUESTION
                )));
            }
            if let Some(option) = question.options.iter().find(|o| o.weights().total() == 0) {
                return Err(QuestionnaireError::InvalidQuestionSet(format!(
                    "option '{}' of question '{}' carries no weight",
                    option.text, question.id
                )));
            }

            let heaviest = question
                .options
                .iter()
                .map(|o| o.weights().total())
                .max()
                .unwrap_or(0);
            ceiling = u32::try_from(heaviest)
                .ok()
                .and_then(|h| ceiling.checked_add(h))
                .ok_or_else(|| {
                    QuestionnaireError::InvalidQuestionSet(format!(
                        "weights overflow at question '{}'",
                        question.id
                    ))
                })?;
        }

        Ok(())
    }
}

/// Selected option index per question id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<String, usize>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or replace) the answer for a question.
    pub fn record(&mut self, question_id: impl Into<String>, option_index: usize) {
        self.0.insert(question_id.into(), option_index);
    }

    pub fn get(&self, question_id: &str) -> Option<usize> {
        self.0.get(question_id).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(id, idx)| (id.as_str(), *idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(text: &str, vata: u32, pitta: u32, kapha: u32) -> QuestionOption {
        QuestionOption {
            text: text.to_string(),
            vata,
            pitta,
            kapha,
        }
    }

    fn question(id: &str) -> Question {
        Question {
            id: id.to_string(),
            prompt: format!("{}?", id),
            options: vec![
                option("a", 3, 0, 0),
                option("b", 0, 3, 0),
                option("c", 0, 0, 3),
                option("d", 1, 1, 1),
            ],
        }
    }

    #[test]
    fn test_scores_add_elementwise() {
        let mut total = DoshaScores::new(1, 2, 3);
        total += DoshaScores::new(3, 0, 1);
        assert_eq!(total, DoshaScores::new(4, 2, 4));
        assert_eq!(total + DoshaScores::default(), total);
        assert_eq!(total.total(), 10);
    }

    #[test]
    fn test_scores_iterate_in_registration_order() {
        let scores = DoshaScores::new(5, 6, 7);
        let order: Vec<_> = scores.iter().collect();
        assert_eq!(
            order,
            vec![(Dosha::Vata, 5), (Dosha::Pitta, 6), (Dosha::Kapha, 7)]
        );
    }

    #[test]
    fn test_dosha_serializes_lowercase() {
        let json = serde_json::to_string(&Dosha::Pitta).unwrap();
        assert_eq!(json, "\"pitta\"");
        assert_eq!(Dosha::Kapha.to_string(), "kapha");
    }

    #[test]
    fn test_option_out_of_range() {
        let q = question("skin");
        assert!(q.option(3).is_ok());
        assert_eq!(
            q.option(4),
            Err(QuestionnaireError::OptionOutOfRange {
                question: "skin".to_string(),
                index: 4,
                available: 4,
            })
        );
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        assert!(matches!(
            Questionnaire::new(vec![question("same"), question("same")]),
            Err(QuestionnaireError::InvalidQuestionSet(msg)) if msg.contains("duplicate")
        ));
    }

    #[test]
    fn test_validate_rejects_weightless_option() {
        let mut q = question("skin");
        q.options[2] = option("nothing", 0, 0, 0);
        assert!(Questionnaire::new(vec![q]).is_err());
    }

    #[test]
    fn test_validate_rejects_wrong_option_count() {
        let mut q = question("skin");
        q.options.pop();
        assert!(Questionnaire::new(vec![q]).is_err());
        assert!(Questionnaire::new(vec![]).is_err());
    }

    #[test]
    fn test_validate_rejects_overflowing_weights() {
        let mut q = question("skin");
        q.options[0] = option("huge", u32::MAX, 1, 0);
        assert!(matches!(
            Questionnaire::new(vec![q.clone()]),
            Err(QuestionnaireError::InvalidQuestionSet(msg)) if msg.contains("overflow")
        ));

        // Each question alone fits, but together they do not
        let mut split = question("other");
        q.options[0] = option("half", u32::MAX / 2 + 1, 0, 0);
        split.options[0] = option("half", u32::MAX / 2 + 1, 0, 0);
        assert!(Questionnaire::new(vec![split, q]).is_err());
    }

    #[test]
    fn test_scores_total_does_not_overflow() {
        let scores = DoshaScores::new(u32::MAX, u32::MAX, 1);
        assert_eq!(scores.total(), 2 * u64::from(u32::MAX) + 1);

        let mut saturated = DoshaScores::new(u32::MAX, 0, 0);
        saturated += DoshaScores::new(1, 2, 0);
        assert_eq!(saturated, DoshaScores::new(u32::MAX, 2, 0));
    }

    #[test]
    fn test_answer_set_replaces_existing_answer() {
        let mut answers = AnswerSet::new();
        answers.record("skin", 1);
        answers.record("skin", 2);
        assert_eq!(answers.len(), 1);
        assert_eq!(answers.get("skin"), Some(2));
        assert_eq!(answers.get("sun"), None);

        let json = serde_json::to_string(&answers).unwrap();
        assert_eq!(json, r#"{"skin":2}"#);
    }
}
