//! Questionnaire navigation state machine.
//!
//! A session walks the question list one index at a time. Selections are
//! recorded straight into the answer set, so stepping back and forward
//! restores earlier choices. Advancing past the last question scores the
//! answers and closes the session.

use std::sync::Arc;

use crate::error::QuestionnaireError;

use super::scoring::score_answers;
use super::types::{AnswerSet, DoshaScores, Question, Questionnaire};

/// Outcome of a successful `advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved on to the question at this index
    Next(usize),
    /// The last question was answered; final scores
    Complete(DoshaScores),
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuestionnaireSession {
    questionnaire: Arc<Questionnaire>,
    current: usize,
    answers: AnswerSet,
    selected: Option<usize>,
    complete: bool,
}

impl QuestionnaireSession {
    /// Start at the first question with no answers.
    ///
    /// A `Questionnaire` is always validated and non-empty, so the first
    /// question exists.
    pub fn new(questionnaire: Arc<Questionnaire>) -> Self {
        Self {
            questionnaire,
            current: 0,
            answers: AnswerSet::new(),
            selected: None,
            complete: false,
        }
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> &Question {
        &self.questionnaire.questions()[self.current]
    }

    pub fn selected_option(&self) -> Option<usize> {
        self.selected
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn is_last_question(&self) -> bool {
        self.current + 1 == self.questionnaire.len()
    }

    pub fn can_advance(&self) -> bool {
        !self.complete && self.selected.is_some()
    }

    pub fn can_retreat(&self) -> bool {
        !self.complete && self.current > 0
    }

    /// "3 of 6" style position label.
    pub fn position(&self) -> String {
        format!("{} of {}", self.current + 1, self.questionnaire.len())
    }

    /// Progress through the question list, counting the current question.
    pub fn progress_percent(&self) -> f64 {
        (self.current + 1) as f64 / self.questionnaire.len() as f64 * 100.0
    }

    /// Choose an option for the current question. Does not move.
    pub fn select(&mut self, option_index: usize) -> Result<(), QuestionnaireError> {
        if self.complete {
            return Err(QuestionnaireError::AlreadyComplete);
        }
        let question = self.current_question();
        question.option(option_index)?;
        let id = question.id.clone();

        tracing::debug!("Question '{}': selected option {}", id, option_index);
        self.answers.record(id, option_index);
        self.selected = Some(option_index);
        Ok(())
    }

    /// Move to the next question, or finish on the last one.
    pub fn advance(&mut self) -> Result<Advance, QuestionnaireError> {
        if self.complete {
            return Err(QuestionnaireError::AlreadyComplete);
        }
        if self.selected.is_none() {
            let id = self.current_question().id.clone();
            tracing::warn!("Advance rejected: no option selected for '{}'", id);
            return Err(QuestionnaireError::NoSelection(id));
        }

        if self.is_last_question() {
            let scores = score_answers(&self.questionnaire, &self.answers)?;
            self.complete = true;
            tracing::info!(
                "Questionnaire complete: vata={} pitta={} kapha={}",
                scores.vata,
                scores.pitta,
                scores.kapha
            );
            return Ok(Advance::Complete(scores));
        }

        self.current += 1;
        self.restore_selection();
        Ok(Advance::Next(self.current))
    }

    /// Step back one question, restoring its earlier answer if any.
    pub fn retreat(&mut self) -> Result<usize, QuestionnaireError> {
        if self.complete {
            return Err(QuestionnaireError::AlreadyComplete);
        }
        if self.current == 0 {
            return Err(QuestionnaireError::AtFirstQuestion);
        }

        self.current -= 1;
        self.restore_selection();
        Ok(self.current)
    }

    fn restore_selection(&mut self) {
        let id = &self.questionnaire.questions()[self.current].id;
        self.selected = self.answers.get(id);
    }
}
