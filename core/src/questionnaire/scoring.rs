//! Score reduction: answer set -> per-dosha totals.

use crate::error::QuestionnaireError;

use super::types::{AnswerSet, DoshaScores, Questionnaire};

/// Sum the weights of every selected option in `answers`.
///
/// Plain integer addition, so the result does not depend on the order the
/// answers were given in. An answer that names an unknown question or an
/// option outside its question is an error; nothing is skipped.
pub fn score_answers(
    questionnaire: &Questionnaire,
    answers: &AnswerSet,
) -> Result<DoshaScores, QuestionnaireError> {
    let mut scores = DoshaScores::default();

    for (question_id, option_index) in answers.iter() {
        let question = questionnaire
            .find(question_id)
            .ok_or_else(|| QuestionnaireError::UnknownQuestion(question_id.to_string()))?;
        scores += question.option(option_index)?.weights();
    }

    tracing::debug!(
        "Scored {} answers: vata={} pitta={} kapha={}",
        answers.len(),
        scores.vata,
        scores.pitta,
        scores.kapha
    );

    Ok(scores)
}
