use thiserror::Error;

use crate::wizard::WizardStep;

#[derive(Debug, Error)]
pub enum AyurSkinError {
    #[error("Invalid file type: {0}. Please upload an image file (JPG, PNG, etc.)")]
    InvalidFileType(String),

    #[error("Questionnaire error: {0}")]
    Questionnaire(#[from] QuestionnaireError),

    #[error("Results error: {0}")]
    Results(#[from] ResultsError),

    #[error("Wizard error: {0}")]
    Wizard(#[from] WizardError),

    #[error("Fitzpatrick type {0} is outside 1..=6")]
    InvalidFitzpatrick(u8),

    #[error("Analysis error: {0}")]
    Analysis(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Rejected questionnaire transitions and malformed question sets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionnaireError {
    #[error("no option selected for question '{0}'")]
    NoSelection(String),

    #[error("already at the first question")]
    AtFirstQuestion,

    #[error("questionnaire is already complete")]
    AlreadyComplete,

    #[error("option {index} out of range for question '{question}' ({available} options)")]
    OptionOutOfRange {
        question: String,
        index: usize,
        available: usize,
    },

    #[error("unknown question '{0}'")]
    UnknownQuestion(String),

    #[error("invalid question set: {0}")]
    InvalidQuestionSet(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResultsError {
    #[error("dosha scores are all zero")]
    EmptyScores,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("cannot {action} while on the {from} step")]
    InvalidTransition {
        from: WizardStep,
        action: &'static str,
    },
}

impl From<AyurSkinError> for String {
    fn from(err: AyurSkinError) -> Self {
        err.to_string()
    }
}
