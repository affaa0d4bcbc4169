//! Domain logic for the AyurSkin wizard: photo intake, the constitution
//! questionnaire, and the combined results report.

pub mod analyzer;
pub mod error;
pub mod questionnaire;
pub mod results;
pub mod wizard;

pub use analyzer::{
    default_mock_config, AnalysisProvider, ImageUpload, MockAnalysisConfig, MockAnalysisProvider,
    SkinAnalysis,
};
pub use error::{AyurSkinError, QuestionnaireError, ResultsError, WizardError};
pub use questionnaire::{Dosha, DoshaScores};
pub use results::DoshaReport;
pub use wizard::{WizardState, WizardStep};
