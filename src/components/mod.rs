pub mod analysis_results;
pub mod dosha_questionnaire;
pub mod photo_upload;
pub mod toast;
pub mod welcome_hero;
