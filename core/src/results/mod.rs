//! Results report: dominant dosha, static dosha knowledge and skincare advice.

mod composer;
mod knowledge;
mod types;

pub use composer::{compose_report, dominant_dosha, modern_advice, percentages};
pub use knowledge::dosha_knowledge;
pub use types::*;
