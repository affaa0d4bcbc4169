//! Report composition: dominant dosha plus analysis-driven advice.

use crate::analyzer::{Oiliness, Pigmentation, Redness, SkinAnalysis};
use crate::error::ResultsError;
use crate::questionnaire::{Dosha, DoshaScores};

use super::knowledge::dosha_knowledge;
use super::types::{DoshaReport, DoshaShare};

const HYDRATION_ADVICE: &str = "Use hyaluronic acid serums for hydration";
const REDNESS_ADVICE: &str = "Consider niacinamide to reduce redness";
const BRIGHTENING_ADVICE: &str = "Vitamin C serum for pigmentation";
const STANDING_ADVICE: [&str; 2] = [
    "SPF 30+ daily protection essential",
    "Gentle cleansing twice daily",
];

/// Each dosha's share of the total, in registration order.
pub fn percentages(scores: &DoshaScores) -> Result<Vec<DoshaShare>, ResultsError> {
    let total = scores.total();
    if total == 0 {
        return Err(ResultsError::EmptyScores);
    }

    Ok(scores
        .iter()
        .map(|(dosha, score)| DoshaShare {
            dosha,
            score,
            percentage: score as f64 / total as f64 * 100.0,
        })
        .collect())
}

/// The dosha with the largest share.
///
/// Ties go to the first maximum in registration order (Vata, Pitta, Kapha).
pub fn dominant_dosha(scores: &DoshaScores) -> Result<Dosha, ResultsError> {
    let shares = percentages(scores)?;
    let mut best = shares[0];
    for share in &shares[1..] {
        if share.percentage > best.percentage {
            best = *share;
        }
    }
    Ok(best.dosha)
}

/// Advice lines triggered by the analysis, followed by the standing advice.
pub fn modern_advice(analysis: &SkinAnalysis) -> Vec<String> {
    let mut advice = Vec::new();
    if analysis.oiliness == Oiliness::Dry {
        advice.push(HYDRATION_ADVICE.to_string());
    }
    if analysis.redness != Redness::None {
        advice.push(REDNESS_ADVICE.to_string());
    }
    if analysis.pigmentation == Pigmentation::Uneven {
        advice.push(BRIGHTENING_ADVICE.to_string());
    }
    advice.extend(STANDING_ADVICE.iter().map(|s| s.to_string()));
    advice
}

/// Combine the analysis and questionnaire scores into the final report.
pub fn compose_report(
    analysis: &SkinAnalysis,
    scores: &DoshaScores,
) -> Result<DoshaReport, ResultsError> {
    let shares = percentages(scores)?;
    let dominant = dominant_dosha(scores)?;
    let knowledge = dosha_knowledge();

    tracing::info!(
        "Report composed: dominant={} ({} of {})",
        dominant,
        scores.get(dominant),
        scores.total()
    );

    Ok(DoshaReport {
        dominant,
        profile: knowledge.profile(dominant).clone(),
        scores: *scores,
        shares,
        analysis: *analysis,
        fitzpatrick_description: knowledge
            .fitzpatrick_description(analysis.fitzpatrick_type)
            .to_string(),
        modern_advice: modern_advice(analysis),
    })
}
