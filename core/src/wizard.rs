//! Top-level wizard controller.
//!
//! Steps only move forward (welcome -> photo -> questionnaire -> results);
//! `start_over` is the single way back and discards everything collected.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analyzer::SkinAnalysis;
use crate::error::{ResultsError, WizardError};
use crate::questionnaire::DoshaScores;
use crate::results::{compose_report, DoshaReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    Welcome,
    Photo,
    Questionnaire,
    Results,
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WizardStep::Welcome => "welcome",
            WizardStep::Photo => "photo",
            WizardStep::Questionnaire => "questionnaire",
            WizardStep::Results => "results",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WizardState {
    step: WizardStep,
    skin_analysis: Option<SkinAnalysis>,
    dosha_scores: Option<DoshaScores>,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Welcome,
            skin_analysis: None,
            dosha_scores: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn skin_analysis(&self) -> Option<&SkinAnalysis> {
        self.skin_analysis.as_ref()
    }

    pub fn dosha_scores(&self) -> Option<&DoshaScores> {
        self.dosha_scores.as_ref()
    }

    /// welcome -> photo
    pub fn begin(&mut self) -> Result<(), WizardError> {
        self.expect(WizardStep::Welcome, "begin")?;
        self.move_to(WizardStep::Photo);
        Ok(())
    }

    /// photo -> questionnaire
    pub fn record_analysis(&mut self, analysis: SkinAnalysis) -> Result<(), WizardError> {
        self.expect(WizardStep::Photo, "record an analysis")?;
        self.skin_analysis = Some(analysis);
        self.move_to(WizardStep::Questionnaire);
        Ok(())
    }

    /// questionnaire -> results
    pub fn record_scores(&mut self, scores: DoshaScores) -> Result<(), WizardError> {
        self.expect(WizardStep::Questionnaire, "record scores")?;
        self.dosha_scores = Some(scores);
        self.move_to(WizardStep::Results);
        Ok(())
    }

    /// results -> welcome, dropping both collected records.
    pub fn start_over(&mut self) -> Result<(), WizardError> {
        self.expect(WizardStep::Results, "start over")?;
        self.skin_analysis = None;
        self.dosha_scores = None;
        self.move_to(WizardStep::Welcome);
        Ok(())
    }

    /// The results report, once both records are in.
    pub fn report(&self) -> Option<Result<DoshaReport, ResultsError>> {
        match (&self.skin_analysis, &self.dosha_scores) {
            (Some(analysis), Some(scores)) => Some(compose_report(analysis, scores)),
            _ => None,
        }
    }

    fn expect(&self, step: WizardStep, action: &'static str) -> Result<(), WizardError> {
        if self.step == step {
            Ok(())
        } else {
            tracing::warn!("Wizard cannot {} from {}", action, self.step);
            Err(WizardError::InvalidTransition {
                from: self.step,
                action,
            })
        }
    }

    fn move_to(&mut self, step: WizardStep) {
        tracing::debug!("Wizard {} -> {}", self.step, step);
        self.step = step;
    }
}
