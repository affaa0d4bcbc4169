//! Photo intake: media-type validation and the analysis hand-off.
//!
//! Analysis results arrive after a delay. Each `begin` issues a fresh
//! ticket, and `finish` only accepts the ticket that is still current, so a
//! result that lands after `cancel`, `reset` or a newer upload is dropped.

use crate::error::AyurSkinError;

use super::provider::AnalysisProvider;
use super::types::{ImageUpload, SkinAnalysis};

/// Accept any `image/*` media type.
pub fn validate_media_type(media_type: &str) -> Result<(), AyurSkinError> {
    if media_type.to_ascii_lowercase().starts_with("image/") {
        Ok(())
    } else {
        let shown = if media_type.is_empty() { "unknown" } else { media_type };
        Err(AyurSkinError::InvalidFileType(shown.to_string()))
    }
}

/// Identifies one in-flight analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum IntakeState {
    /// Waiting for a photo
    Idle,
    /// Photo accepted, analysis pending
    Analyzing {
        ticket: AnalysisTicket,
        file_name: String,
    },
    /// Analysis delivered
    Analyzed(SkinAnalysis),
}

#[derive(Debug, Clone)]
pub struct PhotoIntake {
    state: IntakeState,
    issued: u64,
}

impl Default for PhotoIntake {
    fn default() -> Self {
        Self::new()
    }
}

impl PhotoIntake {
    pub fn new() -> Self {
        Self {
            state: IntakeState::Idle,
            issued: 0,
        }
    }

    pub fn state(&self) -> &IntakeState {
        &self.state
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self.state, IntakeState::Analyzing { .. })
    }

    /// Name of the file currently being analyzed.
    pub fn pending_file(&self) -> Option<&str> {
        match &self.state {
            IntakeState::Analyzing { file_name, .. } => Some(file_name),
            _ => None,
        }
    }

    /// Validate the upload and start a new analysis.
    ///
    /// A rejected upload leaves the current state untouched. Starting while
    /// another analysis is pending supersedes it.
    pub fn begin(&mut self, upload: &ImageUpload) -> Result<AnalysisTicket, AyurSkinError> {
        if let Err(e) = validate_media_type(&upload.media_type) {
            tracing::warn!("Rejected upload '{}': {}", upload.file_name, e);
            return Err(e);
        }

        self.issued += 1;
        let ticket = AnalysisTicket(self.issued);
        tracing::debug!("Analysis {:?} started for '{}'", ticket, upload.file_name);
        self.state = IntakeState::Analyzing {
            ticket,
            file_name: upload.file_name.clone(),
        };
        Ok(ticket)
    }

    /// Run the provider for `ticket` if it is still the pending analysis.
    ///
    /// Returns `Ok(None)` for a stale ticket. A provider failure drops back
    /// to `Idle` so the user can try again.
    pub fn finish(
        &mut self,
        ticket: AnalysisTicket,
        provider: &dyn AnalysisProvider,
        upload: &ImageUpload,
    ) -> Result<Option<SkinAnalysis>, AyurSkinError> {
        let file_name = match &self.state {
            IntakeState::Analyzing {
                ticket: pending,
                file_name,
            } if *pending == ticket => file_name.clone(),
            _ => {
                tracing::debug!("Ignoring stale analysis {:?}", ticket);
                return Ok(None);
            }
        };

        match provider.analyze(upload) {
            Ok(analysis) => {
                tracing::info!(
                    "Analysis {:?} of '{}' complete via {}",
                    ticket,
                    file_name,
                    provider.name()
                );
                self.state = IntakeState::Analyzed(analysis);
                Ok(Some(analysis))
            }
            Err(e) => {
                tracing::warn!(
                    "Analysis {:?} of '{}' failed via {}: {}",
                    ticket,
                    file_name,
                    provider.name(),
                    e
                );
                self.state = IntakeState::Idle;
                Err(e)
            }
        }
    }

    /// Abandon any pending analysis.
    pub fn cancel(&mut self) {
        if let IntakeState::Analyzing { ticket, .. } = &self.state {
            tracing::debug!("Analysis {:?} cancelled", ticket);
            self.state = IntakeState::Idle;
        }
    }

    /// Forget everything, including a delivered analysis.
    pub fn reset(&mut self) {
        self.state = IntakeState::Idle;
    }
}
