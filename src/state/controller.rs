/// Application controller
///
/// Owns every piece of application state and sequences
/// intake → read → encode → remote call → render.
///
/// The async steps are not run here. Each operation returns the next piece of
/// work (`ReadJob`, `AnalysisCall`) and the shell runs it as an iced `Task`,
/// feeding the outcome back in. All mutation therefore happens on the UI
/// update loop, one message at a time.

use std::path::PathBuf;
use tracing::{error, info, warn};

use super::attempt::{Attempt, AttemptId};
use super::intake::{ImageCandidate, ImageKind};
use super::preview::{DisplayRef, PreviewLedger};
use crate::analysis::{AnalysisRequest, DataUrl, OpenAiClient};
use crate::config::Settings;
use crate::error::{AnalysisError, ConfigError};

/// The one image currently chosen by the user
#[derive(Debug)]
pub struct SelectedImage {
    pub path: PathBuf,
    pub kind: ImageKind,
    preview: DisplayRef,
}

impl SelectedImage {
    pub fn preview(&self) -> &DisplayRef {
        &self.preview
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    }
}

/// Read step of an attempt: load the file into a data URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadJob {
    pub attempt: AttemptId,
    pub path: PathBuf,
    pub kind: ImageKind,
}

/// Remote step of an attempt, only built once the full read has completed
#[derive(Debug, Clone)]
pub struct AnalysisCall {
    pub attempt: AttemptId,
    client: OpenAiClient,
    request: AnalysisRequest,
}

impl AnalysisCall {
    pub async fn run(self) -> Result<Option<String>, AnalysisError> {
        self.client.analyze(&self.request).await
    }
}

#[derive(Debug)]
pub struct Controller {
    selected: Option<SelectedImage>,
    attempt: Attempt,
    attempt_id: AttemptId,
    client: Option<OpenAiClient>,
    config_error: Option<ConfigError>,
    ledger: PreviewLedger,
}

impl Controller {
    /// Build the controller from startup settings.
    ///
    /// A missing credential is recorded as a fatal configuration error and the
    /// client stays unconfigured. There is no retry.
    pub fn initialize(settings: &Settings) -> Self {
        let (client, config_error) = match OpenAiClient::from_settings(settings) {
            Ok(client) => {
                info!("✅ Analysis client ready");
                (Some(client), None)
            }
            Err(e) => {
                error!("❌ Configuration error: {}", e);
                (None, Some(e))
            }
        };

        Controller {
            selected: None,
            attempt: Attempt::Idle,
            attempt_id: AttemptId::default(),
            client,
            config_error,
            ledger: PreviewLedger::new(),
        }
    }

    // ========== Queries ==========

    pub fn selected(&self) -> Option<&SelectedImage> {
        self.selected.as_ref()
    }

    #[cfg(test)]
    pub fn attempt(&self) -> &Attempt {
        &self.attempt
    }

    pub fn is_analyzing(&self) -> bool {
        self.attempt.is_in_flight()
    }

    pub fn analysis_result(&self) -> Option<&str> {
        self.attempt.result()
    }

    /// Operational error of the last attempt (not the configuration error)
    pub fn error_message(&self) -> Option<&str> {
        self.attempt.error()
    }

    pub fn config_error(&self) -> Option<&ConfigError> {
        self.config_error.as_ref()
    }

    /// Whether the Analyze action should be offered
    pub fn can_analyze(&self) -> bool {
        self.selected.is_some() && !self.is_analyzing() && self.analysis_result().is_none()
    }

    /// Display references currently alive (0 or 1 when nothing leaks)
    pub fn live_previews(&self) -> usize {
        self.ledger.live()
    }

    // ========== Operations ==========

    /// Store a new selected image, replacing (and releasing) any previous one
    pub fn accept_image(&mut self, candidate: ImageCandidate) {
        // Release the old display reference before allocating the new one
        self.selected = None;
        self.attempt = Attempt::Idle;
        self.attempt_id = self.attempt_id.next();

        let preview = self.ledger.acquire(&candidate.path);
        info!("📷 Selected {}", candidate.file_name());

        self.selected = Some(SelectedImage {
            path: candidate.path,
            kind: candidate.kind,
            preview,
        });
    }

    /// Start an attempt.
    ///
    /// Returns the read step to run, or `None` when there is nothing to do:
    /// no selected image (no-op) or no configured client (fails immediately).
    pub fn request_analysis(&mut self) -> Option<ReadJob> {
        let selected = self.selected.as_ref()?;

        if self.is_analyzing() {
            warn!("Analysis already in progress, ignoring request");
            return None;
        }

        if self.client.is_none() {
            let err = AnalysisError::ClientNotInitialized;
            error!("❌ {}", err);
            self.attempt = Attempt::Failed(err.to_string());
            return None;
        }

        self.attempt_id = self.attempt_id.next();
        self.attempt = Attempt::Reading;
        info!("🔍 Analyzing {}", selected.file_name());

        Some(ReadJob {
            attempt: self.attempt_id,
            path: selected.path.clone(),
            kind: selected.kind,
        })
    }

    /// The read step finished; returns the remote step on success
    pub fn image_encoded(
        &mut self,
        attempt: AttemptId,
        encoded: Result<DataUrl, AnalysisError>,
    ) -> Option<AnalysisCall> {
        if !self.is_current(attempt, Attempt::Reading) {
            return None;
        }

        let image = match encoded {
            Ok(image) => image,
            Err(e) => {
                self.fail(e);
                return None;
            }
        };

        // The client never changes after initialize
        let Some(client) = self.client.clone() else {
            self.fail(AnalysisError::ClientNotInitialized);
            return None;
        };

        self.attempt = Attempt::Calling;

        Some(AnalysisCall {
            attempt,
            client,
            request: AnalysisRequest::new(image),
        })
    }

    /// The remote step finished
    pub fn analysis_finished(
        &mut self,
        attempt: AttemptId,
        outcome: Result<Option<String>, AnalysisError>,
    ) {
        if !self.is_current(attempt, Attempt::Calling) {
            return;
        }

        self.attempt = match outcome {
            Ok(Some(text)) if !text.is_empty() => {
                info!("🌱 Analysis complete ({} chars)", text.len());
                Attempt::Succeeded(text)
            }
            Ok(_) => {
                warn!("⚠️  Model returned no analysis text");
                Attempt::EmptyResult
            }
            Err(e) => {
                error!("❌ Error analyzing image: {:?}", e);
                Attempt::Failed(e.to_string())
            }
        };
    }

    /// Return to the initial state, releasing the display reference
    pub fn reset(&mut self) {
        if let Some(selected) = self.selected.take() {
            info!("🧹 Cleared {}", selected.file_name());
        }
        self.attempt = Attempt::Idle;
        self.attempt_id = self.attempt_id.next();
    }

    fn fail(&mut self, err: AnalysisError) {
        error!("❌ Error analyzing image: {:?}", err);
        self.attempt = Attempt::Failed(err.to_string());
    }

    /// Outcome belongs to the running attempt and arrives in the expected step
    fn is_current(&self, attempt: AttemptId, expected: Attempt) -> bool {
        if attempt != self.attempt_id || self.attempt != expected {
            info!(
                "Discarding stale outcome (attempt state: {})",
                self.attempt.label()
            );
            return false;
        }
        true
    }
}
