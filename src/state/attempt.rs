/// Analysis attempt state machine
///
/// `Idle → Reading → Calling → (Succeeded | EmptyResult | Failed)`
///
/// The result text and the operational error live in the terminal variants,
/// so a result and an error can never be set at the same time.

/// Message shown when the model answered without any text
pub const EMPTY_RESULT_MESSAGE: &str = "No analysis results received";

/// Stamp identifying one attempt; outcomes for older stamps are discarded
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct AttemptId(u64);

impl AttemptId {
    pub fn next(self) -> Self {
        AttemptId(self.0 + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Attempt {
    /// Nothing requested since the last image change or reset
    #[default]
    Idle,
    /// Reading the image file into a data URL
    Reading,
    /// Waiting for the remote model
    Calling,
    /// Markdown report returned by the model
    Succeeded(String),
    /// The model answered but carried no text
    EmptyResult,
    /// Read or remote failure, with its user-facing description
    Failed(String),
}

impl Attempt {
    /// True while a read or remote call is in flight
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Attempt::Reading | Attempt::Calling)
    }

    pub fn result(&self) -> Option<&str> {
        match self {
            Attempt::Succeeded(text) => Some(text),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Attempt::Failed(message) => Some(message),
            Attempt::EmptyResult => Some(EMPTY_RESULT_MESSAGE),
            _ => None,
        }
    }

    /// Short label for logs
    pub fn label(&self) -> &'static str {
        match self {
            Attempt::Idle => "idle",
            Attempt::Reading => "reading",
            Attempt::Calling => "calling",
            Attempt::Succeeded(_) => "succeeded",
            Attempt::EmptyResult => "empty-result",
            Attempt::Failed(_) => "failed",
        }
    }
}
