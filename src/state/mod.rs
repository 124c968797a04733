/// State management module
///
/// This module handles all application state, including:
/// - The application controller and its selected image (controller.rs)
/// - The analysis attempt state machine (attempt.rs)
/// - File intake validation and drop gestures (intake.rs)
/// - Scoped display references for the preview (preview.rs)

pub mod attempt;
pub mod controller;
pub mod intake;
pub mod preview;

pub use attempt::AttemptId;
pub use controller::Controller;
