/// Remote plant analysis
///
/// This module handles:
/// - The fixed instruction prompt and token cap (prompt.rs)
/// - Reading the selected image into a base64 data URL (encode.rs)
/// - The chat completion call to the hosted vision model (client.rs)

pub mod prompt;
pub mod encode;
pub mod client;

pub use client::{AnalysisRequest, OpenAiClient};
pub use encode::DataUrl;
