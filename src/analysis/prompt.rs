/// Instruction sent alongside every plant photo.
///
/// Asks for a markdown report with: scientific name, common name,
/// identification confidence, description, characteristics (height, leaf
/// type, color, growing zone) and care requirements (light, water, soil pH).
pub const ANALYSIS_PROMPT: &str = "Analyze this plant image and provide detailed information in markdown format. \
Include: scientific name, common name, identification confidence, description, \
characteristics (height, leaf type, color, growing zone), and care requirements \
(light, water, soil pH). Format it with proper markdown headings and lists.";

/// Output token budget for one analysis response
pub const MAX_OUTPUT_TOKENS: u32 = 1000;
