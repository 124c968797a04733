/// Image to data URL encoding
///
/// The whole file is read before anything is encoded, so the remote call can
/// never see a partial payload.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::ImageFormat;
use std::fmt;
use std::path::PathBuf;
use tracing::debug;

use crate::error::AnalysisError;
use crate::state::intake::ImageKind;

/// A self-contained `data:<mime>;base64,<payload>` string
#[derive(Clone, PartialEq, Eq)]
pub struct DataUrl(String);

impl DataUrl {
    /// Encode raw image bytes.
    ///
    /// The MIME type comes from the file content when it is recognizable,
    /// otherwise from the kind detected at intake.
    pub fn encode(bytes: &[u8], kind: ImageKind) -> Self {
        let mime = sniff_mime(bytes).unwrap_or_else(|| kind.mime_type());
        DataUrl(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Payloads are megabytes of base64; only show the header
impl fmt::Debug for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = self.0.split(',').next().unwrap_or_default();
        write!(f, "DataUrl({},… {} bytes)", header, self.0.len())
    }
}

fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    match image::guess_format(bytes).ok()? {
        ImageFormat::Jpeg => Some("image/jpeg"),
        ImageFormat::Png => Some("image/png"),
        ImageFormat::WebP => Some("image/webp"),
        _ => None,
    }
}

/// Read the selected image from disk and encode it
pub async fn read_data_url(path: PathBuf, kind: ImageKind) -> Result<DataUrl, AnalysisError> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| AnalysisError::Read(format!("{}: {}", path.display(), e)))?;

    debug!("📖 Read {} bytes from {}", bytes.len(), path.display());

    Ok(DataUrl::encode(&bytes, kind))
}
