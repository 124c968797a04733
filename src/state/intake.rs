/// File intake: which dropped or picked files become a selected image
///
/// Only JPEG, PNG and WebP are accepted (by extension). A drop gesture
/// carrying several files forwards the first acceptable one and silently
/// discards the rest.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::IntakeError;

/// Extensions offered by the picker and accepted from drops
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["jpeg", "jpg", "png", "webp"];

/// Supported image kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Jpeg,
    Png,
    Webp,
}

impl ImageKind {
    /// Map a file extension (case-insensitive) to an image kind
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "jpeg" | "jpg" => Some(ImageKind::Jpeg),
            "png" => Some(ImageKind::Png),
            "webp" => Some(ImageKind::Webp),
            _ => None,
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ImageKind::Jpeg => "image/jpeg",
            ImageKind::Png => "image/png",
            ImageKind::Webp => "image/webp",
        }
    }
}

/// A file that passed intake validation, ready for `Controller::accept_image`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCandidate {
    pub path: PathBuf,
    pub kind: ImageKind,
}

impl ImageCandidate {
    /// Validate a path against the allow-list
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, IntakeError> {
        let path = path.into();
        let kind = kind_of(&path)?;

        if !path.is_file() {
            return Err(IntakeError::NotAFile(path));
        }

        Ok(ImageCandidate { path, kind })
    }

    /// File name for log messages
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    }
}

fn kind_of(path: &Path) -> Result<ImageKind, IntakeError> {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_string())
        .ok_or_else(|| IntakeError::MissingExtension(path.to_path_buf()))?;

    ImageKind::from_extension(&extension).ok_or_else(|| IntakeError::UnsupportedType {
        path: path.to_path_buf(),
        extension,
    })
}

/// First acceptable file of a batch; the others are discarded
// NOTE: discarding extra files gives the user no feedback. Kept as-is.
pub fn first_accepted<I>(paths: I) -> Option<ImageCandidate>
where
    I: IntoIterator<Item = PathBuf>,
{
    for path in paths {
        match ImageCandidate::from_path(path) {
            Ok(candidate) => return Some(candidate),
            Err(e) => warn!("🚫 Rejected at intake: {}", e),
        }
    }
    None
}

/// Where the drop gesture currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Gesture {
    #[default]
    Idle,
    /// Files hovering over the window, nothing accepted yet
    Hovering,
    /// Drop happened but every file so far was rejected
    Dropped,
    /// A file of this gesture was already forwarded
    Settled,
}

/// Turns per-file window events into drop gestures
///
/// The windowing layer reports every file of a multi-file drop as its own
/// `FileHovered`/`FileDropped` event. This tracker makes sure only one file per
/// gesture is forwarded.
#[derive(Debug, Clone, Default)]
pub struct DropTracker {
    gesture: Gesture,
}

impl DropTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drag hover signal for the drop zone visuals
    pub fn is_drag_active(&self) -> bool {
        self.gesture == Gesture::Hovering
    }

    /// A file entered the window
    pub fn hovered(&mut self) {
        self.gesture = Gesture::Hovering;
    }

    /// The hovering files left the window without being dropped
    pub fn hover_left(&mut self) {
        self.gesture = Gesture::Idle;
    }

    /// A file was dropped; returns it if it is the first acceptable file of the gesture
    pub fn dropped(&mut self, path: PathBuf) -> Option<ImageCandidate> {
        if self.gesture == Gesture::Settled {
            debug!("Discarding extra dropped file: {}", path.display());
            return None;
        }

        match first_accepted([path]) {
            Some(candidate) => {
                self.gesture = Gesture::Settled;
                Some(candidate)
            }
            None => {
                self.gesture = Gesture::Dropped;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        File::create(&path).unwrap();
        path
    }

    #[test]
    fn test_allowed_extensions_map_to_kinds() {
        assert_eq!(ImageKind::from_extension("JPG"), Some(ImageKind::Jpeg));
        assert_eq!(ImageKind::from_extension("jpeg"), Some(ImageKind::Jpeg));
        assert_eq!(ImageKind::from_extension("png"), Some(ImageKind::Png));
        assert_eq!(ImageKind::from_extension("WebP"), Some(ImageKind::Webp));
        assert_eq!(ImageKind::from_extension("gif"), None);
        assert_eq!(ImageKind::from_extension("txt"), None);

        for ext in ALLOWED_EXTENSIONS {
            assert!(ImageKind::from_extension(ext).is_some());
        }
    }

    #[test]
    fn test_candidate_validation() {
        let dir = tempfile::tempdir().unwrap();

        let png = touch(dir.path(), "leaf.png");
        let candidate = ImageCandidate::from_path(&png).unwrap();
        assert_eq!(candidate.kind, ImageKind::Png);
        assert_eq!(candidate.file_name(), "leaf.png");

        let notes = touch(dir.path(), "notes.txt");
        assert!(matches!(
            ImageCandidate::from_path(&notes),
            Err(IntakeError::UnsupportedType { .. })
        ));

        let bare = touch(dir.path(), "README");
        assert!(matches!(
            ImageCandidate::from_path(&bare),
            Err(IntakeError::MissingExtension(_))
        ));

        let missing = dir.path().join("gone.jpg");
        assert!(matches!(
            ImageCandidate::from_path(&missing),
            Err(IntakeError::NotAFile(_))
        ));
    }

    #[test]
    fn test_first_accepted_skips_rejected_files() {
        let dir = tempfile::tempdir().unwrap();
        let txt = touch(dir.path(), "a.txt");
        let first = touch(dir.path(), "b.jpg");
        let second = touch(dir.path(), "c.png");

        let picked = first_accepted(vec![txt, first.clone(), second]).unwrap();
        assert_eq!(picked.path, first);

        assert!(first_accepted(Vec::new()).is_none());
    }

    #[test]
    fn test_multi_file_drop_forwards_only_first() {
        let dir = tempfile::tempdir().unwrap();
        let a = touch(dir.path(), "a.png");
        let b = touch(dir.path(), "b.png");

        let mut tracker = DropTracker::new();
        tracker.hovered();
        tracker.hovered();
        assert!(tracker.is_drag_active());

        assert_eq!(tracker.dropped(a.clone()).map(|c| c.path), Some(a));
        assert!(!tracker.is_drag_active());
        assert!(tracker.dropped(b.clone()).is_none());

        // A new gesture accepts again
        tracker.hovered();
        assert_eq!(tracker.dropped(b.clone()).map(|c| c.path), Some(b));
    }

    #[test]
    fn test_rejected_file_keeps_gesture_open() {
        let dir = tempfile::tempdir().unwrap();
        let txt = touch(dir.path(), "a.txt");
        let png = touch(dir.path(), "b.png");

        let mut tracker = DropTracker::new();
        tracker.hovered();
        assert!(tracker.dropped(txt).is_none());
        assert!(!tracker.is_drag_active());
        assert_eq!(tracker.dropped(png.clone()).map(|c| c.path), Some(png));
        assert!(!tracker.is_drag_active());
    }

    #[test]
    fn test_rejected_only_drop_ends_drag() {
        let dir = tempfile::tempdir().unwrap();
        let txt = touch(dir.path(), "notes.txt");

        let mut tracker = DropTracker::new();
        tracker.hovered();
        assert!(tracker.is_drag_active());
        assert!(tracker.dropped(txt).is_none());
        assert!(!tracker.is_drag_active());

        // Next gesture starts fresh
        tracker.hovered();
        assert!(tracker.is_drag_active());
    }

    #[test]
    fn test_hover_left_clears_drag() {
        let mut tracker = DropTracker::new();
        tracker.hovered();
        tracker.hover_left();
        assert!(!tracker.is_drag_active());
    }
}
