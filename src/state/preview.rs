/// Scoped display references for the image preview
///
/// A `DisplayRef` is the only way to get an image handle for the preview.
/// It takes a lease from a `PreviewLedger` when created and returns it when
/// dropped, so every exit path (reset, replace, teardown) releases it and
/// leaks show up in `PreviewLedger::live()`.

use iced::widget::image::Handle;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Counts outstanding display references
#[derive(Debug, Clone, Default)]
pub struct PreviewLedger {
    live: Arc<AtomicUsize>,
}

impl PreviewLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a display reference for an image on disk
    pub fn acquire(&self, path: &Path) -> DisplayRef {
        let count = self.live.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("🖼️  Preview acquired for {} ({} live)", path.display(), count);

        DisplayRef {
            handle: Handle::from_path(path),
            path: path.to_path_buf(),
            live: Arc::clone(&self.live),
        }
    }

    /// Number of display references not yet released
    pub fn live(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }
}

/// Preview handle for the selected image; released on drop
pub struct DisplayRef {
    handle: Handle,
    path: PathBuf,
    live: Arc<AtomicUsize>,
}

impl DisplayRef {
    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for DisplayRef {
    fn drop(&mut self) {
        let remaining = self.live.fetch_sub(1, Ordering::SeqCst) - 1;
        debug!("🖼️  Preview released for {} ({} live)", self.path.display(), remaining);
    }
}

impl std::fmt::Debug for DisplayRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DisplayRef")
            .field("path", &self.path)
            .finish()
    }
}
