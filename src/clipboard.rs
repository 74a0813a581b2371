//! System clipboard backed by `arboard`.

use canifly_core::{CanIFlyError, CanIFlyResult, ClipboardSink};

/// Opens the platform clipboard on every write. Holding one open handle
/// for the life of the app is not reliable on all platforms.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn set_text(&self, text: &str) -> CanIFlyResult<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| CanIFlyError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| CanIFlyError::Clipboard(e.to_string()))
    }
}
