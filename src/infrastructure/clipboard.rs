use color_eyre::eyre::{eyre, Result};

/// Seam over the system clipboard so the executor can run headless in
/// tests.
pub trait ClipboardLike {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// OS clipboard via `arboard` (NSPasteboard on macOS, X11/Wayland on
/// Linux). The handle is created lazily on first copy so a missing
/// clipboard daemon only fails the copy, not startup.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardLike for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.inner.is_none() {
            self.inner = Some(arboard::Clipboard::new().map_err(|e| eyre!(e.to_string()))?);
        }
        match &mut self.inner {
            Some(clipboard) => clipboard
                .set_text(text.to_string())
                .map_err(|e| eyre!(e.to_string())),
            None => Err(eyre!("clipboard unavailable")),
        }
    }
}

/// In-memory clipboard for tests and headless runs.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl ClipboardLike for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Clipboard that always fails, for exercising the error path.
#[derive(Debug, Default)]
pub struct BrokenClipboard;

impl ClipboardLike for BrokenClipboard {
    fn set_text(&mut self, _text: &str) -> Result<()> {
        Err(eyre!("no clipboard in this environment"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_stores_text() -> Result<()> {
        let mut clipboard = MemoryClipboard::default();
        clipboard.set_text("velocity += GRAVITY")?;
        assert_eq!(clipboard.contents.as_deref(), Some("velocity += GRAVITY"));

        Ok(())
    }

    #[test]
    fn test_broken_clipboard_errors() {
        assert!(BrokenClipboard.set_text("anything").is_err());
    }
}
