use serde::{Deserialize, Serialize};

/// Elm-like command definitions
/// Represents side effects (clipboard access, logging) requested by the
/// pure update function and carried out by the CmdExecutor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    // Clipboard export of the visible code
    CopyToClipboard {
        text: String,
    },

    LogError {
        message: String,
    },
}

impl Cmd {
    /// Get command priority (smaller numbers = higher priority)
    pub fn priority(&self) -> u8 {
        match self {
            // User actions first, logging last
            Cmd::CopyToClipboard { .. } => 0,
            Cmd::LogError { .. } => 1,
        }
    }
}
