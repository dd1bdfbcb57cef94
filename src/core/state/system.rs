use std::time::Duration;

use crate::core::{cmd::Cmd, msg::system::SystemMsg};

/// How long the clipboard acknowledgment stays on screen.
pub const COPY_ACK_DURATION: Duration = Duration::from_secs(2);

/// System-related state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    pub status_message: Option<String>,
    /// Remaining display time of the transient copy acknowledgment.
    pub copy_ack_remaining: Option<Duration>,
}

impl SystemState {
    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            // System control
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![]
            }

            SystemMsg::Resume => {
                self.should_suspend = false;
                vec![]
            }

            // The terminal backend reflows on its own; nothing to track.
            SystemMsg::Resize(_, _) => vec![],

            // Status management
            SystemMsg::CopyAcknowledged => {
                self.copy_ack_remaining = Some(COPY_ACK_DURATION);
                vec![]
            }

            SystemMsg::ClearStatusMessage => {
                self.status_message = None;
                vec![]
            }

            SystemMsg::ShowError(error) => {
                self.status_message = Some(format!("Error: {error}"));
                vec![Cmd::LogError { message: error }]
            }
        }
    }

    /// Advance the acknowledgment countdown; it disappears once elapsed.
    pub fn tick(&mut self, dt: Duration) {
        if let Some(remaining) = self.copy_ack_remaining {
            self.copy_ack_remaining = remaining.checked_sub(dt).filter(|d| !d.is_zero());
        }
    }

    pub fn copy_ack_visible(&self) -> bool {
        self.copy_ack_remaining.is_some()
    }
}
