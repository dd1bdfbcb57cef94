use color_eyre::eyre::Result;

use crate::{
    core::cmd::Cmd,
    core::msg::{system::SystemMsg, Msg},
    infrastructure::clipboard::ClipboardLike,
};

/// Command executor that carries out side effects requested by the update
/// function. Feedback for the domain layer is returned as messages so the
/// runtime can feed them back through the normal update path.
pub struct CmdExecutor {
    clipboard: Box<dyn ClipboardLike + Send>,
    executed_commands: usize,
}

impl CmdExecutor {
    pub fn new(clipboard: Box<dyn ClipboardLike + Send>) -> Self {
        Self {
            clipboard,
            executed_commands: 0,
        }
    }

    /// Execute a single command, returning any feedback messages.
    pub fn execute_command(&mut self, cmd: &Cmd) -> Result<Vec<Msg>> {
        self.executed_commands += 1;
        match cmd {
            Cmd::CopyToClipboard { text } => match self.clipboard.set_text(text) {
                Ok(()) => Ok(vec![Msg::System(SystemMsg::CopyAcknowledged)]),
                // A missing clipboard must not take the app down; surface
                // the failure in the status bar instead.
                Err(e) => {
                    log::warn!("clipboard copy failed: {e}");
                    Ok(vec![Msg::System(SystemMsg::ShowError(format!(
                        "copy failed: {e}"
                    )))])
                }
            },

            Cmd::LogError { message } => {
                log::error!("{message}");
                Ok(vec![])
            }
        }
    }

    /// Execute a batch of commands in priority order
    pub fn execute_commands(&mut self, commands: &[Cmd]) -> Result<Vec<Msg>> {
        let mut sorted: Vec<&Cmd> = commands.iter().collect();
        sorted.sort_by_key(|cmd| cmd.priority());

        let mut feedback = Vec::new();
        for cmd in sorted {
            feedback.extend(self.execute_command(cmd)?);
        }
        Ok(feedback)
    }

    pub fn get_stats(&self) -> CmdExecutorStats {
        CmdExecutorStats {
            executed_commands: self.executed_commands,
        }
    }
}

/// Executor statistics for debugging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CmdExecutorStats {
    pub executed_commands: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clipboard::{BrokenClipboard, MemoryClipboard};

    fn executor() -> CmdExecutor {
        CmdExecutor::new(Box::new(MemoryClipboard::default()))
    }

    #[test]
    fn test_copy_acknowledges_on_success() -> Result<()> {
        let mut executor = executor();
        let feedback = executor.execute_command(&Cmd::CopyToClipboard {
            text: "bird.y += velocity".to_string(),
        })?;
        assert_eq!(feedback, vec![Msg::System(SystemMsg::CopyAcknowledged)]);

        Ok(())
    }

    #[test]
    fn test_copy_failure_becomes_status_error() -> Result<()> {
        let mut executor = CmdExecutor::new(Box::new(BrokenClipboard));
        let feedback = executor.execute_command(&Cmd::CopyToClipboard {
            text: "score = 0".to_string(),
        })?;
        assert!(matches!(
            feedback.as_slice(),
            [Msg::System(SystemMsg::ShowError(message))] if message.starts_with("copy failed")
        ));

        Ok(())
    }

    #[test]
    fn test_batch_runs_copy_before_logging() -> Result<()> {
        let mut executor = executor();
        let feedback = executor.execute_commands(&[
            Cmd::LogError {
                message: "earlier failure".to_string(),
            },
            Cmd::CopyToClipboard {
                text: "score = 0".to_string(),
            },
        ])?;
        // Copy runs first, so its acknowledgment heads the feedback.
        assert_eq!(feedback, vec![Msg::System(SystemMsg::CopyAcknowledged)]);
        assert_eq!(executor.get_stats().executed_commands, 2);

        Ok(())
    }
}
