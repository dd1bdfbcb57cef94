use std::collections::VecDeque;

use tokio::sync::mpsc;

use crate::core::{
    cmd::Cmd,
    cmd_executor::CmdExecutor,
    msg::Msg,
    raw_msg::RawMsg,
    state::AppState,
    translator::translate_raw_to_domain,
    update::update,
};
use crate::infrastructure::clipboard::{ClipboardLike, MemoryClipboard};

/// Message-queue runtime around the pure core.
///
/// Raw messages are translated, domain messages update the state, and the
/// resulting commands are executed; feedback messages from execution are
/// fed back through the same path on the next cycle.
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    msg_tx: mpsc::UnboundedSender<Msg>,
    msg_rx: mpsc::UnboundedReceiver<Msg>,
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: CmdExecutor,
}

impl Runtime {
    /// Create a new Runtime with an in-memory clipboard (headless/tests)
    pub fn new(initial_state: AppState) -> Self {
        Self::with_clipboard(initial_state, Box::new(MemoryClipboard::default()))
    }

    /// Create a new Runtime with the given clipboard implementation
    pub fn with_clipboard(
        initial_state: AppState,
        clipboard: Box<dyn ClipboardLike + Send>,
    ) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();

        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            msg_tx,
            msg_rx,
            raw_msg_tx,
            raw_msg_rx,
            cmd_executor: CmdExecutor::new(clipboard),
        }
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get sender for message transmission
    pub fn get_sender(&self) -> mpsc::UnboundedSender<Msg> {
        self.msg_tx.clone()
    }

    /// Get raw message sender
    pub fn get_raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msg_tx.clone()
    }

    pub fn executor_mut(&mut self) -> &mut CmdExecutor {
        &mut self.cmd_executor
    }

    /// Send message directly (for testing)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw message (for integration with external systems)
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Get pending commands
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        let (new_state, commands) = update(msg, self.state.clone());
        self.state = new_state;

        for cmd in &commands {
            self.cmd_queue.push_back(cmd.clone());
        }

        commands
    }

    /// Process all messages in queue
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        // First process raw messages and convert to domain messages
        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
            self.msg_queue.extend(domain_msgs);
        }

        // Process raw messages from external sources
        while let Ok(raw_msg) = self.raw_msg_rx.try_recv() {
            let domain_msgs = translate_raw_to_domain(raw_msg, &self.state);
            self.msg_queue.extend(domain_msgs);
        }

        // Process domain messages in internal queue
        while let Some(msg) = self.msg_queue.pop_front() {
            let commands = self.process_message(msg);
            all_commands.extend(commands);
        }

        // Process domain messages from external sources
        while let Ok(msg) = self.msg_rx.try_recv() {
            let commands = self.process_message(msg);
            all_commands.extend(commands);
        }

        all_commands
    }

    /// Execute all pending commands; feedback messages are queued for the
    /// next cycle.
    pub fn execute_pending_commands(&mut self) -> Result<(), String> {
        let commands = self.pending_commands();
        if commands.is_empty() {
            return Ok(());
        }

        let feedback = self
            .cmd_executor
            .execute_commands(&commands)
            .map_err(|e| format!("Command execution failed: {e}"))?;
        self.msg_queue.extend(feedback);
        Ok(())
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> Result<(), String> {
        let _commands = self.process_all_messages();
        self.execute_pending_commands()?;
        // Pick up feedback messages immediately so an acknowledgment is
        // visible on the very next render.
        let _commands = self.process_all_messages();
        Ok(())
    }

    /// Get runtime statistics
    pub fn get_stats(&self) -> RuntimeStats {
        RuntimeStats {
            queued_messages: self.msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            current_lesson: self.state.session.lesson_id.to_string(),
            mounted_widgets: self.state.viz.mounted_kinds().len(),
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_commands: usize,
    pub current_lesson: String,
    pub mounted_widgets: usize,
}
