use serde::{Deserialize, Serialize};

/// Messages specific to SystemState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SystemMsg {
    // System control
    Quit,
    Suspend,
    Resume,
    Resize(u16, u16),

    // Status management
    CopyAcknowledged,
    ClearStatusMessage,
    ShowError(String),
}

impl SystemMsg {
    pub fn is_frequent(&self) -> bool {
        matches!(self, SystemMsg::Resize(_, _))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_msg_frequent_detection() {
        assert!(SystemMsg::Resize(80, 24).is_frequent());
        assert!(!SystemMsg::Quit.is_frequent());
        assert!(!SystemMsg::ShowError("test".to_string()).is_frequent());
    }
}
