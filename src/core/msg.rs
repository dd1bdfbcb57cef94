use std::time::Duration;

use serde::{Deserialize, Serialize};

pub mod session;
pub mod system;
pub mod viz;

use session::SessionMsg;
use system::SystemMsg;
use viz::VizMsg;

/// Domain messages representing application intent and business logic
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Study-session operations (delegated to SessionState)
    Session(SessionMsg),

    // Visualization operations (delegated to VizState)
    Viz(VizMsg),

    // Wall-clock advance driving every mounted widget timer
    Tick(Duration),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::Tick(_) => true,
            Msg::System(msg) => msg.is_frequent(),
            Msg::Session(msg) => msg.is_frequent(),
            Msg::Viz(msg) => msg.is_frequent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;

    use super::*;

    #[test]
    fn test_frequent_detection() {
        assert!(Msg::Tick(Duration::from_millis(16)).is_frequent());
        assert!(!Msg::System(SystemMsg::Quit).is_frequent());
        assert!(!Msg::Session(SessionMsg::NextLesson).is_frequent());
    }

    #[test]
    fn test_msg_serialization() -> Result<()> {
        let msg = Msg::Session(SessionMsg::NextLesson);
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: Msg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);

        Ok(())
    }
}
