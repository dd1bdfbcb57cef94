use serde::{Deserialize, Serialize};

/// Messages specific to VizState
///
/// Each message targets the mounted widget that understands it; widgets that
/// are not on screen ignore everything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VizMsg {
    // Shared primary action: flap in the physics sandbox, advance the
    // state-machine demo
    Primary,

    // Per-widget controls
    ResetGravity,
    SpawnPipe,
    ToggleAnimation,
    Collide,
    PointerMove { dx: f32, dy: f32 },
}

impl VizMsg {
    pub fn is_frequent(&self) -> bool {
        matches!(self, VizMsg::PointerMove { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viz_msg_frequent_detection() {
        assert!(VizMsg::PointerMove { dx: 10.0, dy: 0.0 }.is_frequent());
        assert!(!VizMsg::Primary.is_frequent());
    }
}
