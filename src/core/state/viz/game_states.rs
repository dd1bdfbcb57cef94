use strum::Display;

/// The three phases of the finished game.
#[derive(Debug, Default, Display, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    #[default]
    Menu,
    Playing,
    GameOver,
}

/// State-machine demo: the primary action and a simulated collision drive
/// the phase transitions of the finished game. No timer.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GameStatesViz {
    pub phase: GamePhase,
}

impl GameStatesViz {
    /// Primary action: starts a game from the menu, flaps while playing
    /// (no phase change), restarts to the menu after a game over.
    pub fn primary(&mut self) {
        self.phase = match self.phase {
            GamePhase::Menu => GamePhase::Playing,
            GamePhase::Playing => GamePhase::Playing,
            GamePhase::GameOver => GamePhase::Menu,
        };
    }

    /// A simulated collision only matters mid-game.
    pub fn collide(&mut self) {
        if self.phase == GamePhase::Playing {
            self.phase = GamePhase::GameOver;
        }
    }
}
