//! One ratatui widget per interactive demo. Each widget is a pure view of
//! its state machine; all mutation happens in the core update path.

pub mod animation;
pub mod collision;
pub mod game_states;
pub mod gravity;
pub mod pipes;
pub mod scrolling;

pub use animation::AnimationWidget;
pub use collision::CollisionWidget;
pub use game_states::GameStatesWidget;
pub use gravity::GravityWidget;
pub use pipes::PipesWidget;
pub use scrolling::ScrollingWidget;
