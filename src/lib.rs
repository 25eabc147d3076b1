pub mod agent;
pub mod control;
pub mod error;
pub mod geometry;

pub use agent::{ActionSpec, Agent, AgentState, KinematicAgent};
pub use agent::{MOVE_FORWARD, TURN_LEFT, TURN_RIGHT};
pub use control::{MotionController, NavConfig};
pub use error::{ControlError, Result};
