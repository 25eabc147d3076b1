//! Boundary to the externally simulated agent.
//!
//! The simulator owns the scene, physics and collision resolution; this
//! crate only commands discrete actions through the [`Agent`] trait and
//! reads pose snapshots back.

pub mod kinematic;

pub use kinematic::KinematicAgent;

use nalgebra::{UnitQuaternion, Vector3};

use crate::error::Result;
use crate::geometry;

// ---------------------------------------------------------------------------
// Canonical action names
// ---------------------------------------------------------------------------

pub const MOVE_FORWARD: &str = "move_forward";
pub const TURN_LEFT: &str = "turn_left";
pub const TURN_RIGHT: &str = "turn_right";

// ---------------------------------------------------------------------------
// Pose snapshot
// ---------------------------------------------------------------------------

/// Agent pose at a point in time.
#[derive(Debug, Clone)]
pub struct AgentState {
    pub position: Vector3<f64>,        // m, scene frame (Y up)
    pub rotation: UnitQuaternion<f64>, // body→scene rotation
}

impl AgentState {
    /// Planar forward direction: unit length, or zero when the agent points
    /// straight up or down.
    pub fn planar_forward(&self) -> Vector3<f64> {
        geometry::planar_forward(&self.rotation)
    }
}

// ---------------------------------------------------------------------------
// Actuation specification
// ---------------------------------------------------------------------------

/// Per-action actuation record: how far one discrete step takes the agent.
#[derive(Debug, Clone)]
pub struct ActionSpec {
    pub amount: f64, // m for translations, deg for rotations
}

impl ActionSpec {
    pub fn new(amount: f64) -> Self {
        Self { amount }
    }
}

// ---------------------------------------------------------------------------
// Agent capability
// ---------------------------------------------------------------------------

/// Handle to an externally simulated agent.
///
/// Implement this to plug a simulator into
/// [`MotionController`](crate::control::MotionController). Actuation amounts
/// cross the boundary as plain scalars; how an implementation stores them is
/// its own business.
pub trait Agent {
    /// Perform one discrete simulation step of the named action.
    /// Returns whether a collision was detected during the step.
    fn act(&mut self, action: &str) -> Result<bool>;

    /// Current pose snapshot.
    fn state(&self) -> AgentState;

    /// Nominal per-step amount configured for an action, if it exists.
    fn actuation(&self, action: &str) -> Option<f64>;

    /// Overwrite the per-step amount for an action.
    fn set_actuation(&mut self, action: &str, amount: f64) -> Result<()>;
}

impl<A: Agent + ?Sized> Agent for &mut A {
    fn act(&mut self, action: &str) -> Result<bool> {
        (**self).act(action)
    }

    fn state(&self) -> AgentState {
        (**self).state()
    }

    fn actuation(&self, action: &str) -> Option<f64> {
        (**self).actuation(action)
    }

    fn set_actuation(&mut self, action: &str, amount: f64) -> Result<()> {
        (**self).set_actuation(action, amount)
    }
}
