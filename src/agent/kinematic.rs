//! Purely kinematic reference agent.
//!
//! Applies actions directly to a pose with no physics. Used by the demos and
//! as a test double; a real deployment implements [`Agent`] on top of an
//! external simulator instead.

use std::collections::HashMap;

use nalgebra::{UnitQuaternion, Vector3};

use crate::agent::{ActionSpec, Agent, AgentState, MOVE_FORWARD, TURN_LEFT, TURN_RIGHT};
use crate::error::{ControlError, Result};

const DEFAULT_FORWARD_M: f64 = 0.25;
const DEFAULT_TURN_DEG: f64 = 10.0;

/// Kinematic agent: forward steps translate along the rotated forward axis,
/// turns yaw about +Y. Optionally confined to an axis-aligned walkable box,
/// in which case a step that would leave the box clamps to the boundary and
/// reports a collision.
#[derive(Debug, Clone)]
pub struct KinematicAgent {
    position: Vector3<f64>,
    rotation: UnitQuaternion<f64>,
    actions: HashMap<String, ActionSpec>,
    bounds: Option<(Vector3<f64>, Vector3<f64>)>, // (min, max)
}

impl KinematicAgent {
    pub fn new(position: Vector3<f64>) -> Self {
        let mut actions = HashMap::new();
        actions.insert(MOVE_FORWARD.to_string(), ActionSpec::new(DEFAULT_FORWARD_M));
        actions.insert(TURN_LEFT.to_string(), ActionSpec::new(DEFAULT_TURN_DEG));
        actions.insert(TURN_RIGHT.to_string(), ActionSpec::new(DEFAULT_TURN_DEG));
        Self {
            position,
            rotation: UnitQuaternion::identity(),
            actions,
            bounds: None,
        }
    }

    /// Override the nominal amount for one action.
    pub fn with_actuation(mut self, action: &str, amount: f64) -> Self {
        self.actions
            .insert(action.to_string(), ActionSpec::new(amount));
        self
    }

    /// Start with a non-identity orientation.
    pub fn with_rotation(mut self, rotation: UnitQuaternion<f64>) -> Self {
        self.rotation = rotation;
        self
    }

    /// Confine the agent to an axis-aligned walkable box.
    pub fn with_bounds(mut self, min: Vector3<f64>, max: Vector3<f64>) -> Self {
        self.bounds = Some((min, max));
        self
    }

    fn yaw(degrees: f64) -> UnitQuaternion<f64> {
        UnitQuaternion::from_axis_angle(&Vector3::y_axis(), degrees.to_radians())
    }

    /// Apply a translation, clamping to the walkable box if one is set.
    /// Returns whether the step was clamped (a collision).
    fn translate(&mut self, delta: Vector3<f64>) -> bool {
        let target = self.position + delta;
        match self.bounds {
            Some((min, max)) => {
                let clamped = Vector3::new(
                    target.x.clamp(min.x, max.x),
                    target.y.clamp(min.y, max.y),
                    target.z.clamp(min.z, max.z),
                );
                let collided = clamped != target;
                self.position = clamped;
                collided
            }
            None => {
                self.position = target;
                false
            }
        }
    }
}

impl Agent for KinematicAgent {
    fn act(&mut self, action: &str) -> Result<bool> {
        let amount = self
            .actuation(action)
            .ok_or_else(|| ControlError::UnknownAction(action.to_string()))?;
        match action {
            MOVE_FORWARD => {
                let forward = self.rotation * -Vector3::z();
                Ok(self.translate(forward * amount))
            }
            TURN_LEFT => {
                self.rotation = Self::yaw(amount) * self.rotation;
                Ok(false)
            }
            TURN_RIGHT => {
                self.rotation = Self::yaw(-amount) * self.rotation;
                Ok(false)
            }
            // Only the canonical actions have kinematics.
            other => Err(ControlError::UnknownAction(other.to_string())),
        }
    }

    fn state(&self) -> AgentState {
        AgentState {
            position: self.position,
            rotation: self.rotation,
        }
    }

    fn actuation(&self, action: &str) -> Option<f64> {
        self.actions.get(action).map(|spec| spec.amount)
    }

    fn set_actuation(&mut self, action: &str, amount: f64) -> Result<()> {
        self.actions
            .get_mut(action)
            .map(|spec| spec.amount = amount)
            .ok_or_else(|| ControlError::UnknownAction(action.to_string()))
    }
}
