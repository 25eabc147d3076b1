use tracing::{debug, trace};

use crate::agent::{Agent, MOVE_FORWARD, TURN_LEFT, TURN_RIGHT};
use crate::error::{ControlError, Result};

// ---------------------------------------------------------------------------
// Motion controller: discrete steps composed into metric motion
// ---------------------------------------------------------------------------

/// Drives an [`Agent`] through discrete actions and tracks collisions.
///
/// Continuous requests (`move_forward_by`, `rotate_by`) are discretized into
/// full nominal steps plus one shorter remainder step. The remainder step
/// temporarily overrides the action's actuation amount; the nominal amount is
/// restored on every exit path, so outside that window the agent's
/// configuration is exactly as the caller left it.
#[derive(Debug)]
pub struct MotionController<A> {
    agent: A,
    collision_occurred: bool,
    last_collision_action: Option<String>,
}

impl<A: Agent> MotionController<A> {
    pub fn new(agent: A) -> Self {
        Self {
            agent,
            collision_occurred: false,
            last_collision_action: None,
        }
    }

    pub fn agent(&self) -> &A {
        &self.agent
    }

    pub fn agent_mut(&mut self) -> &mut A {
        &mut self.agent
    }

    /// Consume the controller, returning the agent.
    pub fn into_agent(self) -> A {
        self.agent
    }

    /// Whether any step has collided over the controller's lifetime.
    /// Latches: once true it stays true.
    pub fn collision_occurred(&self) -> bool {
        self.collision_occurred
    }

    /// Action name of the most recent colliding step.
    pub fn last_collision_action(&self) -> Option<&str> {
        self.last_collision_action.as_deref()
    }

    /// Execute a single discrete step of the named action.
    ///
    /// Returns whether the step collided. A collision also latches
    /// [`collision_occurred`](Self::collision_occurred) and records the
    /// action name.
    pub fn step(&mut self, action: &str) -> Result<bool> {
        let collided = self.agent.act(action)?;
        trace!("step {}: collided={}", action, collided);
        if collided {
            debug!("collision during {}", action);
            self.collision_occurred = true;
            self.last_collision_action = Some(action.to_string());
        }
        Ok(collided)
    }

    /// Execute a sequence of steps in order.
    ///
    /// Collisions do not short-circuit the sequence; every listed action
    /// runs. Returns whether any step collided. An agent error aborts the
    /// remaining actions.
    pub fn execute_sequence<S: AsRef<str>>(&mut self, actions: &[S]) -> Result<bool> {
        let mut any_collision = false;
        for action in actions {
            any_collision |= self.step(action.as_ref())?;
        }
        Ok(any_collision)
    }

    /// Move forward by `distance` meters.
    ///
    /// Issues as many nominal forward steps as fit, then one remainder step
    /// for what is left. A zero distance issues no steps. Negative distances
    /// are rejected.
    pub fn move_forward_by(&mut self, distance: f64) -> Result<bool> {
        if distance < 0.0 {
            return Err(ControlError::NegativeDistance(distance));
        }
        self.stepwise(MOVE_FORWARD, distance)
    }

    /// Rotate by `angle` degrees: positive turns left, negative turns right,
    /// zero is a no-op.
    pub fn rotate_by(&mut self, angle: f64) -> Result<bool> {
        if angle > 0.0 {
            self.stepwise(TURN_LEFT, angle)
        } else if angle < 0.0 {
            self.stepwise(TURN_RIGHT, -angle)
        } else {
            Ok(false)
        }
    }

    /// Cover `total` (meters or degrees, non-negative) with discrete steps
    /// of `action`: `floor(total / nominal)` full steps, then one remainder
    /// step at a temporarily overridden actuation amount.
    fn stepwise(&mut self, action: &str, total: f64) -> Result<bool> {
        let nominal = self
            .agent
            .actuation(action)
            .ok_or_else(|| ControlError::UnknownAction(action.to_string()))?;
        if !(nominal.is_finite() && nominal > 0.0) {
            return Err(ControlError::BadActuation {
                action: action.to_string(),
                amount: nominal,
            });
        }

        let full_steps = (total / nominal).floor() as u64;
        let remainder = total - full_steps as f64 * nominal;
        debug!(
            "{} by {}: {} full steps of {} + remainder {}",
            action, total, full_steps, nominal, remainder
        );

        let mut any_collision = false;
        for _ in 0..full_steps {
            any_collision |= self.step(action)?;
        }

        if remainder > 0.0 {
            any_collision |= self.remainder_step(action, nominal, remainder)?;
        }

        Ok(any_collision)
    }

    /// One step at an overridden actuation amount. The nominal amount is
    /// restored before returning, including when the step itself fails.
    fn remainder_step(&mut self, action: &str, nominal: f64, amount: f64) -> Result<bool> {
        self.agent.set_actuation(action, amount)?;
        let outcome = self.step(action);
        self.agent.set_actuation(action, nominal)?;
        outcome
    }
}
