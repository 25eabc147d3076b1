use nalgebra::Vector3;
use tracing::{debug, trace};

use crate::agent::{Agent, MOVE_FORWARD};
use crate::control::MotionController;
use crate::error::Result;
use crate::geometry::{planar_unit, signed_bearing_deg};

// ---------------------------------------------------------------------------
// Greedy navigation: align heading, then advance
// ---------------------------------------------------------------------------

/// Tuning for the greedy navigation loop.
#[derive(Debug, Clone)]
pub struct NavConfig {
    /// Arrival distance to the target (meters).
    pub position_threshold: f64,
    /// Hard bound on align/advance iterations.
    pub max_iterations: usize,
    /// Bearing error below which the agent advances instead of turning (deg).
    pub heading_tolerance_deg: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            position_threshold: 0.2,
            max_iterations: 100,
            heading_tolerance_deg: 5.0,
        }
    }
}

impl<A: Agent> MotionController<A> {
    /// Navigate to `target` with [`NavConfig::default`].
    pub fn navigate_to(&mut self, target: Vector3<f64>) -> Result<bool> {
        self.navigate_to_with(target, &NavConfig::default())
    }

    /// Greedily navigate toward `target`: turn until roughly facing it, then
    /// step forward, for at most `config.max_iterations` iterations.
    ///
    /// This is a fixed-iteration control loop, not a path planner; it knows
    /// nothing about obstacles beyond the collision flags it accumulates.
    /// Returns whether any sub-step collided. Arrival and iteration
    /// exhaustion are not distinguished; check the agent's pose if the
    /// difference matters.
    pub fn navigate_to_with(&mut self, target: Vector3<f64>, config: &NavConfig) -> Result<bool> {
        let mut any_collision = false;

        for iteration in 0..config.max_iterations {
            let state = self.agent().state();
            let distance = (target - state.position).norm();
            if distance <= config.position_threshold {
                debug!("arrived after {} iterations ({:.3} m off)", iteration, distance);
                break;
            }

            // A target straight above or below has no planar bearing to
            // steer by; treat it as reached.
            let Some(direction) = planar_unit(target - state.position) else {
                debug!("no planar offset to target, stopping");
                break;
            };
            let forward = state.planar_forward();

            let bearing = signed_bearing_deg(&forward, &direction);
            trace!(
                "iteration {}: {:.3} m to target, bearing {:.1} deg",
                iteration, distance, bearing
            );

            if bearing.abs() > config.heading_tolerance_deg {
                any_collision |= self.rotate_by(bearing)?;
            } else {
                any_collision |= self.step(MOVE_FORWARD)?;
            }
        }

        Ok(any_collision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::KinematicAgent;

    #[test]
    fn within_threshold_returns_immediately() {
        let agent = KinematicAgent::new(Vector3::zeros());
        let mut ctl = MotionController::new(agent);
        let collided = ctl.navigate_to(Vector3::new(0.1, 0.0, 0.0)).unwrap();
        assert!(!collided);
        let state = ctl.agent().state();
        assert_eq!(state.position, Vector3::zeros(), "no steps should be issued");
        assert_eq!(state.rotation, nalgebra::UnitQuaternion::identity());
    }

    #[test]
    fn reaches_target_straight_ahead() {
        let agent = KinematicAgent::new(Vector3::zeros());
        let mut ctl = MotionController::new(agent);
        let target = Vector3::new(0.0, 0.0, -2.0);
        let collided = ctl.navigate_to(target).unwrap();
        assert!(!collided);
        let agent = ctl.into_agent();
        let distance = (agent.state().position - target).norm();
        assert!(distance <= 0.2, "ended {:.3} m from target", distance);
    }

    #[test]
    fn turns_toward_offset_target_then_advances() {
        let agent = KinematicAgent::new(Vector3::zeros());
        let mut ctl = MotionController::new(agent);
        let target = Vector3::new(2.0, 0.0, 0.0);
        ctl.navigate_to(target).unwrap();
        let state = ctl.agent().state();
        assert!((state.position - target).norm() <= 0.2);
        // The heading should have swung around to +X.
        let forward = state.planar_forward();
        assert!(forward.x > 0.99, "expected +X heading, got {:?}", forward);
    }

    #[test]
    fn iteration_bound_is_exact() {
        let agent = KinematicAgent::new(Vector3::zeros());
        let mut ctl = MotionController::new(agent);
        let config = NavConfig {
            max_iterations: 10,
            ..NavConfig::default()
        };
        // Aligned target far out of reach: every iteration is one forward step.
        ctl.navigate_to_with(Vector3::new(0.0, 0.0, -100.0), &config)
            .unwrap();
        let z = ctl.agent().state().position.z;
        assert!((z + 2.5).abs() < 1e-9, "10 steps of 0.25 m, got z={}", z);
    }

    #[test]
    fn blocked_navigation_accumulates_collisions() {
        let agent = KinematicAgent::new(Vector3::zeros())
            .with_bounds(Vector3::new(-5.0, 0.0, -1.0), Vector3::new(5.0, 0.0, 5.0));
        let mut ctl = MotionController::new(agent);
        let config = NavConfig {
            max_iterations: 20,
            ..NavConfig::default()
        };
        let collided = ctl
            .navigate_to_with(Vector3::new(0.0, 0.0, -3.0), &config)
            .unwrap();
        assert!(collided);
        assert!(ctl.collision_occurred());
        assert_eq!(ctl.last_collision_action(), Some(MOVE_FORWARD));
        assert_eq!(ctl.agent().state().position.z, -1.0, "pinned at the wall");
    }

    #[test]
    fn purely_vertical_target_stops_cleanly() {
        let agent = KinematicAgent::new(Vector3::zeros());
        let mut ctl = MotionController::new(agent);
        let collided = ctl.navigate_to(Vector3::new(0.0, 5.0, 0.0)).unwrap();
        assert!(!collided);
        assert_eq!(ctl.agent().state().position, Vector3::zeros());
    }
}
