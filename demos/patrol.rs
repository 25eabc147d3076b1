use nalgebra::Vector3;

use agent_motion::{Agent, KinematicAgent, MotionController, MOVE_FORWARD, TURN_LEFT};

fn main() -> agent_motion::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // An 8x8 m walkable square with quarter-turn actuation.
    let agent = KinematicAgent::new(Vector3::zeros())
        .with_actuation(TURN_LEFT, 90.0)
        .with_bounds(Vector3::new(-4.0, 0.0, -4.0), Vector3::new(4.0, 0.0, 4.0));
    let mut controller = MotionController::new(agent);

    // -----------------------------------------------------------------------
    // Scripted patrol lap
    // -----------------------------------------------------------------------
    let lap = [
        MOVE_FORWARD, MOVE_FORWARD, MOVE_FORWARD, TURN_LEFT,
        MOVE_FORWARD, MOVE_FORWARD, MOVE_FORWARD, TURN_LEFT,
        MOVE_FORWARD, MOVE_FORWARD, MOVE_FORWARD, TURN_LEFT,
        MOVE_FORWARD, MOVE_FORWARD, MOVE_FORWARD, TURN_LEFT,
    ];
    println!("Executing a patrol lap ({} actions)...", lap.len());
    controller.execute_sequence(&lap)?;
    report_pose(&controller);

    // -----------------------------------------------------------------------
    // Metric motion
    // -----------------------------------------------------------------------
    println!("Moving forward by 2 meters...");
    controller.move_forward_by(2.0)?;
    report_pose(&controller);

    println!("Rotating 90 degrees left...");
    controller.rotate_by(90.0)?;
    report_pose(&controller);

    // -----------------------------------------------------------------------
    // Greedy navigation to an offset target
    // -----------------------------------------------------------------------
    // Quarter turns are too coarse for steering; go back to 10 degree steps.
    controller.agent_mut().set_actuation(TURN_LEFT, 10.0)?;

    let target = controller.agent().state().position + Vector3::new(2.0, 0.0, 3.0);
    println!(
        "Navigating to ({:.2}, {:.2}, {:.2})...",
        target.x, target.y, target.z
    );
    controller.navigate_to(target)?;
    report_pose(&controller);

    match controller.last_collision_action() {
        Some(action) => println!("A collision occurred, most recently during: {}", action),
        None => println!("No collisions."),
    }

    Ok(())
}

fn report_pose<A: Agent>(controller: &MotionController<A>) {
    let state = controller.agent().state();
    let f = state.planar_forward();
    println!(
        "  position ({:>6.2}, {:>6.2}, {:>6.2})  facing ({:>5.2}, {:>5.2})",
        state.position.x, state.position.y, state.position.z, f.x, f.z
    );
}
