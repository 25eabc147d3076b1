use nalgebra::{UnitQuaternion, Vector3};

// ---------------------------------------------------------------------------
// Planar heading math (Y-up scene frame, agent forward is -Z)
// ---------------------------------------------------------------------------

/// Below this planar length a vector carries no usable direction.
const PLANAR_EPS: f64 = 1e-9;

/// Project onto the horizontal plane by zeroing the vertical component.
pub fn flatten(v: Vector3<f64>) -> Vector3<f64> {
    Vector3::new(v.x, 0.0, v.z)
}

/// Unit vector of the planar projection, or `None` when the projection is
/// too short to define a direction (e.g. a purely vertical offset).
pub fn planar_unit(v: Vector3<f64>) -> Option<Vector3<f64>> {
    let p = flatten(v);
    let n = p.norm();
    if n > PLANAR_EPS {
        Some(p / n)
    } else {
        None
    }
}

/// Planar forward direction for an orientation: the canonical forward axis
/// (-Z) rotated into the scene frame and flattened. Zero when the agent
/// points straight up or down.
pub fn planar_forward(rotation: &UnitQuaternion<f64>) -> Vector3<f64> {
    planar_unit(rotation * -Vector3::z()).unwrap_or_else(Vector3::zeros)
}

/// Signed angle in degrees from `forward` to `direction`, both planar unit
/// vectors. Positive means a left turn (counter-clockwise about +Y). The dot
/// product is clamped before `acos` so near-parallel inputs cannot produce
/// NaN.
pub fn signed_bearing_deg(forward: &Vector3<f64>, direction: &Vector3<f64>) -> f64 {
    let dot = forward.dot(direction).clamp(-1.0, 1.0);
    let angle = dot.acos().to_degrees();
    if forward.cross(direction).y < 0.0 {
        -angle
    } else {
        angle
    }
}
