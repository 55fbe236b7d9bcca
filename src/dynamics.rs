use nalgebra::{Vector3, Vector6};

// ---------------------------------------------------------------------------
// State vector and dynamics parameters
// ---------------------------------------------------------------------------

/// Cartesian state `[x, y, z, vx, vy, vz]`: position in the first three
/// components, velocity in the last three. Units must be consistent with the
/// gravitational parameter (km and km/s for `mu` in km^3/s^2).
pub type StateVec = Vector6<f64>;

/// Position sub-vector (components 0..3).
pub fn position(y: &StateVec) -> Vector3<f64> {
    y.fixed_rows::<3>(0).into_owned()
}

/// Velocity sub-vector (components 3..6).
pub fn velocity(y: &StateVec) -> Vector3<f64> {
    y.fixed_rows::<3>(3).into_owned()
}

/// Assemble a state vector from position and velocity.
pub fn state_from_parts(r: &Vector3<f64>, v: &Vector3<f64>) -> StateVec {
    Vector6::new(r.x, r.y, r.z, v.x, v.y, v.z)
}

/// Parameter bundle threaded through the propagator into the dynamics
/// function. The propagator never inspects it.
#[derive(Debug, Clone, Copy)]
pub struct DynamicsParams {
    pub mu: f64, // gravitational parameter of the central body
}

// ---------------------------------------------------------------------------
// Two-body dynamics
// ---------------------------------------------------------------------------

/// Derivative of the two-body equation of motion: r̈ = -μ/|r|³ · r.
///
/// Returns `[vx, vy, vz, ax, ay, az]`. Undefined at |r| = 0; the division is
/// not guarded and a degenerate state yields non-finite output.
pub fn two_body_dynamics(_t: f64, y: &StateVec, params: &DynamicsParams) -> StateVec {
    let r = position(y);
    let v = velocity(y);

    let r_norm = r.norm();
    let accel = -params.mu / (r_norm * r_norm * r_norm) * r;

    state_from_parts(&v, &accel)
}

/// Initial state for a circular orbit of radius `r`: position `(r, 0, 0)`,
/// circular speed split into the orbital plane by `inclination` (rad).
pub fn circular_orbit_state(r: f64, mu: f64, inclination: f64) -> StateVec {
    let v = (mu / r).sqrt();
    Vector6::new(r, 0.0, 0.0, 0.0, v * inclination.cos(), v * inclination.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::EARTH_MU;

    #[test]
    fn acceleration_points_toward_origin() {
        let y = Vector6::new(7000.0, 0.0, 0.0, 0.0, 7.5, 0.0);
        let dy = two_body_dynamics(0.0, &y, &DynamicsParams { mu: EARTH_MU });

        // Velocity half is passed through
        assert_eq!(velocity(&y), position(&dy));

        // Acceleration along -x with magnitude mu/r^2
        let a = velocity(&dy);
        let expected = EARTH_MU / (7000.0_f64 * 7000.0);
        assert!((a.x + expected).abs() < 1e-12);
        assert!(a.y.abs() < 1e-15 && a.z.abs() < 1e-15);
    }

    #[test]
    fn circular_state_has_circular_speed() {
        let r = 6_571.0;
        let y = circular_orbit_state(r, EARTH_MU, 0.0);
        let v = velocity(&y).norm();
        assert!((v - (EARTH_MU / r).sqrt()).abs() < 1e-12);
        assert_eq!(position(&y), Vector3::new(r, 0.0, 0.0));
    }

    #[test]
    fn inclination_splits_velocity() {
        let r = 7_000.0;
        let inc = 51.6_f64.to_radians();
        let y = circular_orbit_state(r, EARTH_MU, inc);
        let v = velocity(&y);
        let speed = (EARTH_MU / r).sqrt();
        assert!((v.y - speed * inc.cos()).abs() < 1e-12);
        assert!((v.z - speed * inc.sin()).abs() < 1e-12);
        assert!(v.x.abs() < 1e-15);
    }
}
