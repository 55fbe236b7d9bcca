use nalgebra::Vector6;

use crate::dynamics::{two_body_dynamics, DynamicsParams};
use crate::error::Result;
use crate::orbital::maneuvers::{hohmann, HohmannTransfer};
use crate::sim::propagator::{propagate, Method, Trajectory};

/// A Hohmann transfer together with its propagated trajectory.
#[derive(Debug, Clone)]
pub struct TransferPropagation {
    pub transfer: HohmannTransfer,
    pub trajectory: Trajectory,
}

/// Propagate a complete Hohmann transfer from `r1` to `r2`.
///
/// The spacecraft starts at the transfer-orbit periapsis, `(r1, 0, 0)` with
/// velocity `(0, v_periapsis, 0)`, and is integrated for the time of flight,
/// ending at apoapsis just before the circularization burn.
pub fn propagate_hohmann(r1: f64, r2: f64, mu: f64, dt: f64) -> Result<TransferPropagation> {
    let transfer = hohmann(r1, r2, mu);

    let y0 = Vector6::new(transfer.r1, 0.0, 0.0, 0.0, transfer.v_periapsis, 0.0);
    let trajectory = propagate(
        two_body_dynamics,
        &y0,
        (0.0, transfer.tof),
        dt,
        &DynamicsParams { mu },
        Method::Rk4,
    )?;

    Ok(TransferPropagation {
        transfer,
        trajectory,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{EARTH_GEO_RADIUS, EARTH_LEO_RADIUS, EARTH_MU};
    use crate::dynamics::{position, velocity};

    #[test]
    fn transfer_arrives_at_apoapsis_radius() {
        let run = propagate_hohmann(EARTH_LEO_RADIUS, EARTH_GEO_RADIUS, EARTH_MU, 60.0).unwrap();

        let (t_final, y_final) = run.trajectory.last().unwrap();
        assert_eq!(t_final, run.transfer.tof);

        // Half an ellipse later the radius should be r2
        let r_final = position(y_final).norm();
        assert!(
            (r_final - EARTH_GEO_RADIUS).abs() < 50.0,
            "arrival radius {r_final:.1} km vs target {EARTH_GEO_RADIUS:.1} km"
        );

        // Arrival speed matches the transfer-orbit apoapsis speed
        let v_final = velocity(y_final).norm();
        assert!(
            (v_final - run.transfer.v_apoapsis).abs() < 0.01,
            "arrival speed {v_final:.4} vs v_apoapsis {:.4}",
            run.transfer.v_apoapsis
        );
    }

    #[test]
    fn transfer_normalizes_swapped_radii() {
        let a = propagate_hohmann(EARTH_GEO_RADIUS, EARTH_LEO_RADIUS, EARTH_MU, 60.0).unwrap();
        assert_eq!(a.transfer.r1, EARTH_LEO_RADIUS);
        assert_eq!(a.trajectory.states[0][0], EARTH_LEO_RADIUS);
    }
}
