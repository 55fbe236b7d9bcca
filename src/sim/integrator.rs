use crate::dynamics::{DynamicsParams, StateVec};

// ---------------------------------------------------------------------------
// Classical 4th-order Runge-Kutta integrator
// ---------------------------------------------------------------------------

/// Single RK4 step: advance `y` from `t` to `t + dt` under the derivative
/// function `f(t, y, params)`.
///
/// The step is always accepted; there is no error estimate or step rejection.
/// Non-finite values in the derivative propagate into the result.
pub fn rk4_step<F>(f: &F, y: &StateVec, t: f64, dt: f64, params: &DynamicsParams) -> StateVec
where
    F: Fn(f64, &StateVec, &DynamicsParams) -> StateVec,
{
    let k1 = f(t, y, params);
    let k2 = f(t + dt * 0.5, &(y + k1 * (dt * 0.5)), params);
    let k3 = f(t + dt * 0.5, &(y + k2 * (dt * 0.5)), params);
    let k4 = f(t + dt, &(y + k3 * dt), params);

    y + (k1 + 2.0 * k2 + 2.0 * k3 + k4) * (dt / 6.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::EARTH_MU;
    use crate::dynamics::{circular_orbit_state, position, two_body_dynamics};
    use nalgebra::Vector6;

    #[test]
    fn constant_velocity_is_exact() {
        // With zero acceleration RK4 reduces to straight-line motion.
        let f = |_t: f64, y: &StateVec, _p: &DynamicsParams| {
            Vector6::new(y[3], y[4], y[5], 0.0, 0.0, 0.0)
        };
        let y0 = Vector6::new(1.0, 2.0, 3.0, 0.5, -1.0, 2.0);
        let y1 = rk4_step(&f, &y0, 0.0, 10.0, &DynamicsParams { mu: 0.0 });

        assert!((y1[0] - 6.0).abs() < 1e-12);
        assert!((y1[1] + 8.0).abs() < 1e-12);
        assert!((y1[2] - 23.0).abs() < 1e-12);
        assert_eq!(y1[3], 0.5);
    }

    #[test]
    fn exponential_growth_matches_fourth_order() {
        // dy/dt = y has solution e^t; one unit step should agree with the
        // 4-term Taylor series, error O(dt^5).
        let f = |_t: f64, y: &StateVec, _p: &DynamicsParams| *y;
        let y0 = Vector6::repeat(1.0);
        let dt = 0.1;
        let y1 = rk4_step(&f, &y0, 0.0, dt, &DynamicsParams { mu: 0.0 });

        let exact = dt.exp();
        for i in 0..6 {
            assert!(
                (y1[i] - exact).abs() < 1e-6,
                "component {i}: {} vs {exact}",
                y1[i]
            );
        }
    }

    #[test]
    fn single_orbit_step_stays_near_circle() {
        let r = 7_000.0;
        let y0 = circular_orbit_state(r, EARTH_MU, 0.0);
        let y1 = rk4_step(&two_body_dynamics, &y0, 0.0, 10.0, &DynamicsParams { mu: EARTH_MU });
        let radius_after = position(&y1).norm();
        assert!(
            (radius_after - r).abs() < 1e-3,
            "radius drifted to {radius_after}"
        );
    }
}
