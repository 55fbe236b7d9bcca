use nalgebra::Vector3;

use crate::dynamics::{position, velocity, StateVec};

// ---------------------------------------------------------------------------
// Post-propagation diagnostics
// ---------------------------------------------------------------------------

/// Specific orbital energy ε = |v|²/2 − μ/|r|. Conserved by ideal two-body
/// motion, so drift along a propagated trajectory measures integration error.
pub fn specific_orbital_energy(y: &StateVec, mu: f64) -> f64 {
    let r = position(y).norm();
    let v = velocity(y).norm();
    0.5 * v * v - mu / r
}

/// Energy at every trajectory sample, computed independently per sample.
/// A non-finite entry flags a degenerate state the integrator passed through.
pub fn energy_series(states: &[StateVec], mu: f64) -> Vec<f64> {
    states
        .iter()
        .map(|y| specific_orbital_energy(y, mu))
        .collect()
}

/// Largest absolute deviation from the first sample's energy.
pub fn energy_drift(energies: &[f64]) -> f64 {
    match energies.first() {
        Some(&e0) => energies
            .iter()
            .map(|e| (e - e0).abs())
            .fold(0.0_f64, f64::max),
        None => 0.0,
    }
}

/// Specific angular momentum h = r × v, the other conserved quantity of
/// two-body motion.
pub fn specific_angular_momentum(y: &StateVec) -> Vector3<f64> {
    position(y).cross(&velocity(y))
}
