use nalgebra::Vector3;

use crate::constants::EARTH_MU;
use crate::dynamics::{state_from_parts, StateVec};

/// Classical Keplerian orbital elements (km, rad).
#[derive(Debug, Clone, Copy)]
pub struct KeplerianElements {
    pub sma: f64,       // semi-major axis, km
    pub ecc: f64,       // eccentricity (0 = circular)
    pub inc: f64,       // inclination, rad
    pub raan: f64,      // right ascension of ascending node, rad
    pub argp: f64,      // argument of periapsis, rad
    pub true_anom: f64, // true anomaly, rad
}

impl KeplerianElements {
    /// Convert to an inertial Cartesian state vector around Earth.
    pub fn to_state_vector(&self) -> StateVec {
        self.to_state_vector_mu(EARTH_MU)
    }

    /// Convert with explicit gravitational parameter.
    pub fn to_state_vector_mu(&self, mu: f64) -> StateVec {
        let p = self.sma * (1.0 - self.ecc * self.ecc); // semi-latus rectum
        let r = p / (1.0 + self.ecc * self.true_anom.cos());

        // Position in perifocal frame (PQW)
        let r_pqw = Vector3::new(
            r * self.true_anom.cos(),
            r * self.true_anom.sin(),
            0.0,
        );

        // Velocity in perifocal frame
        let sqrt_mu_p = (mu / p).sqrt();
        let v_pqw = Vector3::new(
            -sqrt_mu_p * self.true_anom.sin(),
            sqrt_mu_p * (self.ecc + self.true_anom.cos()),
            0.0,
        );

        // Rotation matrix from PQW to the inertial frame
        let cos_raan = self.raan.cos();
        let sin_raan = self.raan.sin();
        let cos_argp = self.argp.cos();
        let sin_argp = self.argp.sin();
        let cos_inc = self.inc.cos();
        let sin_inc = self.inc.sin();

        let rot = |v: &Vector3<f64>| -> Vector3<f64> {
            Vector3::new(
                (cos_raan * cos_argp - sin_raan * sin_argp * cos_inc) * v.x
                    + (-cos_raan * sin_argp - sin_raan * cos_argp * cos_inc) * v.y,
                (sin_raan * cos_argp + cos_raan * sin_argp * cos_inc) * v.x
                    + (-sin_raan * sin_argp + cos_raan * cos_argp * cos_inc) * v.y,
                (sin_argp * sin_inc) * v.x + (cos_argp * sin_inc) * v.y,
            )
        };

        state_from_parts(&rot(&r_pqw), &rot(&v_pqw))
    }

    /// Recover elements from an inertial state vector around Earth.
    pub fn from_state_vector(pos: &Vector3<f64>, vel: &Vector3<f64>) -> Self {
        Self::from_state_vector_mu(pos, vel, EARTH_MU)
    }

    /// Recover with explicit gravitational parameter.
    pub fn from_state_vector_mu(pos: &Vector3<f64>, vel: &Vector3<f64>, mu: f64) -> Self {
        let r = pos.norm();
        let v = vel.norm();

        // Angular momentum
        let h = pos.cross(vel);
        let h_mag = h.norm();

        // Node vector
        let n = Vector3::new(-h.y, h.x, 0.0);
        let n_mag = n.norm();

        // Eccentricity vector
        let e_vec = ((v * v - mu / r) * pos - pos.dot(vel) * vel) / mu;
        let ecc = e_vec.norm();

        // Semi-major axis from the energy integral
        let energy = 0.5 * v * v - mu / r;
        let sma = if ecc.abs() < 1.0 - 1e-10 {
            -mu / (2.0 * energy)
        } else {
            h_mag * h_mag / (mu * (1.0 - ecc * ecc).abs())
        };

        let inc = (h.z / h_mag).clamp(-1.0, 1.0).acos();

        let raan = if n_mag > 1e-10 {
            let r = (n.x / n_mag).clamp(-1.0, 1.0).acos();
            if n.y < 0.0 { 2.0 * std::f64::consts::PI - r } else { r }
        } else {
            0.0
        };

        let argp = if n_mag > 1e-10 && ecc > 1e-10 {
            let cos_argp = (n.dot(&e_vec) / (n_mag * ecc)).clamp(-1.0, 1.0);
            let w = cos_argp.acos();
            if e_vec.z < 0.0 { 2.0 * std::f64::consts::PI - w } else { w }
        } else {
            0.0
        };

        let true_anom = if ecc > 1e-10 {
            let cos_nu = (e_vec.dot(pos) / (ecc * r)).clamp(-1.0, 1.0);
            let nu = cos_nu.acos();
            if pos.dot(vel) < 0.0 { 2.0 * std::f64::consts::PI - nu } else { nu }
        } else {
            0.0
        };

        KeplerianElements {
            sma,
            ecc,
            inc,
            raan,
            argp,
            true_anom,
        }
    }

    /// Orbital period around Earth (s).
    pub fn period(&self) -> f64 {
        self.period_mu(EARTH_MU)
    }

    pub fn period_mu(&self, mu: f64) -> f64 {
        2.0 * std::f64::consts::PI * (self.sma.powi(3) / mu).sqrt()
    }

    /// Circular orbit of the given radius (km) and inclination (rad).
    pub fn circular(radius: f64, inc: f64) -> Self {
        KeplerianElements {
            sma: radius,
            ecc: 0.0,
            inc,
            raan: 0.0,
            argp: 0.0,
            true_anom: 0.0,
        }
    }
}
