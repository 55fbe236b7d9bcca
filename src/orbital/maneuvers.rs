use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Closed-form two-body relations
// ---------------------------------------------------------------------------

/// Vis-viva equation: speed at radius `r` on an orbit of semi-major axis `a`.
pub fn vis_viva(r: f64, a: f64, mu: f64) -> f64 {
    (mu * (2.0 / r - 1.0 / a)).sqrt()
}

/// Circular orbit speed at radius `r`.
pub fn circular_velocity(r: f64, mu: f64) -> f64 {
    (mu / r).sqrt()
}

/// Orbital period from Kepler's third law, `a` being the semi-major axis.
pub fn orbital_period(a: f64, mu: f64) -> f64 {
    2.0 * std::f64::consts::PI * (a.powi(3) / mu).sqrt()
}

// ---------------------------------------------------------------------------
// Hohmann transfer
// ---------------------------------------------------------------------------

/// Result of a Hohmann transfer calculation. Distances in the units of the
/// input radii, speeds in matching units per second.
#[derive(Debug, Clone, Copy)]
pub struct HohmannTransfer {
    pub dv1: f64,         // first burn, at periapsis of the transfer ellipse
    pub dv2: f64,         // second burn, circularize at apoapsis
    pub total_dv: f64,
    pub tof: f64,         // time of flight: half the transfer orbit period
    pub a_transfer: f64,  // transfer ellipse semi-major axis
    pub e_transfer: f64,  // transfer ellipse eccentricity
    pub v_periapsis: f64, // transfer orbit speed at r1
    pub v_apoapsis: f64,  // transfer orbit speed at r2
    pub r1: f64,          // inner orbit radius
    pub r2: f64,          // outer orbit radius
}

/// Two-impulse minimum-energy transfer between coplanar circular orbits.
///
/// Radii are normalized so the smaller is treated as the initial orbit;
/// `hohmann(r2, r1, mu)` equals `hohmann(r1, r2, mu)`.
pub fn hohmann(r1: f64, r2: f64, mu: f64) -> HohmannTransfer {
    let (r1, r2) = if r1 > r2 { (r2, r1) } else { (r1, r2) };

    let v1 = circular_velocity(r1, mu);
    let v2 = circular_velocity(r2, mu);

    let a_transfer = (r1 + r2) / 2.0;
    let e_transfer = (r2 - r1) / (r2 + r1);

    let v_periapsis = vis_viva(r1, a_transfer, mu);
    let v_apoapsis = vis_viva(r2, a_transfer, mu);

    let dv1 = (v_periapsis - v1).abs();
    let dv2 = (v2 - v_apoapsis).abs();

    HohmannTransfer {
        dv1,
        dv2,
        total_dv: dv1 + dv2,
        tof: orbital_period(a_transfer, mu) / 2.0,
        a_transfer,
        e_transfer,
        v_periapsis,
        v_apoapsis,
        r1,
        r2,
    }
}

// ---------------------------------------------------------------------------
// Bi-elliptic transfer
// ---------------------------------------------------------------------------

/// Result of a bi-elliptic transfer calculation: three burns via an
/// intermediate apoapsis at `rb`.
#[derive(Debug, Clone, Copy)]
pub struct BiellipticTransfer {
    pub dv1: f64, // burn at r1 onto the first ellipse
    pub dv2: f64, // burn at rb onto the second ellipse
    pub dv3: f64, // circularize at r2
    pub total_dv: f64,
    pub tof: f64,  // tof1 + tof2
    pub tof1: f64, // half period of the first ellipse
    pub tof2: f64, // half period of the second ellipse
    pub a_transfer1: f64,
    pub a_transfer2: f64,
    pub e_transfer1: f64,
    pub e_transfer2: f64,
}

/// Three-impulse transfer via a high intermediate apoapsis `rb`. Beats the
/// Hohmann transfer for radius ratios above ~11.94 when `rb` is large.
///
/// `rb` must exceed the larger of the two circular radii.
pub fn bielliptic(r1: f64, r2: f64, rb: f64, mu: f64) -> Result<BiellipticTransfer> {
    let (r1, r2) = if r1 > r2 { (r2, r1) } else { (r1, r2) };

    if rb <= r2 {
        return Err(Error::InvalidArgument(format!(
            "intermediate radius rb ({rb}) must exceed the outer orbit radius ({r2})"
        )));
    }

    let v1 = circular_velocity(r1, mu);
    let v2 = circular_velocity(r2, mu);

    // First ellipse: r1 up to rb
    let a1 = (r1 + rb) / 2.0;
    let v1_peri = vis_viva(r1, a1, mu);
    let v1_apo = vis_viva(rb, a1, mu);

    // Second ellipse: rb down to r2
    let a2 = (r2 + rb) / 2.0;
    let v2_apo = vis_viva(rb, a2, mu);
    let v2_peri = vis_viva(r2, a2, mu);

    let dv1 = (v1_peri - v1).abs();
    let dv2 = (v2_apo - v1_apo).abs();
    let dv3 = (v2 - v2_peri).abs();

    let tof1 = orbital_period(a1, mu) / 2.0;
    let tof2 = orbital_period(a2, mu) / 2.0;

    Ok(BiellipticTransfer {
        dv1,
        dv2,
        dv3,
        total_dv: dv1 + dv2 + dv3,
        tof: tof1 + tof2,
        tof1,
        tof2,
        a_transfer1: a1,
        a_transfer2: a2,
        e_transfer1: (rb - r1) / (rb + r1),
        e_transfer2: (rb - r2) / (rb + r2),
    })
}

// ---------------------------------------------------------------------------
// Plotting support
// ---------------------------------------------------------------------------

/// Planar `[x, y]` points along the half transfer ellipse from r1 to r2,
/// parameterized by true anomaly from 0 to π. For rendering only.
pub fn transfer_ellipse_points(r1: f64, r2: f64, num_points: usize) -> Vec<[f64; 2]> {
    let (r1, r2) = if r1 > r2 { (r2, r1) } else { (r1, r2) };

    let a = (r1 + r2) / 2.0;
    let e = (r2 - r1) / (r2 + r1);
    let p = a * (1.0 - e * e); // semi-latus rectum

    (0..num_points)
        .map(|i| {
            let nu = std::f64::consts::PI * i as f64 / (num_points - 1).max(1) as f64;
            let r = p / (1.0 + e * nu.cos());
            [r * nu.cos(), r * nu.sin()]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{EARTH_GEO_RADIUS, EARTH_LEO_RADIUS, EARTH_MU};

    #[test]
    fn hohmann_leo_to_geo() {
        let h = hohmann(EARTH_LEO_RADIUS, EARTH_GEO_RADIUS, EARTH_MU);

        // Known values: ~2.45 + ~1.48 ≈ 3.93 km/s, ~5.3 h transfer
        assert!(
            h.total_dv > 3.8 && h.total_dv < 4.1,
            "LEO->GEO dv should be ~3.93 km/s, got {:.3}",
            h.total_dv
        );
        assert!(
            h.tof > 18_000.0 && h.tof < 20_000.0,
            "transfer time should be ~5.3 h, got {:.0} s",
            h.tof
        );
        assert!(h.dv1 > h.dv2, "periapsis burn dominates for LEO->GEO");
    }

    #[test]
    fn hohmann_is_symmetric_in_radii() {
        let up = hohmann(7_000.0, 42_164.0, EARTH_MU);
        let down = hohmann(42_164.0, 7_000.0, EARTH_MU);
        assert_eq!(up.total_dv, down.total_dv);
        assert_eq!(up.r1, down.r1);
    }

    #[test]
    fn zero_dv_for_same_orbit() {
        let h = hohmann(7_000.0, 7_000.0, EARTH_MU);
        assert!(h.total_dv < 1e-9);
        assert!(h.e_transfer.abs() < 1e-12);
    }

    #[test]
    fn bielliptic_beats_hohmann_for_large_ratio() {
        // Ratio 15 with a distant intermediate apoapsis
        let r1 = 7_000.0;
        let r2 = 15.0 * r1;
        let rb = 60.0 * r1;

        let h = hohmann(r1, r2, EARTH_MU);
        let b = bielliptic(r1, r2, rb, EARTH_MU).unwrap();

        assert!(
            b.total_dv < h.total_dv,
            "bi-elliptic {:.4} should beat Hohmann {:.4} at ratio 15",
            b.total_dv,
            h.total_dv
        );
        // The price is a far longer flight
        assert!(b.tof > h.tof);
    }

    #[test]
    fn bielliptic_rejects_low_intermediate_radius() {
        let err = bielliptic(7_000.0, 42_164.0, 40_000.0, EARTH_MU).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn transfer_ellipse_spans_r1_to_r2() {
        let pts = transfer_ellipse_points(7_000.0, 42_164.0, 101);
        assert_eq!(pts.len(), 101);

        // nu = 0 is periapsis at (r1, 0); nu = pi is apoapsis at (-r2, 0)
        assert!((pts[0][0] - 7_000.0).abs() < 1e-6 && pts[0][1].abs() < 1e-9);
        let last = pts.last().unwrap();
        assert!((last[0] + 42_164.0).abs() < 1e-6 && last[1].abs() < 1e-6);
    }

    #[test]
    fn vis_viva_reduces_to_circular() {
        let r = 8_000.0;
        assert!((vis_viva(r, r, EARTH_MU) - circular_velocity(r, EARTH_MU)).abs() < 1e-12);
    }

    #[test]
    fn leo_period_is_about_90_minutes() {
        let t = orbital_period(EARTH_LEO_RADIUS, EARTH_MU);
        assert!(t > 5_200.0 && t < 5_500.0, "got {t:.0} s");
    }
}
