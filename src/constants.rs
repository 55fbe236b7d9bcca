// ---------------------------------------------------------------------------
// Physical constants (km / km^3 s^-2 convention throughout)
// ---------------------------------------------------------------------------

pub const EARTH_MU: f64 = 398_600.4418; // km^3/s^2
pub const EARTH_RADIUS: f64 = 6_371.0; // km, mean radius
pub const EARTH_SOI: f64 = 0.929e6; // km, sphere of influence (approximate)

pub const SUN_MU: f64 = 1.327_124_400_18e11; // km^3/s^2
pub const SUN_RADIUS: f64 = 696_340.0; // km
pub const AU_KM: f64 = 149_597_870.7; // km per astronomical unit

pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const SECONDS_PER_YEAR: f64 = 365.25 * SECONDS_PER_DAY;

// Common reference orbits
pub const EARTH_LEO_ALTITUDE: f64 = 200.0; // km
pub const EARTH_GEO_ALTITUDE: f64 = 35_786.0; // km
pub const EARTH_LEO_RADIUS: f64 = EARTH_RADIUS + EARTH_LEO_ALTITUDE;
pub const EARTH_GEO_RADIUS: f64 = EARTH_RADIUS + EARTH_GEO_ALTITUDE;

// ---------------------------------------------------------------------------
// Central bodies
// ---------------------------------------------------------------------------

/// A central body for orbital calculations. `mu` and `radius` must use a
/// consistent unit system (km and seconds for the predefined bodies).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentralBody {
    pub name: &'static str,
    pub mu: f64,
    pub radius: f64,
    pub distance_unit: &'static str,
    pub time_unit: &'static str,
}

pub const EARTH: CentralBody = CentralBody {
    name: "Earth",
    mu: EARTH_MU,
    radius: EARTH_RADIUS,
    distance_unit: "km",
    time_unit: "s",
};

pub const SUN: CentralBody = CentralBody {
    name: "Sun",
    mu: SUN_MU,
    radius: SUN_RADIUS,
    distance_unit: "km",
    time_unit: "s",
};

/// Look up a predefined central body by (case-insensitive) name.
pub fn central_body(name: &str) -> Option<CentralBody> {
    match name.to_ascii_lowercase().as_str() {
        "earth" => Some(EARTH),
        "sun" => Some(SUN),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_lookup_is_case_insensitive() {
        assert_eq!(central_body("Earth"), Some(EARTH));
        assert_eq!(central_body("SUN"), Some(SUN));
        assert_eq!(central_body("Krypton"), None);
    }

    #[test]
    fn geo_radius_is_consistent() {
        assert!((EARTH_GEO_RADIUS - 42_157.0).abs() < 10.0);
    }
}
