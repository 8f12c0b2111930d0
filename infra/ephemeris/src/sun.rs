//! Apparent geocentric longitude of the Sun.

use crate::angle::{normalize_degrees, polynomial, sin_deg};

/// Aberration at the mean Earth-Sun distance, in degrees.
const ABERRATION: f64 = 0.00569;

/// Apparent ecliptic longitude of the Sun in degrees.
///
/// `t` is Julian centuries (TT) since J2000.0 and `nutation_longitude` is Δψ in degrees.
/// Accurate to about 0.01°.
#[must_use]
pub fn apparent_longitude(t: f64, nutation_longitude: f64) -> f64 {
    let mean_longitude = polynomial(t, &[280.46646, 36000.76983, 0.0003032]);
    let mean_anomaly = polynomial(t, &[357.52911, 35999.05029, -0.0001537]);

    let center = polynomial(t, &[1.914602, -0.004817, -0.000014]) * sin_deg(mean_anomaly)
        + (0.019993 - 0.000101 * t) * sin_deg(2.0 * mean_anomaly)
        + 0.000289 * sin_deg(3.0 * mean_anomaly);

    normalize_degrees(mean_longitude + center - ABERRATION + nutation_longitude)
}
