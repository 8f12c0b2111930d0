//! Sidereal time and the ascendant.

use crate::angle::{cos_deg, normalize_degrees, sin_deg};
use crate::time::{DAYS_PER_CENTURY, J2000};

/// Greenwich mean sidereal time in degrees for a universal-time Julian day.
#[must_use]
pub fn greenwich_mean(jd_ut: f64) -> f64 {
    let days = jd_ut - J2000;
    let t = days / DAYS_PER_CENTURY;
    normalize_degrees(
        280.46061837 + 360.98564736629 * days + 0.000387933 * t * t - t * t * t / 38_710_000.0,
    )
}

/// Greenwich apparent sidereal time: mean time corrected by the equation of the equinoxes.
#[must_use]
pub fn greenwich_apparent(jd_ut: f64, nutation_longitude: f64, true_obliquity: f64) -> f64 {
    normalize_degrees(greenwich_mean(jd_ut) + nutation_longitude * cos_deg(true_obliquity))
}

/// Local apparent sidereal time (right ascension of the meridian) for an east-positive longitude.
#[must_use]
pub fn local_apparent(gast: f64, longitude: f64) -> f64 {
    normalize_degrees(gast + longitude)
}

/// Ecliptic longitude rising on the eastern horizon, in degrees.
///
/// `ramc` is the local sidereal time, `obliquity` the true obliquity and `latitude`
/// the geographic latitude (north positive), all in degrees.
#[must_use]
pub fn ascendant(ramc: f64, obliquity: f64, latitude: f64) -> f64 {
    let y = cos_deg(ramc);
    let x = -(sin_deg(ramc) * cos_deg(obliquity)
        + latitude.to_radians().tan() * sin_deg(obliquity));
    normalize_degrees(y.atan2(x).to_degrees())
}
