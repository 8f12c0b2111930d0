//! Degree helpers shared by the series.

/// Seconds of arc per degree.
pub(crate) const ARCSEC_PER_DEGREE: f64 = 3600.0;

/// Wraps an angle into `[0, 360)`.
#[must_use]
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

#[inline]
pub(crate) fn sin_deg(degrees: f64) -> f64 {
    degrees.to_radians().sin()
}

#[inline]
pub(crate) fn cos_deg(degrees: f64) -> f64 {
    degrees.to_radians().cos()
}

/// Evaluates `c0 + c1*t + c2*t^2 + ...` by Horner's rule.
pub(crate) fn polynomial(t: f64, coefficients: &[f64]) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, c| acc.mul_add(t, *c))
}
