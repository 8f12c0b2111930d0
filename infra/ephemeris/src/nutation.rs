//! Nutation in longitude and obliquity, plus the obliquity of the ecliptic.
//!
//! Uses the four-term low-accuracy nutation (good to about 0.5" in longitude and
//! 0.1" in obliquity) and the IAU 1980 mean obliquity polynomial.

use crate::angle::{ARCSEC_PER_DEGREE, cos_deg, polynomial, sin_deg};

/// Nutation terms and obliquities at one instant, all in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    /// Δψ, nutation in longitude.
    pub longitude: f64,
    /// Δε, nutation in obliquity.
    pub obliquity: f64,
    /// ε0, mean obliquity of the ecliptic.
    pub mean_obliquity: f64,
}

impl Nutation {
    /// Computes nutation for `t` Julian centuries (TT) since J2000.0.
    #[must_use]
    pub fn at(t: f64) -> Self {
        let omega = polynomial(t, &[125.04452, -1934.136261, 0.0020708, 1.0 / 450_000.0]);
        let sun = 280.4665 + 36000.7698 * t;
        let moon = 218.3165 + 481_267.8813 * t;

        let d_psi = -17.20 * sin_deg(omega) - 1.32 * sin_deg(2.0 * sun)
            - 0.23 * sin_deg(2.0 * moon)
            + 0.21 * sin_deg(2.0 * omega);
        let d_eps = 9.20 * cos_deg(omega) + 0.57 * cos_deg(2.0 * sun)
            + 0.10 * cos_deg(2.0 * moon)
            - 0.09 * cos_deg(2.0 * omega);

        Self {
            longitude: d_psi / ARCSEC_PER_DEGREE,
            obliquity: d_eps / ARCSEC_PER_DEGREE,
            mean_obliquity: mean_obliquity(t),
        }
    }

    /// ε = ε0 + Δε.
    #[must_use]
    pub fn true_obliquity(&self) -> f64 {
        self.mean_obliquity + self.obliquity
    }
}

/// Mean obliquity of the ecliptic in degrees.
#[must_use]
pub fn mean_obliquity(t: f64) -> f64 {
    // 23°26'21.448" expressed in arcseconds
    polynomial(t, &[84_381.448, -46.8150, -0.00059, 0.001813]) / ARCSEC_PER_DEGREE
}

#[cfg(test)]
mod tests {
    use super::*;

    const T_1987_APR_10: f64 = -0.127_296_372_348;

    #[test]
    fn low_accuracy_nutation_matches_full_theory() {
        let n = Nutation::at(T_1987_APR_10);
        assert!((n.longitude * ARCSEC_PER_DEGREE - -3.788).abs() < 0.5);
        assert!((n.obliquity * ARCSEC_PER_DEGREE - 9.443).abs() < 0.1);
    }

    #[test]
    fn obliquity_reference_values() {
        let n = Nutation::at(T_1987_APR_10);
        let mean = 23.0 + 26.0 / 60.0 + 27.407 / 3600.0;
        assert!((n.mean_obliquity - mean).abs() * ARCSEC_PER_DEGREE < 0.01);

        let true_obliquity = 23.0 + 26.0 / 60.0 + 36.850 / 3600.0;
        assert!((n.true_obliquity() - true_obliquity).abs() * ARCSEC_PER_DEGREE < 0.2);
    }

    #[test]
    fn j2000_mean_obliquity() {
        assert!((mean_obliquity(0.0) - 23.439_291_1).abs() < 1e-6);
    }
}
