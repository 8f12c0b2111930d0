//! Julian dates and the difference between terrestrial and universal time.

use crate::angle::polynomial;

/// Julian day of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000: f64 = 2_451_545.0;
/// Days in a Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian day for a Gregorian calendar date, with `day` carrying the fraction of the day.
///
/// Valid for any proleptic Gregorian date after -4712.
#[must_use]
pub fn julian_day(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (f64::from(year) - 1.0, f64::from(month) + 12.0)
    } else {
        (f64::from(year), f64::from(month))
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Julian centuries elapsed since J2000.0.
#[must_use]
pub fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000) / DAYS_PER_CENTURY
}

/// Adds ΔT to a universal-time Julian day.
#[must_use]
pub fn ephemeris_day(jd_ut: f64, delta_t_seconds: f64) -> f64 {
    jd_ut + delta_t_seconds / SECONDS_PER_DAY
}

/// ΔT = TT - UT in seconds, from the Espenak and Meeus piecewise polynomials.
///
/// `year` is fractional (`2000.5` is mid-2000). Outside the fitted spans the long-term
/// parabola is used.
#[must_use]
pub fn delta_t(year: f64) -> f64 {
    let y = year;
    let long_term = |y: f64| {
        let u = (y - 1820.0) / 100.0;
        32.0f64.mul_add(u * u, -20.0)
    };

    match y {
        y if y < 500.0 => long_term(y),
        y if y < 1600.0 => polynomial(
            (y - 1000.0) / 100.0,
            &[1574.2, -556.01, 71.23472, 0.319781, -0.8503463, -0.005050998, 0.0083572073],
        ),
        y if y < 1700.0 => polynomial(y - 1600.0, &[120.0, -0.9808, -0.01532, 1.0 / 7129.0]),
        y if y < 1800.0 => polynomial(
            y - 1700.0,
            &[8.83, 0.1603, -0.0059285, 0.00013336, -1.0 / 1_174_000.0],
        ),
        y if y < 1860.0 => polynomial(
            y - 1800.0,
            &[
                13.72,
                -0.332447,
                0.0068612,
                0.0041116,
                -0.00037436,
                0.0000121272,
                -0.0000001699,
                0.000000000875,
            ],
        ),
        y if y < 1900.0 => polynomial(
            y - 1860.0,
            &[7.62, 0.5737, -0.251754, 0.01680668, -0.0004473624, 1.0 / 233_174.0],
        ),
        y if y < 1920.0 => {
            polynomial(y - 1900.0, &[-2.79, 1.494119, -0.0598939, 0.0061966, -0.000197])
        }
        y if y < 1941.0 => polynomial(y - 1920.0, &[21.20, 0.84493, -0.076100, 0.0020936]),
        y if y < 1961.0 => polynomial(y - 1950.0, &[29.07, 0.407, -1.0 / 233.0, 1.0 / 2547.0]),
        y if y < 1986.0 => polynomial(y - 1975.0, &[45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0]),
        y if y < 2005.0 => polynomial(
            y - 2000.0,
            &[63.86, 0.3345, -0.060374, 0.0017275, 0.000651814, 0.00002373599],
        ),
        y if y < 2050.0 => polynomial(y - 2000.0, &[62.92, 0.32217, 0.005589]),
        y if y < 2150.0 => 0.5628f64.mul_add(-(2150.0 - y), long_term(y)),
        y => long_term(y),
    }
}

/// Decimal year used to pick the ΔT polynomial.
#[must_use]
pub fn decimal_year(year: i32, month: u32) -> f64 {
    f64::from(year) + (f64::from(month) - 0.5) / 12.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_epoch() {
        assert!((julian_day(2000, 1, 1.5) - J2000).abs() < 1e-9);
    }

    #[test]
    fn meeus_reference_dates() {
        // Sputnik launch, 1957 October 4.81
        assert!((julian_day(1957, 10, 4.81) - 2_436_116.31).abs() < 1e-6);
        assert!((julian_day(1987, 1, 27.0) - 2_446_822.5).abs() < 1e-9);
        assert!((julian_day(1988, 6, 19.5) - 2_447_332.0).abs() < 1e-9);
        assert!((julian_day(1600, 12, 31.0) - 2_305_812.5).abs() < 1e-9);
    }

    #[test]
    fn delta_t_is_about_a_minute_near_2000() {
        let dt = delta_t(2000.0);
        assert!((dt - 63.86).abs() < 1e-9);
        assert!((60.0..75.0).contains(&delta_t(2010.0)));
    }

    #[test]
    fn delta_t_is_continuous_enough_at_span_edges() {
        for edge in [1600.0, 1700.0, 1800.0, 1860.0, 1900.0, 1920.0, 1941.0, 1961.0, 1986.0, 2005.0, 2050.0] {
            let before = delta_t(edge - 1e-6);
            let after = delta_t(edge);
            assert!((before - after).abs() < 5.0, "jump at {edge}: {before} vs {after}");
        }
    }

    #[test]
    fn delta_t_grows_in_the_distant_past() {
        assert!(delta_t(1000.0) > 1000.0);
        assert!(delta_t(1000.0) > delta_t(1500.0));
    }

    #[test]
    fn ephemeris_day_adds_seconds() {
        assert!((ephemeris_day(J2000, 86_400.0) - (J2000 + 1.0)).abs() < 1e-12);
    }
}
