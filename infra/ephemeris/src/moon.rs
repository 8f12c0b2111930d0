//! Apparent geocentric longitude of the Moon from the truncated ELP-2000/82 series.
//!
//! The 60 periodic terms of the longitude series give roughly 10" accuracy, well
//! inside what sign placement needs.

use crate::angle::{normalize_degrees, polynomial, sin_deg};

/// Multiples of D, M, M', F and the sine coefficient in 1e-6 degrees.
type Term = (i8, i8, i8, i8, i32);

#[rustfmt::skip]
const LONGITUDE_TERMS: [Term; 60] = [
    (0, 0, 1, 0, 6_288_774), (2, 0, -1, 0, 1_274_027), (2, 0, 0, 0, 658_314),
    (0, 0, 2, 0, 213_618), (0, 1, 0, 0, -185_116), (0, 0, 0, 2, -114_332),
    (2, 0, -2, 0, 58_793), (2, -1, -1, 0, 57_066), (2, 0, 1, 0, 53_322),
    (2, -1, 0, 0, 45_758), (0, 1, -1, 0, -40_923), (1, 0, 0, 0, -34_720),
    (0, 1, 1, 0, -30_383), (2, 0, 0, -2, 15_327), (0, 0, 1, 2, -12_528),
    (0, 0, 1, -2, 10_980), (4, 0, -1, 0, 10_675), (0, 0, 3, 0, 10_034),
    (4, 0, -2, 0, 8_548), (2, 1, -1, 0, -7_888), (2, 1, 0, 0, -6_766),
    (1, 0, -1, 0, -5_163), (1, 1, 0, 0, 4_987), (2, -1, 1, 0, 4_036),
    (2, 0, 2, 0, 3_994), (4, 0, 0, 0, 3_861), (2, 0, -3, 0, 3_665),
    (0, 1, -2, 0, -2_689), (2, 0, -1, 2, -2_602), (2, -1, -2, 0, 2_390),
    (1, 0, 1, 0, -2_348), (2, -2, 0, 0, 2_236), (0, 1, 2, 0, -2_120),
    (0, 2, 0, 0, -2_069), (2, -2, -1, 0, 2_048), (2, 0, 1, -2, -1_773),
    (2, 0, 0, 2, -1_595), (4, -1, -1, 0, 1_215), (0, 0, 2, 2, -1_110),
    (3, 0, -1, 0, -892), (2, 1, 1, 0, -810), (4, -1, -2, 0, 759),
    (0, 2, -1, 0, -713), (2, 2, -1, 0, -700), (2, 1, -2, 0, 691),
    (2, -1, 0, -2, 596), (4, 0, 1, 0, 549), (0, 0, 4, 0, 537),
    (4, -1, 0, 0, 520), (1, 0, -2, 0, -487), (2, 1, 0, -2, -399),
    (0, 0, 2, -2, -381), (1, 1, 1, 0, 351), (3, 0, -2, 0, -340),
    (4, 0, -3, 0, 330), (2, -1, 2, 0, 327), (0, 2, 1, 0, -323),
    (1, 1, -1, 0, 299), (2, 0, 3, 0, 294), (2, 0, -1, -2, 0),
];

/// Fundamental arguments of the lunar theory, in degrees.
#[derive(Debug, Clone, Copy)]
struct Arguments {
    mean_longitude: f64,
    elongation: f64,
    sun_anomaly: f64,
    moon_anomaly: f64,
    latitude_argument: f64,
    /// Eccentricity damping for terms involving the Sun's anomaly.
    eccentricity: f64,
}

impl Arguments {
    fn at(t: f64) -> Self {
        Self {
            mean_longitude: polynomial(
                t,
                &[218.3164477, 481_267.88123421, -0.0015786, 1.0 / 538_841.0, -1.0 / 65_194_000.0],
            ),
            elongation: polynomial(
                t,
                &[297.8501921, 445_267.1114034, -0.0018819, 1.0 / 545_868.0, -1.0 / 113_065_000.0],
            ),
            sun_anomaly: polynomial(t, &[357.5291092, 35_999.0502909, -0.0001536, 1.0 / 24_490_000.0]),
            moon_anomaly: polynomial(
                t,
                &[134.9633964, 477_198.8675055, 0.0087414, 1.0 / 69_699.0, -1.0 / 14_712_000.0],
            ),
            latitude_argument: polynomial(
                t,
                &[93.2720950, 483_202.0175233, -0.0036539, -1.0 / 3_526_000.0, 1.0 / 863_310_000.0],
            ),
            eccentricity: polynomial(t, &[1.0, -0.002516, -0.0000074]),
        }
    }
}

/// Sum of the periodic longitude terms, in 1e-6 degrees.
fn periodic_longitude(args: &Arguments, t: f64) -> f64 {
    let series: f64 = LONGITUDE_TERMS
        .iter()
        .map(|&(d, m, mp, f, coefficient)| {
            let angle = f64::from(d) * args.elongation
                + f64::from(m) * args.sun_anomaly
                + f64::from(mp) * args.moon_anomaly
                + f64::from(f) * args.latitude_argument;
            let damping = match m.unsigned_abs() {
                0 => 1.0,
                1 => args.eccentricity,
                _ => args.eccentricity * args.eccentricity,
            };
            f64::from(coefficient) * damping * sin_deg(angle)
        })
        .sum();

    // Venus, Jupiter and Earth-flattening perturbations
    let a1 = 119.75 + 131.849 * t;
    let a2 = 53.09 + 479_264.290 * t;
    series
        + 3958.0 * sin_deg(a1)
        + 1962.0 * sin_deg(args.mean_longitude - args.latitude_argument)
        + 318.0 * sin_deg(a2)
}

/// Geometric ecliptic longitude of the Moon in degrees, referred to the mean equinox.
#[must_use]
pub fn geometric_longitude(t: f64) -> f64 {
    let args = Arguments::at(t);
    normalize_degrees(args.mean_longitude + periodic_longitude(&args, t) / 1_000_000.0)
}

/// Apparent ecliptic longitude of the Moon in degrees.
///
/// `t` is Julian centuries (TT) since J2000.0 and `nutation_longitude` is Δψ in degrees.
#[must_use]
pub fn apparent_longitude(t: f64, nutation_longitude: f64) -> f64 {
    normalize_degrees(geometric_longitude(t) + nutation_longitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutation::Nutation;

    const T_1992_APR_12: f64 = -0.077_221_081_451;

    #[test]
    fn meeus_1992_april_12() {
        let lambda = geometric_longitude(T_1992_APR_12);
        assert!((lambda - 133.162_655).abs() < 1e-4, "got {lambda}");

        let apparent = apparent_longitude(T_1992_APR_12, Nutation::at(T_1992_APR_12).longitude);
        assert!((apparent - 133.167_265).abs() < 1e-3, "got {apparent}");
    }

    #[test]
    fn j2000_moon_is_in_scorpio() {
        let lambda = apparent_longitude(0.0, Nutation::at(0.0).longitude);
        assert!((210.0..240.0).contains(&lambda), "got {lambda}");
        assert!((lambda - 223.3).abs() < 0.5, "got {lambda}");
    }

    #[test]
    fn longitude_table_is_complete() {
        assert_eq!(LONGITUDE_TERMS.len(), 60);
        // Only the distance series uses the last row.
        assert_eq!(LONGITUDE_TERMS[59], (2, 0, -1, -2, 0));
        assert_eq!(LONGITUDE_TERMS.iter().filter(|term| term.4 == 0).count(), 1);
    }

    #[test]
    fn moon_moves_about_thirteen_degrees_a_day() {
        let day = 1.0 / 36_525.0;
        let a = geometric_longitude(0.1);
        let b = geometric_longitude(0.1 + day);
        let motion = normalize_degrees(b - a);
        assert!((11.5..15.5).contains(&motion), "daily motion {motion}");
    }
}
