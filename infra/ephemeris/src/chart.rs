use crate::angle::normalize_degrees;
use crate::zodiac::{SIGN_SPAN, ZodiacSign};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Read access to the three signs a chart is summarised by.
pub trait SignReading {
    fn sun_sign(&self) -> ZodiacSign;
    fn moon_sign(&self) -> ZodiacSign;
    fn ascendant_sign(&self) -> ZodiacSign;
}

/// A position on the ecliptic together with its zodiac placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CelestialPoint {
    /// Ecliptic longitude in `[0, 360)`.
    pub longitude: f64,
    pub sign: ZodiacSign,
    /// Whole degrees into the sign, `0..30`.
    pub degrees: u8,
    /// Arc minutes past `degrees`, `0..60`.
    pub minutes: u8,
}

impl CelestialPoint {
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_longitude(longitude: f64) -> Self {
        let longitude = normalize_degrees(longitude);
        let sign = ZodiacSign::from_longitude(longitude);
        let within = (longitude - sign.start_longitude()).clamp(0.0, SIGN_SPAN);
        let degrees = within.floor();
        let minutes = ((within - degrees) * 60.0).floor();

        Self {
            longitude,
            sign,
            degrees: (degrees as u8).min(29),
            minutes: (minutes as u8).min(59),
        }
    }
}

/// Time scales and angles used for one chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    /// Julian day, universal time.
    pub julian_day: f64,
    /// Julian ephemeris day, terrestrial time.
    pub julian_ephemeris_day: f64,
    /// TT - UT in seconds.
    pub delta_t: f64,
    /// True obliquity of the ecliptic in degrees.
    pub obliquity: f64,
    /// Nutation in longitude in degrees.
    pub nutation_longitude: f64,
    /// Local apparent sidereal time in degrees.
    pub local_sidereal_time: f64,
}

/// A cast natal chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub name: String,
    pub instant: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    pub sun: CelestialPoint,
    pub moon: CelestialPoint,
    pub ascendant: CelestialPoint,
    pub calculation: Calculation,
}

impl SignReading for Chart {
    fn sun_sign(&self) -> ZodiacSign {
        self.sun.sign
    }

    fn moon_sign(&self) -> ZodiacSign {
        self.moon.sign
    }

    fn ascendant_sign(&self) -> ZodiacSign {
        self.ascendant.sign
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_splits_degrees_and_minutes() {
        let point = CelestialPoint::from_longitude(54.5);
        assert_eq!(point.sign, ZodiacSign::Taurus);
        assert_eq!(point.degrees, 24);
        assert_eq!(point.minutes, 30);
    }

    #[test]
    fn point_normalizes_longitude() {
        let point = CelestialPoint::from_longitude(-0.25);
        assert!((point.longitude - 359.75).abs() < 1e-12);
        assert_eq!(point.sign, ZodiacSign::Pisces);
        assert_eq!(point.degrees, 29);
        assert_eq!(point.minutes, 45);
    }

    #[test]
    fn point_at_cusp_starts_the_sign() {
        let point = CelestialPoint::from_longitude(120.0);
        assert_eq!(point.sign, ZodiacSign::Leo);
        assert_eq!((point.degrees, point.minutes), (0, 0));
    }
}
