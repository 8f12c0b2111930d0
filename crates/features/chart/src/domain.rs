//! Wire types of the chart endpoints.

use natal_derive::api_model;
use natal_ephemeris::{Calculation, CelestialPoint, SignReading};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

#[api_model(deny_unknown_fields = false)]
/// Birth data as submitted by clients
#[derive(Clone, PartialEq)]
pub struct BirthChartRequest {
    /// Display name of the subject
    pub name: String,
    /// `YYYY-MM-DD`
    pub birth_date: String,
    /// `HH:MM` local clock time
    pub birth_time: String,
    /// Degrees, north positive
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub latitude: f64,
    /// Degrees, east positive
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub longitude: f64,
    /// IANA zone of `birthTime`, e.g. `Europe/London`; UTC when omitted
    #[serde(default)]
    pub timezone: Option<String>,
}

/// Reads a JSON number, or a string holding one such as `"51.5"`.
fn number_or_numeric_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Coordinate {
        Number(f64),
        Text(String),
    }

    match Coordinate::deserialize(deserializer)? {
        Coordinate::Number(value) => Ok(value),
        Coordinate::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("expected a number, got '{text}'"))),
    }
}

#[api_model]
/// The three signs a natal chart is summarised by
#[derive(Clone, PartialEq, Eq)]
pub struct SignResult {
    pub sun_sign: String,
    pub moon_sign: String,
    pub ascendant_sign: String,
}

impl SignResult {
    pub fn from_reading(reading: &impl SignReading) -> Self {
        Self {
            sun_sign: reading.sun_sign().to_string(),
            moon_sign: reading.moon_sign().to_string(),
            ascendant_sign: reading.ascendant_sign().to_string(),
        }
    }
}

#[api_model]
/// A point on the ecliptic
#[derive(Clone, PartialEq)]
pub struct PointDto {
    pub sign: String,
    /// Whole degrees into the sign
    pub degrees: u8,
    /// Arc minutes past `degrees`
    pub minutes: u8,
    /// Ecliptic longitude, 0 to 360
    pub longitude: f64,
}

impl From<&CelestialPoint> for PointDto {
    fn from(point: &CelestialPoint) -> Self {
        Self {
            sign: point.sign.to_string(),
            degrees: point.degrees,
            minutes: point.minutes,
            longitude: point.longitude,
        }
    }
}

#[api_model]
/// Time scales and angles behind a chart
#[derive(Clone, PartialEq)]
pub struct CalculationDto {
    pub julian_day: f64,
    /// TT - UT in seconds
    pub delta_t: f64,
    /// True obliquity of the ecliptic in degrees
    pub obliquity: f64,
    /// Nutation in longitude in degrees
    pub nutation_longitude: f64,
}

impl From<&Calculation> for CalculationDto {
    fn from(calc: &Calculation) -> Self {
        Self {
            julian_day: calc.julian_day,
            delta_t: calc.delta_t,
            obliquity: calc.obliquity,
            nutation_longitude: calc.nutation_longitude,
        }
    }
}

#[api_model]
/// Detailed placements of the Sun, the Moon and the ascendant
#[derive(Clone, PartialEq)]
pub struct PositionsResult {
    pub name: String,
    pub sun: PointDto,
    pub moon: PointDto,
    pub ascendant: PointDto,
    pub calculation: CalculationDto,
}
