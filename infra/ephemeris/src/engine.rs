use crate::chart::{Calculation, CelestialPoint, Chart, SignReading};
use crate::error::{EphemerisError, EphemerisErrorExt};
use crate::nutation::Nutation;
use crate::subject::BirthSubject;
use crate::time::{centuries_since_j2000, decimal_year, delta_t, ephemeris_day, julian_day};
use crate::{moon, sidereal, sun};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use std::fmt;
use std::ops::RangeInclusive;
use tracing::{debug, warn};

/// Oldest year accepted by [`Ephemeris::default`].
pub const DEFAULT_MIN_YEAR: i32 = 1000;
/// Latest year accepted by [`Ephemeris::default`].
pub const DEFAULT_MAX_YEAR: i32 = 3000;
/// Beyond this latitude some ecliptic degrees never rise and the ascendant jumps.
const POLAR_CIRCLE: f64 = 66.5;

/// Turns birth data into a chart.
pub trait ChartEngine: fmt::Debug + Send + Sync {
    type Chart: SignReading;

    /// # Errors
    /// Returns an [`EphemerisError`] when the subject cannot be charted.
    fn cast(&self, subject: &BirthSubject) -> Result<Self::Chart, EphemerisError>;
}

/// Analytical ephemeris for the Sun, the Moon and the ascendant.
///
/// Birth times are read in the subject's IANA zone, or as UTC when none is given.
/// The engine holds no state beyond the accepted year range, so one instance can
/// serve any number of threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ephemeris {
    years: RangeInclusive<i32>,
}

impl Default for Ephemeris {
    fn default() -> Self {
        Self { years: DEFAULT_MIN_YEAR..=DEFAULT_MAX_YEAR }
    }
}

impl Ephemeris {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the accepted years; reversed bounds are swapped.
    #[must_use]
    pub fn with_year_range(min: i32, max: i32) -> Self {
        Self { years: min.min(max)..=min.max(max) }
    }

    #[must_use]
    pub const fn years(&self) -> &RangeInclusive<i32> {
        &self.years
    }

    fn birth_instant(&self, subject: &BirthSubject) -> Result<DateTime<Utc>, EphemerisError> {
        if !self.years.contains(&subject.year) {
            return Err(EphemerisError::OutOfRange {
                message: format!(
                    "year {} is outside {}..={}",
                    subject.year,
                    self.years.start(),
                    self.years.end()
                )
                .into(),
                context: None,
            });
        }

        let date = u32::try_from(subject.month)
            .ok()
            .zip(u32::try_from(subject.day).ok())
            .and_then(|(month, day)| NaiveDate::from_ymd_opt(subject.year, month, day))
            .ok_or_else(|| {
                EphemerisError::invalid(format!(
                    "{:04}-{:02}-{:02} is not a calendar date",
                    subject.year, subject.month, subject.day
                ))
            })?;

        let time = u32::try_from(subject.hour)
            .ok()
            .zip(u32::try_from(subject.minute).ok())
            .and_then(|(hour, minute)| NaiveTime::from_hms_opt(hour, minute, 0))
            .ok_or_else(|| {
                EphemerisError::invalid(format!(
                    "{:02}:{:02} is not a time of day",
                    subject.hour, subject.minute
                ))
            })?;

        let local = date.and_time(time);
        match subject.timezone.as_deref() {
            None => Ok(local.and_utc()),
            Some(name) => local_to_utc(local, name),
        }
    }
}

/// Converts a wall-clock time in zone `name` to UTC.
///
/// Times repeated by a backward clock change resolve to the earlier instant; times
/// skipped by a forward change are rejected.
fn local_to_utc(local: NaiveDateTime, name: &str) -> Result<DateTime<Utc>, EphemerisError> {
    let zone: Tz = name
        .trim()
        .parse()
        .map_err(|_| EphemerisError::invalid(format!("unknown time zone '{name}'")))?;

    zone.from_local_datetime(&local)
        .earliest()
        .map(|instant| instant.with_timezone(&Utc))
        .ok_or_else(|| {
            EphemerisError::invalid(format!(
                "{} does not exist in {zone}",
                local.format("%Y-%m-%d %H:%M")
            ))
        })
}

fn check_coordinates(subject: &BirthSubject) -> Result<(), EphemerisError> {
    let BirthSubject { latitude, longitude, .. } = *subject;
    if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
        return Err(EphemerisError::invalid(format!(
            "latitude {latitude} must be between -90 and 90"
        )));
    }
    if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
        return Err(EphemerisError::invalid(format!(
            "longitude {longitude} must be between -180 and 180"
        )));
    }
    Ok(())
}

fn finite(value: f64, what: &'static str) -> Result<f64, EphemerisError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EphemerisError::Computation { message: format!("{what} is {value}").into(), context: None })
    }
}

impl ChartEngine for Ephemeris {
    type Chart = Chart;

    fn cast(&self, subject: &BirthSubject) -> Result<Chart, EphemerisError> {
        check_coordinates(subject).context(subject.name.clone())?;
        let instant = self.birth_instant(subject).context(subject.name.clone())?;

        if subject.latitude.abs() > POLAR_CIRCLE {
            warn!(
                name = %subject.name,
                latitude = subject.latitude,
                "Birth place lies inside a polar circle; the ascendant may be unreliable"
            );
        }

        let day_fraction = (f64::from(instant.hour()) + f64::from(instant.minute()) / 60.0) / 24.0;
        let jd = julian_day(instant.year(), instant.month(), f64::from(instant.day()) + day_fraction);
        let dt = delta_t(decimal_year(instant.year(), instant.month()));
        let jde = ephemeris_day(jd, dt);
        let t = centuries_since_j2000(jde);

        let nutation = Nutation::at(t);
        let obliquity = nutation.true_obliquity();
        let sun = finite(sun::apparent_longitude(t, nutation.longitude), "solar longitude")?;
        let moon = finite(moon::apparent_longitude(t, nutation.longitude), "lunar longitude")?;

        let gast = sidereal::greenwich_apparent(jd, nutation.longitude, obliquity);
        let ramc = sidereal::local_apparent(gast, subject.longitude);
        let ascendant =
            finite(sidereal::ascendant(ramc, obliquity, subject.latitude), "ascendant")?;

        let chart = Chart {
            name: subject.name.clone(),
            instant,
            latitude: subject.latitude,
            longitude: subject.longitude,
            sun: CelestialPoint::from_longitude(sun),
            moon: CelestialPoint::from_longitude(moon),
            ascendant: CelestialPoint::from_longitude(ascendant),
            calculation: Calculation {
                julian_day: jd,
                julian_ephemeris_day: jde,
                delta_t: dt,
                obliquity,
                nutation_longitude: nutation.longitude,
                local_sidereal_time: ramc,
            },
        };

        debug!(
            name = %chart.name,
            instant = %chart.instant,
            sun = %chart.sun.sign,
            moon = %chart.moon.sign,
            ascendant = %chart.ascendant.sign,
            "Chart cast"
        );

        Ok(chart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ZodiacSign;

    fn subject(year: i32, month: i32, day: i32, hour: i32, minute: i32) -> BirthSubject {
        BirthSubject::builder()
            .name("Test")
            .year(year)
            .month(month)
            .day(day)
            .hour(hour)
            .minute(minute)
            .latitude(51.4779)
            .longitude(0.0)
            .build()
    }

    fn zoned(mut subject: BirthSubject, zone: &str) -> BirthSubject {
        subject.timezone = Some(zone.to_owned());
        subject
    }

    #[test]
    fn j2000_at_greenwich() {
        let chart = Ephemeris::new().cast(&subject(2000, 1, 1, 12, 0)).expect("chart");
        assert_eq!(chart.sun_sign(), ZodiacSign::Capricorn);
        assert_eq!(chart.moon_sign(), ZodiacSign::Scorpio);
        assert_eq!(chart.ascendant_sign(), ZodiacSign::Aries);
        assert!((chart.calculation.julian_day - 2_451_545.0).abs() < 1e-9);
        assert!((chart.calculation.delta_t - 63.86).abs() < 0.5);
    }

    #[test]
    fn impossible_dates_are_rejected() {
        let err = Ephemeris::new().cast(&subject(1990, 2, 30, 12, 0)).expect_err("Feb 30");
        assert!(matches!(err, EphemerisError::InvalidSubject { .. }));
        assert!(err.to_string().contains("1990-02-30"), "{err}");

        let err = Ephemeris::new().cast(&subject(1990, 13, 1, 12, 0)).expect_err("month 13");
        assert!(matches!(err, EphemerisError::InvalidSubject { .. }));

        let err = Ephemeris::new().cast(&subject(1990, -5, 15, 12, 0)).expect_err("month -5");
        assert!(matches!(err, EphemerisError::InvalidSubject { .. }));
    }

    #[test]
    fn impossible_times_are_rejected() {
        let err = Ephemeris::new().cast(&subject(1990, 5, 15, 24, 0)).expect_err("hour 24");
        assert!(matches!(err, EphemerisError::InvalidSubject { .. }));

        let err = Ephemeris::new().cast(&subject(1990, 5, 15, 12, 60)).expect_err("minute 60");
        assert!(matches!(err, EphemerisError::InvalidSubject { .. }));
    }

    #[test]
    fn coordinates_are_checked() {
        let mut bad = subject(1990, 5, 15, 12, 0);
        bad.latitude = 91.0;
        let err = Ephemeris::new().cast(&bad).expect_err("latitude 91");
        assert!(matches!(err, EphemerisError::InvalidSubject { .. }));

        bad.latitude = 0.0;
        bad.longitude = f64::NAN;
        let err = Ephemeris::new().cast(&bad).expect_err("NaN longitude");
        assert!(matches!(err, EphemerisError::InvalidSubject { .. }));
    }

    #[test]
    fn errors_carry_the_subject_name() {
        let err = Ephemeris::new().cast(&subject(1990, 2, 30, 12, 0)).expect_err("Feb 30");
        assert!(err.to_string().starts_with("Invalid birth data (Test):"), "{err}");
    }

    #[test]
    fn year_window_is_enforced() {
        let engine = Ephemeris::with_year_range(1900, 2100);
        let err = engine.cast(&subject(1850, 5, 15, 12, 0)).expect_err("too early");
        assert!(matches!(err, EphemerisError::OutOfRange { .. }));
        assert!(engine.cast(&subject(2100, 5, 15, 12, 0)).is_ok());
    }

    #[test]
    fn reversed_bounds_are_swapped() {
        let engine = Ephemeris::with_year_range(2100, 1900);
        assert_eq!(engine.years(), &(1900..=2100));
    }

    #[test]
    fn zoned_times_are_converted_to_utc() {
        let engine = Ephemeris::new();
        let summer = engine
            .cast(&zoned(subject(1990, 5, 15, 14, 30), "America/New_York"))
            .expect("zoned chart");
        let summer_utc = engine.cast(&subject(1990, 5, 15, 18, 30)).expect("utc chart");
        assert_eq!(summer.instant, summer_utc.instant);
        assert_eq!(summer.moon, summer_utc.moon);
        assert_eq!(summer.ascendant, summer_utc.ascendant);

        let winter = engine
            .cast(&zoned(subject(1990, 1, 15, 14, 30), "America/New_York"))
            .expect("zoned chart");
        assert_eq!(winter.instant.to_rfc3339(), "1990-01-15T19:30:00+00:00");
    }

    #[test]
    fn utc_is_used_without_a_zone() {
        let engine = Ephemeris::new();
        let plain = engine.cast(&subject(1990, 5, 15, 14, 30)).expect("plain");
        let utc = engine.cast(&zoned(subject(1990, 5, 15, 14, 30), "UTC")).expect("utc");
        assert_eq!(plain, utc);
        assert_eq!(plain.instant.to_rfc3339(), "1990-05-15T14:30:00+00:00");
    }

    #[test]
    fn unknown_zones_are_rejected() {
        let err = Ephemeris::new()
            .cast(&zoned(subject(1990, 5, 15, 14, 30), "Mars/Olympus_Mons"))
            .expect_err("unknown zone");
        assert!(matches!(err, EphemerisError::InvalidSubject { .. }));
        assert!(err.to_string().contains("Mars/Olympus_Mons"), "{err}");
    }

    #[test]
    fn clock_changes_are_resolved() {
        let engine = Ephemeris::new();
        let err = engine
            .cast(&zoned(subject(2021, 3, 14, 2, 30), "America/New_York"))
            .expect_err("skipped hour");
        assert!(matches!(err, EphemerisError::InvalidSubject { .. }));

        let repeated = engine
            .cast(&zoned(subject(2021, 11, 7, 1, 30), "America/New_York"))
            .expect("repeated hour");
        assert_eq!(repeated.instant.to_rfc3339(), "2021-11-07T05:30:00+00:00");
    }

    #[test]
    fn polar_births_still_cast() {
        let mut polar = subject(2000, 6, 10, 12, 0);
        polar.latitude = 78.22;
        polar.longitude = 15.65;
        let chart = Ephemeris::new().cast(&polar).expect("Svalbard");
        assert!((0.0..360.0).contains(&chart.ascendant.longitude));
        assert_eq!(chart.sun_sign(), ZodiacSign::Gemini);
    }
}
