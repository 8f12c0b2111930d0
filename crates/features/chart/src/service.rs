//! Request parsing and delegation to the chart engine.

use crate::domain::{BirthChartRequest, PositionsResult, SignResult};
use crate::error::ChartError;
use natal_ephemeris::{BirthSubject, Chart, ChartEngine};
use tracing::{debug, warn};

/// Splits `text` on `separator` into exactly `N` integers.
///
/// Parts are trimmed and may carry a `+`/`-` sign.
fn integer_parts<const N: usize>(text: &str, separator: char) -> Option<[i32; N]> {
    let mut parts = [0; N];
    let mut pieces = text.split(separator);
    for slot in &mut parts {
        *slot = pieces.next()?.trim().parse().ok()?;
    }
    pieces.next().is_none().then_some(parts)
}

/// Parses `YYYY-MM-DD` into `(year, month, day)` without checking the calendar.
///
/// # Errors
/// Returns [`ChartError::InvalidDate`] unless the text is three integers joined by `-`.
pub fn parse_birth_date(text: &str) -> Result<(i32, i32, i32), ChartError> {
    integer_parts::<3>(text, '-').map(|[y, m, d]| (y, m, d)).ok_or_else(|| {
        ChartError::InvalidDate {
            message: format!("expected YYYY-MM-DD, got '{text}'").into(),
            context: None,
        }
    })
}

/// Parses `HH:MM` into `(hour, minute)` without range checks.
///
/// # Errors
/// Returns [`ChartError::InvalidTime`] unless the text is two integers joined by `:`.
pub fn parse_birth_time(text: &str) -> Result<(i32, i32), ChartError> {
    integer_parts::<2>(text, ':').map(|[h, m]| (h, m)).ok_or_else(|| ChartError::InvalidTime {
        message: format!("expected HH:MM, got '{text}'").into(),
        context: None,
    })
}

/// Builds the engine input from a request.
///
/// # Errors
/// Returns [`ChartError::InvalidDate`] or [`ChartError::InvalidTime`] for malformed strings.
pub fn subject_from_request(request: &BirthChartRequest) -> Result<BirthSubject, ChartError> {
    let (year, month, day) = parse_birth_date(&request.birth_date)?;
    let (hour, minute) = parse_birth_time(&request.birth_time)?;

    Ok(BirthSubject::builder()
        .name(request.name.clone())
        .year(year)
        .month(month)
        .day(day)
        .hour(hour)
        .minute(minute)
        .latitude(request.latitude)
        .longitude(request.longitude)
        .timezone(request.timezone.clone())
        .build())
}

fn cast<E>(engine: &E, request: &BirthChartRequest) -> Result<E::Chart, ChartError>
where
    E: ChartEngine + ?Sized,
{
    let result = subject_from_request(request)
        .and_then(|subject| engine.cast(&subject).map_err(ChartError::from));

    if let Err(err) = &result {
        warn!(name = %request.name, error = %err, "Chart calculation failed");
    }
    result
}

/// Computes the sun, moon and ascendant signs for a request.
///
/// # Errors
/// Returns a parse error for malformed date or time strings and
/// [`ChartError::Engine`] for anything the engine rejects.
pub fn calculate<E>(engine: &E, request: &BirthChartRequest) -> Result<SignResult, ChartError>
where
    E: ChartEngine + ?Sized,
{
    let chart = cast(engine, request)?;
    let result = SignResult::from_reading(&chart);

    debug!(
        name = %request.name,
        sun = %result.sun_sign,
        moon = %result.moon_sign,
        ascendant = %result.ascendant_sign,
        "Signs calculated"
    );
    Ok(result)
}

/// Computes the detailed placements behind [`calculate`].
///
/// # Errors
/// Same as [`calculate`].
pub fn positions<E>(engine: &E, request: &BirthChartRequest) -> Result<PositionsResult, ChartError>
where
    E: ChartEngine<Chart = Chart> + ?Sized,
{
    let chart = cast(engine, request)?;
    debug!(name = %chart.name, instant = %chart.instant, "Positions calculated");

    Ok(PositionsResult {
        name: chart.name,
        sun: (&chart.sun).into(),
        moon: (&chart.moon).into(),
        ascendant: (&chart.ascendant).into(),
        calculation: (&chart.calculation).into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use natal_ephemeris::{EphemerisError, Ephemeris, SignReading, ZodiacSign};
    use std::sync::Mutex;

    fn request(date: &str, time: &str) -> BirthChartRequest {
        BirthChartRequest {
            name: "Ada".to_owned(),
            birth_date: date.to_owned(),
            birth_time: time.to_owned(),
            latitude: 51.5074,
            longitude: -0.1278,
            timezone: None,
        }
    }

    #[derive(Debug)]
    struct FixedChart;

    impl SignReading for FixedChart {
        fn sun_sign(&self) -> ZodiacSign {
            ZodiacSign::Leo
        }

        fn moon_sign(&self) -> ZodiacSign {
            ZodiacSign::Pisces
        }

        fn ascendant_sign(&self) -> ZodiacSign {
            ZodiacSign::Libra
        }
    }

    /// Records what it was asked to cast.
    #[derive(Debug, Default)]
    struct RecordingEngine {
        seen: Mutex<Vec<BirthSubject>>,
    }

    impl ChartEngine for RecordingEngine {
        type Chart = FixedChart;

        fn cast(&self, subject: &BirthSubject) -> Result<FixedChart, EphemerisError> {
            self.seen.lock().expect("lock").push(subject.clone());
            Ok(FixedChart)
        }
    }

    #[derive(Debug)]
    struct BrokenEngine;

    impl ChartEngine for BrokenEngine {
        type Chart = FixedChart;

        fn cast(&self, _subject: &BirthSubject) -> Result<FixedChart, EphemerisError> {
            Err(EphemerisError::Computation { message: "ephemeris offline".into(), context: None })
        }
    }

    #[test]
    fn dates_need_three_integer_parts() {
        assert_eq!(parse_birth_date("1990-05-15").expect("date"), (1990, 5, 15));
        assert_eq!(parse_birth_date(" 1990 - 05 - 15 ").expect("date"), (1990, 5, 15));
        assert_eq!(parse_birth_date("+1990-05-15").expect("date"), (1990, 5, 15));
        for bad in ["1990/05/15", "May 15 1990", "not-a-date", "1990-05", "1990-05-15-01", "", "-1990-05-15"] {
            assert!(
                matches!(parse_birth_date(bad), Err(ChartError::InvalidDate { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn times_need_two_integer_parts() {
        assert_eq!(parse_birth_time("14:30").expect("time"), (14, 30));
        assert_eq!(parse_birth_time("7:5").expect("time"), (7, 5));
        for bad in ["14", "14:30:00", "2pm", ":", "14:xx"] {
            assert!(
                matches!(parse_birth_time(bad), Err(ChartError::InvalidTime { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn out_of_range_values_reach_the_engine() {
        // Range checks are the engine's job; parsing keeps the raw integers
        let engine = RecordingEngine::default();
        calculate(&engine, &request("1990-02-30", "24:61")).expect("fake engine accepts");

        let seen = engine.seen.lock().expect("lock");
        let subject = seen.first().expect("one cast");
        assert_eq!((subject.month, subject.day, subject.hour, subject.minute), (2, 30, 24, 61));
        assert_eq!(subject.name, "Ada");
    }

    #[test]
    fn timezone_is_forwarded_to_the_engine() {
        let engine = RecordingEngine::default();
        let mut req = request("1990-05-15", "14:30");
        req.timezone = Some("America/New_York".to_owned());
        calculate(&engine, &req).expect("fake engine accepts");

        let seen = engine.seen.lock().expect("lock");
        assert_eq!(seen.first().and_then(|s| s.timezone.as_deref()), Some("America/New_York"));
    }

    #[test]
    fn zoned_requests_match_their_utc_instant() {
        let engine = Ephemeris::default();
        let mut zoned = request("1990-05-15", "14:30");
        zoned.timezone = Some("America/New_York".to_owned());
        let utc = request("1990-05-15", "18:30");
        assert_eq!(calculate(&engine, &zoned).expect("zoned"), calculate(&engine, &utc).expect("utc"));
    }

    #[test]
    fn signs_come_from_the_reading() {
        let result = calculate(&RecordingEngine::default(), &request("1990-05-15", "14:30"))
            .expect("result");
        assert_eq!(result.sun_sign, "Leo");
        assert_eq!(result.moon_sign, "Pisces");
        assert_eq!(result.ascendant_sign, "Libra");
    }

    #[test]
    fn parse_errors_skip_the_engine() {
        let engine = RecordingEngine::default();
        let err = calculate(&engine, &request("1990/05/15", "14:30")).expect_err("bad date");
        assert!(matches!(err, ChartError::InvalidDate { .. }));
        assert!(engine.seen.lock().expect("lock").is_empty());
    }

    #[test]
    fn engine_failures_are_wrapped() {
        let err = calculate(&BrokenEngine, &request("1990-05-15", "14:30")).expect_err("broken");
        assert!(matches!(err, ChartError::Engine { .. }));
        assert!(err.to_string().contains("ephemeris offline"), "{err}");
        assert!(!err.is_client_fault());
    }

    #[test]
    fn ada_is_a_taurus() {
        let result = calculate(&Ephemeris::default(), &request("1990-05-15", "14:30"))
            .expect("result");
        assert_eq!(result.sun_sign, "Taurus");
    }

    #[test]
    fn identical_requests_agree() {
        let engine = Ephemeris::default();
        let req = request("1985-11-03", "22:15");
        assert_eq!(calculate(&engine, &req).expect("a"), calculate(&engine, &req).expect("b"));
    }

    #[test]
    fn positions_report_points_in_their_signs() {
        let positions = positions(&Ephemeris::default(), &request("2000-01-01", "12:00"))
            .expect("positions");
        assert_eq!(positions.sun.sign, "Capricorn");
        assert!(positions.sun.degrees < 30 && positions.sun.minutes < 60);
        assert!((positions.calculation.julian_day - 2_451_545.0).abs() < 1e-9);
        assert_eq!(positions.name, "Ada");
    }

    #[test]
    fn engine_rejections_keep_their_kind() {
        let err = calculate(&Ephemeris::default(), &request("1990-02-30", "12:00"))
            .expect_err("Feb 30");
        assert!(matches!(err, ChartError::Engine { source: EphemerisError::InvalidSubject { .. }, .. }));
        assert!(err.is_client_fault());
    }
}
