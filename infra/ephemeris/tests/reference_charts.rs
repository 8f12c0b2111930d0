use natal_ephemeris::{
    BirthSubject, ChartEngine, Ephemeris, EphemerisError, SignReading, ZodiacSign,
};

fn cast(
    year: i32,
    month: i32,
    day: i32,
    hour: i32,
    minute: i32,
    latitude: f64,
    longitude: f64,
) -> Result<natal_ephemeris::Chart, EphemerisError> {
    let subject = BirthSubject::builder()
        .name("Reference")
        .year(year)
        .month(month)
        .day(day)
        .hour(hour)
        .minute(minute)
        .latitude(latitude)
        .longitude(longitude)
        .build();
    Ephemeris::default().cast(&subject)
}

#[test]
fn london_spring_birth_is_taurus() -> Result<(), EphemerisError> {
    let chart = cast(1990, 5, 15, 14, 30, 51.5074, -0.1278)?;
    assert_eq!(chart.sun_sign(), ZodiacSign::Taurus);
    assert!((chart.sun.longitude - 54.6).abs() < 0.1, "sun at {}", chart.sun.longitude);
    Ok(())
}

#[test]
fn j2000_greenwich_signs() -> Result<(), EphemerisError> {
    let chart = cast(2000, 1, 1, 12, 0, 51.4779, 0.0)?;
    assert_eq!(chart.sun_sign(), ZodiacSign::Capricorn);
    assert_eq!(chart.moon_sign(), ZodiacSign::Scorpio);
    assert_eq!(chart.ascendant_sign(), ZodiacSign::Aries);
    assert_eq!(chart.instant.to_rfc3339(), "2000-01-01T12:00:00+00:00");
    Ok(())
}

#[test]
fn equinox_sun_sits_on_the_aries_cusp() -> Result<(), EphemerisError> {
    // March equinox 2000 occurred at 07:35 UT on the 20th
    let before = cast(2000, 3, 20, 6, 0, 0.0, 0.0)?;
    let after = cast(2000, 3, 20, 9, 0, 0.0, 0.0)?;
    assert_eq!(before.sun_sign(), ZodiacSign::Pisces);
    assert_eq!(after.sun_sign(), ZodiacSign::Aries);
    Ok(())
}

#[test]
fn full_moon_opposes_the_sun() -> Result<(), EphemerisError> {
    // Full moon of 2000-01-21 04:40 UT (total lunar eclipse)
    let chart = cast(2000, 1, 21, 4, 40, 0.0, 0.0)?;
    let elongation = natal_ephemeris::normalize_degrees(chart.moon.longitude - chart.sun.longitude);
    assert!((elongation - 180.0).abs() < 0.5, "elongation {elongation}");
    assert_eq!(chart.sun_sign(), ZodiacSign::Aquarius);
    assert_eq!(chart.moon_sign(), ZodiacSign::Leo);
    Ok(())
}

#[test]
fn southern_hemisphere_charts_cast() -> Result<(), EphemerisError> {
    let chart = cast(1985, 11, 3, 22, 15, -33.8688, 151.2093)?;
    assert_eq!(chart.sun_sign(), ZodiacSign::Scorpio);
    assert!((0.0..360.0).contains(&chart.ascendant.longitude));
    Ok(())
}

#[test]
fn leap_day_is_a_valid_date() {
    assert!(cast(2000, 2, 29, 0, 0, 0.0, 0.0).is_ok());
    assert!(matches!(
        cast(1900, 2, 29, 0, 0, 0.0, 0.0),
        Err(EphemerisError::InvalidSubject { .. })
    ));
}

#[test]
fn chart_serializes_to_json() -> Result<(), Box<dyn std::error::Error>> {
    let chart = cast(2000, 1, 1, 12, 0, 51.4779, 0.0)?;
    let json = serde_json::to_value(&chart)?;
    assert_eq!(json["sun"]["sign"], "Capricorn");
    assert_eq!(json["name"], "Reference");
    assert!(json["calculation"]["julian_day"].is_f64());
    Ok(())
}
