use natal_ephemeris::{BirthSubject, ChartEngine, Ephemeris, SignReading, ZodiacSign};
use proptest::prelude::*;

fn subject() -> impl Strategy<Value = BirthSubject> {
    (1000i32..=3000, 1i32..=12, 1i32..=28, 0i32..=23, 0i32..=59, -90.0f64..=90.0, -180.0f64..=180.0)
        .prop_map(|(year, month, day, hour, minute, latitude, longitude)| {
            BirthSubject::builder()
                .name("Prop")
                .year(year)
                .month(month)
                .day(day)
                .hour(hour)
                .minute(minute)
                .latitude(latitude)
                .longitude(longitude)
                .build()
        })
}

proptest! {
    #[test]
    fn every_valid_subject_casts(subject in subject()) {
        let chart = Ephemeris::default().cast(&subject).expect("valid subject");
        for point in [chart.sun, chart.moon, chart.ascendant] {
            prop_assert!((0.0..360.0).contains(&point.longitude));
            prop_assert_eq!(point.sign, ZodiacSign::from_longitude(point.longitude));
            prop_assert!(point.degrees < 30);
            prop_assert!(point.minutes < 60);
        }
    }

    #[test]
    fn casting_is_deterministic(subject in subject()) {
        let engine = Ephemeris::default();
        let first = engine.cast(&subject).expect("valid subject");
        let second = engine.cast(&subject).expect("valid subject");
        prop_assert_eq!(first.sun_sign(), second.sun_sign());
        prop_assert_eq!(first.moon_sign(), second.moon_sign());
        prop_assert_eq!(first.ascendant_sign(), second.ascendant_sign());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn sign_mapping_wraps_full_turns(longitude in 0.0f64..360.0, turns in -5i32..5) {
        let shifted = longitude + f64::from(turns) * 360.0;
        let expected = ZodiacSign::from_longitude(longitude);
        let actual = ZodiacSign::from_longitude(shifted);
        // Adding turns can nudge values sitting on a cusp by one ulp
        let cusp = (longitude % 30.0).min(30.0 - longitude % 30.0) < 1e-9;
        prop_assert!(cusp || actual == expected);
    }

    #[test]
    fn out_of_range_hours_are_rejected(hour in 24i32..1000) {
        let subject = BirthSubject::builder()
            .name("Prop")
            .year(2000)
            .month(1)
            .day(1)
            .hour(hour)
            .minute(0)
            .latitude(0.0)
            .longitude(0.0)
            .build();
        prop_assert!(Ephemeris::default().cast(&subject).is_err());
    }
}
