use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Raw birth data handed to a [`ChartEngine`](crate::ChartEngine).
///
/// Fields are kept exactly as parsed; range and calendar checks belong to the engine.
///
/// ```rust
/// use natal_ephemeris::BirthSubject;
///
/// let subject = BirthSubject::builder()
///     .name("Ada")
///     .year(1990)
///     .month(5)
///     .day(15)
///     .hour(14)
///     .minute(30)
///     .latitude(51.5074)
///     .longitude(-0.1278)
///     .timezone(Some("Europe/London".to_owned()))
///     .build();
/// assert_eq!(subject.name, "Ada");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
pub struct BirthSubject {
    #[builder(setter(into))]
    pub name: String,
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    /// Degrees, north positive.
    pub latitude: f64,
    /// Degrees, east positive.
    pub longitude: f64,
    /// IANA zone the clock time was read in; `None` means UTC.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}
