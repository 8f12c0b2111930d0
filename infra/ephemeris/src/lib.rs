//! # Ephemeris
//!
//! Analytical positions of the Sun, the Moon and the ascendant, reduced to tropical
//! zodiac signs.
//!
//! The series are the classic low-precision ones: the solar equation of the centre,
//! the 60 main longitude terms of the ELP-2000/82 lunar theory, four-term nutation,
//! the IAU 1980 obliquity and Espenak-Meeus ΔT. Errors stay well below a tenth of a
//! degree between the years 1000 and 3000, which is far inside a 30° sign.
//!
//! ## Example
//!
//! ```rust
//! use natal_ephemeris::{BirthSubject, ChartEngine, Ephemeris, SignReading, ZodiacSign};
//!
//! let subject = BirthSubject::builder()
//!     .name("Ada")
//!     .year(1990)
//!     .month(5)
//!     .day(15)
//!     .hour(14)
//!     .minute(30)
//!     .latitude(51.5074)
//!     .longitude(-0.1278)
//!     .build();
//!
//! let chart = Ephemeris::default().cast(&subject)?;
//! assert_eq!(chart.sun_sign(), ZodiacSign::Taurus);
//! # Ok::<(), natal_ephemeris::EphemerisError>(())
//! ```

mod angle;
mod chart;
mod engine;
mod error;
mod subject;
mod zodiac;

pub mod moon;
pub mod nutation;
pub mod sidereal;
pub mod sun;
pub mod time;

pub use crate::angle::normalize_degrees;
pub use crate::chart::{Calculation, CelestialPoint, Chart, SignReading};
pub use crate::engine::{ChartEngine, DEFAULT_MAX_YEAR, DEFAULT_MIN_YEAR, Ephemeris};
pub use crate::error::{EphemerisError, EphemerisErrorExt};
pub use crate::subject::BirthSubject;
pub use crate::zodiac::{SIGN_SPAN, ZodiacSign};
