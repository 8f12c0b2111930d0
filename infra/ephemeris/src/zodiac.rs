use crate::angle::normalize_degrees;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// Width of one tropical sign in degrees.
pub const SIGN_SPAN: f64 = 30.0;

/// The twelve tropical signs, in ecliptic order from the vernal equinox.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub const ALL: [Self; 12] = [
        Self::Aries,
        Self::Taurus,
        Self::Gemini,
        Self::Cancer,
        Self::Leo,
        Self::Virgo,
        Self::Libra,
        Self::Scorpio,
        Self::Sagittarius,
        Self::Capricorn,
        Self::Aquarius,
        Self::Pisces,
    ];

    /// Sign containing an ecliptic longitude; any real angle is accepted and wrapped.
    #[must_use]
    pub fn from_longitude(longitude: f64) -> Self {
        Self::ALL[sign_index(longitude)]
    }

    /// Zero-based position from Aries.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Ecliptic longitude where the sign begins.
    #[must_use]
    pub fn start_longitude(self) -> f64 {
        f64::from(self as u8) * SIGN_SPAN
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn sign_index(longitude: f64) -> usize {
    ((normalize_degrees(longitude) / SIGN_SPAN).floor() as usize).min(11)
}
