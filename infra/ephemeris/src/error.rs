use std::borrow::Cow;

/// Errors raised while casting a chart.
#[natal_derive::natal_error]
#[derive(Clone, PartialEq, Eq)]
pub enum EphemerisError {
    /// The birth data does not describe a real instant or place on Earth.
    #[error("Invalid birth data{}: {message}", format_context(.context))]
    InvalidSubject { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The instant falls outside the years the series are trusted for.
    #[error("Date out of supported range{}: {message}", format_context(.context))]
    OutOfRange { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The series produced a non-finite value.
    #[error("Ephemeris computation failed{}: {message}", format_context(.context))]
    Computation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl EphemerisError {
    pub(crate) fn invalid(message: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidSubject { message: message.into(), context: None }
    }

    /// Whether the caller supplied the bad value, as opposed to the engine failing.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidSubject { .. } | Self::OutOfRange { .. })
    }
}
