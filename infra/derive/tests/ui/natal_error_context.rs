use natal_derive::natal_error;
use std::borrow::Cow;

#[natal_error]
pub enum ParseError {
    #[error("Bad number{}: {source}", format_context(.context))]
    Number { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<i32, ParseError> {
    let value = raw.parse::<i32>().context("parsing the year")?;
    if value < 0 {
        return Err("negative years are not supported".into());
    }
    Ok(value)
}

fn main() {
    let err = parse("abc").unwrap_err();
    assert_eq!(err.to_string(), "Bad number (parsing the year): invalid digit found in string");

    let err = parse("-5").unwrap_err();
    assert!(matches!(err, ParseError::Internal { .. }));

    let err: Result<(), ParseError> = Err(String::from("boom").into());
    let err = err.context("outer").unwrap_err();
    assert_eq!(err.to_string(), "Internal error (outer): boom");
}
