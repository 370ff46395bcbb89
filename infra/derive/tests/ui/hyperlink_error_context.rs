use hyperlink_derive::hyperlink_error;
use std::borrow::Cow;

#[hyperlink_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), DemoError> {
    let failed: Result<(), std::io::Error> =
        Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
    failed.context("reading index.html")
}

fn convert() -> Result<(), DemoError> {
    let failed: Result<(), std::io::Error> =
        Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
    failed?;
    Ok(())
}

fn main() {
    let err = read().err().map(|e| e.to_string());
    assert_eq!(err.as_deref(), Some("IO error (reading index.html): missing"));

    let err = convert().context("late context").err().map(|e| e.to_string());
    assert_eq!(err.as_deref(), Some("IO error (late context): missing"));
}
