use hyperlink_derive::hyperlink_error;
use std::borrow::Cow;

#[hyperlink_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Unknown file type: {path}")]
    UnknownFileType { path: String },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err: DemoError = "boom".into();
    assert_eq!(err.to_string(), "Internal error: boom");

    let err = DemoError::UnknownFileType { path: "a.txt".to_owned() };
    assert_eq!(err.to_string(), "Unknown file type: a.txt");
}
