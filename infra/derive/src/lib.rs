#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros used across the hyperlink workspace.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! hyperlink-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro that turns an enum into the crate's error type.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `<Name>Ext` trait with `.context(...)` for
///   `Result<T, Name>` and for `Result<T, Source>` of every wrapped source error.
/// * **Conversions**: Implements `From<Source>` for variants with a `source` field, so `?` works
///   on upstream errors.
/// * **Internal Fallback**: `From<&'static str>` and `From<String>` when an `Internal` variant
///   with a `message` field exists.
///
/// # Requirements
///
/// 1. Only enums are accepted.
/// 2. Every variant has named fields.
/// 3. A variant carrying a `source` (or a field marked `#[source]`/`#[from]`) must also carry
///    `context: Option<Cow<'static, str>>`.
///
/// A private `format_context` helper is emitted next to the enum for use in `#[error(...)]`.
///
/// # Example
///
/// ```rust,ignore
/// use hyperlink_derive::hyperlink_error;
/// use std::borrow::Cow;
///
/// #[hyperlink_error]
/// pub enum LinkError {
///     #[error("I/O error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal link error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &std::path::Path) -> Result<String, LinkError> {
///     std::fs::read_to_string(path).context(format!("Failed to read {}", path.display()))
/// }
/// ```
#[proc_macro_attribute]
pub fn hyperlink_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
