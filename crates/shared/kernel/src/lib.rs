//! Kernel utilities shared across the hyperlink crates.
//! Keep this crate lightweight; it re-exports the domain types and layered settings loading.
//!
//! ## Settings loading
//! ```rust,no_run
//! use hyperlink_kernel::config::load_config;
//! use hyperlink_kernel::domain::settings::Settings;
//!
//! let settings: Settings = load_config(None::<&str>).unwrap_or_default();
//! ```
pub mod config;

pub use hyperlink_domain as domain;
