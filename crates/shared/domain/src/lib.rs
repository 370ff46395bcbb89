//! # Domain Models
//!
//! Plain settings and constants shared by every hyperlink crate.
//! Keep it lean: no I/O or heavy logic, just data and simple helpers.

pub mod constants;
pub mod settings;
