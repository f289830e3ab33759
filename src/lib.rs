//! Fixed-width terminal calendar.
//!
//! Features:
//! - Current month, any month, or a whole year in a 4×3 grid
//! - Sunday-first weeks on the proleptic Gregorian calendar
//! - Optional highlighting of today's date

pub mod args;
pub mod calendar;
pub mod error;
pub mod formatter;
pub mod types;
