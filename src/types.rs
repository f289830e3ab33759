//! Type definitions and constants for calendar rendering.

use chrono::{Month, NaiveDate};
use clap::ValueEnum;

/// Which kind of calendar a single invocation prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No positional arguments: the month containing today.
    CurrentMonth,
    /// `month year`.
    Month,
    /// `year`: all twelve months.
    Year,
}

/// Resolved positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRequest {
    pub mode: Mode,
    pub year: i32,
    /// Set for [`Mode::Month`] and [`Mode::CurrentMonth`].
    pub month: Option<Month>,
    /// Year heading, echoed exactly as the user typed it.
    pub year_label: String,
}

/// When to decorate today's cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    /// Only when standard output is a terminal.
    Auto,
    Always,
    Never,
}

/// Turns a two-character day label into its highlighted form.
pub type Decorator = fn(&str) -> String;

/// Rendering options shared by every month of one invocation.
#[derive(Clone, Copy, Debug)]
pub struct RenderContext {
    /// Today's date for highlighting.
    pub today: NaiveDate,
    /// Applied to today's label; `None` leaves it plain.
    pub decorator: Option<Decorator>,
}

/// A single cell of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Padding before day 1 or after the last day.
    Blank,
    Day(u32),
    /// Same as `Day`, but it is today.
    Today(u32),
}

/// Weekday abbreviations, Sunday first.
pub const WEEKDAY_NAMES: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Right-justified day labels; index 0 is day 1.
pub static DAY_LABELS: [&str; 31] = [
    " 1", " 2", " 3", " 4", " 5", " 6", " 7", " 8", " 9", "10", "11", "12", "13", "14", "15",
    "16", "17", "18", "19", "20", "21", "22", "23", "24", "25", "26", "27", "28", "29", "30",
    "31",
];

pub const BLANK_CELL: &str = "  ";

// Layout constants
pub const CELLS_PER_MONTH: usize = 42; // 6 weeks × 7 days
pub const DAYS_PER_WEEK: usize = 7;
pub const WEEKS_PER_MONTH: usize = 6;
pub const MONTH_WIDTH: usize = 20; // 7 × 2 + 6 separators
pub const YEAR_WIDTH: usize = 64; // 3 months + 2 gutters
pub const MONTHS_PER_ROW: usize = 3;
pub const GUTTER: &str = "  ";

// ANSI codes for today: bold, black on bright white
pub const COLOR_HIGHLIGHT: &str = "\x1b[1;30;107m";
pub const COLOR_RESET: &str = "\x1b[0m";
