//! Command-line argument parsing using clap.
//!
//! Arguments follow the classic cal convention: `[[month] year]`

use chrono::{Datelike, Month, NaiveDate};
use clap::{Parser, ValueHint};
use std::io::IsTerminal;

use crate::error::{CalError, Result};
use crate::formatter::highlight;
use crate::types::{ColorWhen, DateRequest, Decorator, Mode, RenderContext};

#[derive(Parser, Debug)]
#[command(name = "sundial")]
#[command(about = "Displays calendar for specified month or year", long_about = None)]
#[command(version)]
#[command(after_help = HELP_MESSAGE)]
pub struct Args {
    /// Year, or month (1-12) when followed by a year.
    #[arg(
        index = 1,
        value_name = "month|year",
        allow_negative_numbers = true,
        value_hint = ValueHint::Other
    )]
    pub first_arg: Option<String>,

    /// Year, when the first argument is a month.
    #[arg(
        index = 2,
        value_name = "year",
        allow_negative_numbers = true,
        value_hint = ValueHint::Other
    )]
    pub second_arg: Option<String>,

    /// When to highlight today's date (auto, always, never).
    #[arg(
        long,
        value_enum,
        default_value_t = ColorWhen::Auto,
        help_heading = "Output options",
        value_name = "when"
    )]
    pub color: ColorWhen,
}

/// Help message displayed with --help.
const HELP_MESSAGE: &str = "Without any arguments, display the current month.

Examples:
  sundial                 Display current month
  sundial 2026            Display year 2026
  sundial 2 2026          Display February 2026
  sundial --color never   Do not highlight today";

impl Args {
    pub fn parse() -> Self {
        Parser::parse()
    }
}

impl RenderContext {
    pub fn new(args: &Args) -> Self {
        let color = match args.color {
            ColorWhen::Always => true,
            ColorWhen::Never => false,
            ColorWhen::Auto => std::io::stdout().is_terminal(),
        };

        RenderContext {
            today: get_today_date(),
            decorator: color.then_some(highlight as Decorator),
        }
    }
}

/// Today's date in local time.
pub fn get_today_date() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn parse_year(input: &str) -> Result<i32> {
    let year: i32 = input.parse().map_err(|source| CalError::InvalidYear {
        input: input.to_string(),
        source,
    })?;
    // December of the last supported year needs January of the next.
    if !(NaiveDate::MIN.year()..NaiveDate::MAX.year()).contains(&year) {
        return Err(CalError::YearOutOfRange(year));
    }
    Ok(year)
}

fn parse_month(input: &str) -> Result<Month> {
    let number: i32 = input.parse().map_err(|source| CalError::InvalidMonth {
        input: input.to_string(),
        source,
    })?;
    u8::try_from(number)
        .ok()
        .and_then(|n| Month::try_from(n).ok())
        .ok_or(CalError::MonthOutOfRange(number))
}

/// Resolve positional arguments into what to render.
///
/// Argument patterns:
/// - no args: current month
/// - 1 arg: year
/// - 2 args: month year
pub fn get_date_request(args: &Args, today: NaiveDate) -> Result<DateRequest> {
    match (args.first_arg.as_deref(), args.second_arg.as_deref()) {
        (Some(year_arg), None) => Ok(DateRequest {
            mode: Mode::Year,
            year: parse_year(year_arg)?,
            month: None,
            year_label: year_arg.to_string(),
        }),
        (Some(month_arg), Some(year_arg)) => {
            let month = parse_month(month_arg)?;
            let year = parse_year(year_arg)?;
            Ok(DateRequest {
                mode: Mode::Month,
                year,
                month: Some(month),
                year_label: year_arg.to_string(),
            })
        }
        _ => Ok(DateRequest {
            mode: Mode::CurrentMonth,
            year: today.year(),
            month: Month::try_from(today.month() as u8).ok(),
            year_label: today.year().to_string(),
        }),
    }
}
