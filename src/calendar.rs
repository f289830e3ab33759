//! Month model: day counts, weekday offsets and the 6×7 day grid.

use chrono::{Datelike, Month, NaiveDate};

use crate::error::{CalError, Result};
use crate::types::{BLANK_CELL, CELLS_PER_MONTH, Cell, DAY_LABELS, DAYS_PER_WEEK};

/// Number of days in a month, taken as "day zero" of the following month.
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    let out_of_range = CalError::DateOutOfRange { year, month };
    if !(1..=12).contains(&month) {
        return Err(out_of_range);
    }

    let next = if month == 12 {
        year.checked_add(1).map(|y| (y, 1))
    } else {
        Some((year, month + 1))
    };

    next.and_then(|(y, m)| NaiveDate::from_ymd_opt(y, m, 1))
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .ok_or(out_of_range)
}

/// Weekday of the 1st, Sunday = 0 … Saturday = 6.
pub fn first_weekday(year: i32, month: u32) -> Result<u32> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.weekday().num_days_from_sunday())
        .ok_or(CalError::DateOutOfRange { year, month })
}

/// One calendar month to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthView {
    year: i32,
    month: Month,
    days: u32,
    offset: u32,
}

impl MonthView {
    pub fn new(year: i32, month: Month) -> Result<Self> {
        let number = month.number_from_month();
        Ok(MonthView {
            year,
            month,
            days: days_in_month(year, number)?,
            offset: first_weekday(year, number)?,
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> Month {
        self.month
    }

    /// English month name, e.g. "February".
    pub fn name(&self) -> &'static str {
        self.month.name()
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    /// Column of day 1 in a Sunday-first week.
    pub fn first_weekday(&self) -> u32 {
        self.offset
    }

    /// Whether `date` falls inside this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month.number_from_month()
    }

    /// Lay the month out on a 6×7 grid, marking `today` if it is in this month.
    pub fn grid(&self, today: NaiveDate) -> DayGrid {
        let highlighted = self.contains(today).then(|| today.day());

        let mut cells = Vec::with_capacity(CELLS_PER_MONTH);
        cells.extend((0..self.offset).map(|_| Cell::Blank));
        cells.extend((1..=self.days).map(|day| {
            if highlighted == Some(day) {
                Cell::Today(day)
            } else {
                Cell::Day(day)
            }
        }));
        cells.resize(CELLS_PER_MONTH, Cell::Blank);

        DayGrid { cells }
    }
}

impl Cell {
    /// Two-character label: right-justified day number or blanks.
    pub fn label(self) -> &'static str {
        match self {
            Cell::Blank => BLANK_CELL,
            Cell::Day(day) | Cell::Today(day) => day
                .checked_sub(1)
                .and_then(|idx| DAY_LABELS.get(idx as usize))
                .copied()
                .unwrap_or(BLANK_CELL),
        }
    }

    pub fn is_blank(self) -> bool {
        self == Cell::Blank
    }
}

/// Six weeks of seven cells, row-major, Sunday first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGrid {
    cells: Vec<Cell>,
}

impl DayGrid {
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    /// Week `index` (0-based); empty if out of range.
    pub fn row(&self, index: usize) -> &[Cell] {
        self.rows().nth(index).unwrap_or(&[])
    }
}

