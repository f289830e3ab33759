//! Calendar formatting: single month, three-month sections and the year layout.

use chrono::Month;

use crate::calendar::MonthView;
use crate::error::Result;
use crate::types::{
    COLOR_HIGHLIGHT, COLOR_RESET, Cell, DateRequest, GUTTER, MONTH_WIDTH, MONTHS_PER_ROW, Mode,
    RenderContext, WEEKDAY_NAMES, WEEKS_PER_MONTH, YEAR_WIDTH,
};

/// Center text within `width` characters, truncating text that does not fit.
pub fn center_text(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.chars().take(width).collect();
    }
    let left_padding = (width - len) / 2;
    let right_padding = width - len - left_padding;
    format!(
        "{}{}{}",
        " ".repeat(left_padding),
        text,
        " ".repeat(right_padding)
    )
}

/// Wrap a day label in bold black on bright white.
pub fn highlight(label: &str) -> String {
    format!("{}{}{}", COLOR_HIGHLIGHT, label, COLOR_RESET)
}

/// Format month header, with or without the year.
pub fn format_month_header(month: &MonthView, show_year: bool) -> String {
    let header = if show_year {
        format!("{} {}", month.name(), month.year())
    } else {
        month.name().to_string()
    };
    center_text(&header, MONTH_WIDTH)
}

pub fn format_weekday_header() -> String {
    WEEKDAY_NAMES.join(" ")
}

fn format_cell(ctx: &RenderContext, cell: Cell) -> String {
    match (cell, ctx.decorator) {
        (Cell::Today(_), Some(decorate)) => decorate(cell.label()),
        _ => cell.label().to_string(),
    }
}

fn format_week(ctx: &RenderContext, week: &[Cell]) -> String {
    week.iter()
        .map(|&cell| format_cell(ctx, cell))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Week rows of a month, always six of them.
pub fn format_weeks(ctx: &RenderContext, month: &MonthView) -> Vec<String> {
    month
        .grid(ctx.today)
        .rows()
        .map(|week| format_week(ctx, week))
        .collect()
}

/// Format a single month: title, weekday header and six week rows.
pub fn format_month(ctx: &RenderContext, month: &MonthView) -> Vec<String> {
    let mut lines = Vec::with_capacity(2 + WEEKS_PER_MONTH);
    lines.push(format_month_header(month, true));
    lines.push(format_weekday_header());
    lines.extend(format_weeks(ctx, month));
    lines
}

/// Format months side by side, separated by a two-space gutter.
pub fn format_section(ctx: &RenderContext, months: &[MonthView]) -> Vec<String> {
    let headers: Vec<String> = months
        .iter()
        .map(|m| format_month_header(m, false))
        .collect();
    let weekdays = vec![format_weekday_header(); months.len()];
    let weeks: Vec<Vec<String>> = months.iter().map(|m| format_weeks(ctx, m)).collect();

    let mut lines = Vec::with_capacity(2 + WEEKS_PER_MONTH);
    lines.push(headers.join(GUTTER));
    lines.push(weekdays.join(GUTTER));

    for row in 0..WEEKS_PER_MONTH {
        let line: Vec<&str> = weeks.iter().map(|w| w[row].as_str()).collect();
        lines.push(line.join(GUTTER));
    }

    lines
}

/// Format all 12 months of `year` under the `label` heading.
pub fn format_year(ctx: &RenderContext, year: i32, label: &str) -> Result<Vec<String>> {
    let months = (1..=12u8)
        .filter_map(|n| Month::try_from(n).ok())
        .map(|month| MonthView::new(year, month))
        .collect::<Result<Vec<_>>>()?;

    let mut lines = vec![center_text(label, YEAR_WIDTH)];
    for (i, section) in months.chunks(MONTHS_PER_ROW).enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.extend(format_section(ctx, section));
    }

    Ok(lines)
}

/// Render a resolved request into one newline-terminated block.
pub fn render(ctx: &RenderContext, request: &DateRequest) -> Result<String> {
    let lines = match (request.mode, request.month) {
        (Mode::Month | Mode::CurrentMonth, Some(month)) => {
            format_month(ctx, &MonthView::new(request.year, month)?)
        }
        _ => format_year(ctx, request.year, &request.year_label)?,
    };

    let mut block = String::new();
    for line in lines {
        block.push_str(&line);
        block.push('\n');
    }
    Ok(block)
}
