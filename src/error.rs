use std::num::ParseIntError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalError {
    #[error("bad year {input:?}: {source}")]
    InvalidYear {
        input: String,
        source: ParseIntError,
    },

    #[error("bad month {input:?}: {source}")]
    InvalidMonth {
        input: String,
        source: ParseIntError,
    },

    #[error("bad month: {0} (must be 1-12)")]
    MonthOutOfRange(i32),

    #[error("bad year: {0} (out of supported range)")]
    YearOutOfRange(i32),

    #[error("date out of range: {year}-{month:02}")]
    DateOutOfRange { year: i32, month: u32 },

    #[error("write error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CalError>;
