use crate::{DbError, Result as DbErrorResult};

use std::str::FromStr;

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[track_caller]
pub(crate) fn uuid(value: &str, column: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(value)
        .map_err(|e| DbError::invalid_row(format!("Invalid UUID in {column}: {e}")))
}

#[track_caller]
pub(crate) fn timestamp(secs: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| DbError::invalid_row(format!("Invalid timestamp in {column}")))
}

#[track_caller]
pub(crate) fn parsed<T>(value: &str, column: &str) -> DbErrorResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e| DbError::invalid_row(format!("Invalid value in {column}: {e}")))
}
