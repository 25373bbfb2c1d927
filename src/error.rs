use thiserror::Error;

use crate::time::{FormatError, InvalidWeekDay};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    WeekDay(#[from] InvalidWeekDay),
}
