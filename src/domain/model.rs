use crate::utils::error::{AocError, Result};
use std::fmt;

/// 讀取 session cookie 的環境變數
pub const SESSION_ENV: &str = "AOC_SESSION";

/// Advent of Code 的題目日 (1..=25)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(u8);

impl Day {
    pub const FIRST: u8 = 1;
    pub const LAST: u8 = 25;

    pub fn get(self) -> u8 {
        self.0
    }

    /// 快取目錄名稱，例如 `day05`
    pub fn dir_name(self) -> String {
        format!("day{:02}", self.0)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validates an integer as a puzzle day.
///
/// Any integer type is accepted so the error can report the type the caller
/// actually passed, e.g. `Invalid day for Advent of Code: 26 (type: i64)`.
pub fn parse_day<T>(value: T) -> Result<Day>
where
    T: Copy + fmt::Display + TryInto<u8>,
{
    match value.try_into() {
        Ok(day) if (Day::FIRST..=Day::LAST).contains(&day) => Ok(Day(day)),
        _ => Err(AocError::InvalidDay {
            value: value.to_string(),
            type_name: std::any::type_name::<T>(),
        }),
    }
}

impl TryFrom<i64> for Day {
    type Error = AocError;

    fn try_from(value: i64) -> Result<Self> {
        parse_day(value)
    }
}

/// adventofcode.com 的 session cookie 值
#[derive(Clone, PartialEq, Eq)]
pub struct Session(String);

impl Session {
    /// 從 `AOC_SESSION` 讀取
    pub fn from_env() -> Result<Self> {
        Self::from_value(std::env::var(SESSION_ENV).ok())
    }

    pub fn from_value(value: Option<String>) -> Result<Self> {
        match value {
            Some(token) if !token.trim().is_empty() => Ok(Self(token.trim().to_string())),
            _ => Err(AocError::MissingSession),
        }
    }

    pub fn cookie(&self) -> String {
        format!("session={}", self.0)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Session(<redacted>)")
    }
}
