use crate::utils::error::{AocError, Result};
use std::path::Path;
use url::Url;

/// 第一屆 Advent of Code
pub const FIRST_EVENT_YEAR: i32 = 2015;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: impl ToString, reason: impl Into<String>) -> AocError {
    AocError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// 輸入網址的前綴，必須是 http(s) 且不能帶 query 或 fragment
pub fn validate_base_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.trim().is_empty() {
        return Err(invalid(field_name, url_str, "Base URL cannot be empty"));
    }

    let url = Url::parse(url_str).map_err(|e| {
        invalid(
            field_name,
            url_str,
            format!("Base URL is not a valid URL: {}", e),
        )
    })?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(invalid(
                field_name,
                url_str,
                format!("Base URL must use http or https, got {}", scheme),
            ))
        }
    }

    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid(
            field_name,
            url_str,
            "Base URL cannot carry a query or fragment, /{year}/day/{day}/input is appended to it",
        ));
    }

    Ok(())
}

/// `latest` 是最近一屆已經開始的活動年份
pub fn validate_event_year(field_name: &str, year: i32, latest: i32) -> Result<()> {
    if year < FIRST_EVENT_YEAR {
        return Err(invalid(
            field_name,
            year,
            format!("Advent of Code started in {}", FIRST_EVENT_YEAR),
        ));
    }
    if year > latest {
        return Err(invalid(
            field_name,
            year,
            format!(
                "The {} event has not started yet, the latest one is {}",
                year, latest
            ),
        ));
    }
    Ok(())
}

/// 資料目錄相對於 repo 根目錄，絕對路徑會讓快取跑到 repo 外面
pub fn validate_data_dir(field_name: &str, data_dir: &str) -> Result<()> {
    if data_dir.trim().is_empty() {
        return Err(invalid(field_name, data_dir, "Data directory cannot be empty"));
    }

    if data_dir.contains('\0') {
        return Err(invalid(
            field_name,
            data_dir,
            "Data directory contains null bytes",
        ));
    }

    if Path::new(data_dir).is_absolute() {
        return Err(invalid(
            field_name,
            data_dir,
            "Data directory must be relative to the repository root",
        ));
    }

    Ok(())
}

pub fn validate_user_agent(field_name: &str, user_agent: &str) -> Result<()> {
    if user_agent.trim().is_empty() {
        return Err(invalid(
            field_name,
            user_agent,
            "User agent cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}
