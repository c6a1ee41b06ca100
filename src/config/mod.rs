pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::{parse_day, Day};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use chrono::{Datelike, Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use toml_config::{TomlConfig, DEFAULT_CONFIG_FILE};

pub const DEFAULT_BASE_URL: &str = "https://adventofcode.com";
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
/// 快取路徑不含年份，所以預設年份固定，不隨日期改變
pub const DEFAULT_YEAR: i32 = 2024;

#[derive(Debug, Parser)]
#[command(name = "aoc-fetch", version)]
#[command(about = "Download and cache Advent of Code puzzle inputs")]
pub struct Cli {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Path to a TOML config file (defaults to aoc.toml at the repository root)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

// TODO: `submit` once answer submission exists
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Download the input of a day into data/dayNN/input.txt
    #[command(visible_alias = "d")]
    Download(DownloadArgs),
}

#[derive(Debug, Clone, Args)]
pub struct DownloadArgs {
    /// Day of the Advent of Code to download
    #[arg(value_parser = parse_day_arg, allow_negative_numbers = true)]
    pub day: Day,

    /// Event year, overrides the config file
    #[arg(short, long)]
    pub year: Option<i32>,
}

/// clap 的 value parser：先解析整數，再檢查 1..=25
fn parse_day_arg(value: &str) -> std::result::Result<Day, String> {
    let number: i64 = value
        .trim()
        .parse()
        .map_err(|e| format!("'{}' is not an integer: {}", value, e))?;
    parse_day(number).map_err(|e| e.to_string())
}

/// 最近一屆已開始的年份：12 月算今年，否則算去年
pub fn latest_event_year(today: NaiveDate) -> i32 {
    if today.month() == 12 {
        today.year()
    } else {
        today.year() - 1
    }
}

/// Settings after layering defaults, the TOML file and CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub base_url: String,
    pub year: i32,
    pub data_dir: String,
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            year: DEFAULT_YEAR,
            data_dir: DEFAULT_DATA_DIR.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl AppConfig {
    pub fn merge_file(mut self, file: &TomlConfig) -> Self {
        if let Some(base_url) = file.base_url() {
            self.base_url = base_url.to_string();
        }
        if let Some(year) = file.year() {
            self.year = year;
        }
        if let Some(data_dir) = file.data_dir() {
            self.data_dir = data_dir.to_string();
        }
        if let Some(user_agent) = file.user_agent() {
            self.user_agent = user_agent.to_string();
        }
        self
    }

    pub fn with_year(mut self, year: Option<i32>) -> Self {
        if let Some(year) = year {
            self.year = year;
        }
        self
    }

    /// 依序載入：明確指定的設定檔 > `<repo-root>/aoc.toml` > 預設值
    pub fn load(explicit: Option<&Path>, repo_root: &Path) -> Result<Self> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let candidate = repo_root.join(DEFAULT_CONFIG_FILE);
                candidate.is_file().then_some(candidate)
            }
        };

        let config = Self::default();
        match path {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                let file = TomlConfig::from_file(&path)?;
                file.validate()?;
                Ok(config.merge_file(&file))
            }
            None => Ok(config),
        }
    }

    /// `<repo-root>/<data_dir>`
    pub fn data_root(&self, repo_root: &Path) -> PathBuf {
        repo_root.join(&self.data_dir)
    }

    /// 年份上限取決於 `today`：還沒開始的活動不接受
    pub fn validate_on(&self, today: NaiveDate) -> Result<()> {
        validation::validate_base_url("client.base_url", &self.base_url)?;
        validation::validate_event_year("client.year", self.year, latest_event_year(today))?;
        validation::validate_data_dir("storage.data_dir", &self.data_dir)?;
        validation::validate_user_agent("client.user_agent", &self.user_agent)?;
        Ok(())
    }
}

impl ConfigProvider for AppConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn year(&self) -> i32 {
        self.year
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_on(Local::now().date_naive())
    }
}
