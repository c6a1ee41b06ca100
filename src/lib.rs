pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::LocalStorage, AppConfig, Cli, Command, DownloadArgs};
pub use crate::core::{client::AocClient, fetcher::InputFetcher, repo::repo_root};
pub use crate::domain::model::{parse_day, Day, Session};
pub use crate::utils::error::{AocError, Result};
