use crate::domain::model::Day;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// 以 base 目錄為根的檔案存取，路徑皆為相對路徑
pub trait Storage: Send + Sync {
    fn full_path(&self, path: &str) -> PathBuf;
    fn exists(&self, path: &str) -> impl std::future::Future<Output = bool> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn year(&self) -> i32;
    fn user_agent(&self) -> &str;
}

/// Where puzzle input comes from when it is not cached yet.
#[async_trait]
pub trait InputSource: Send + Sync {
    async fn fetch_input(&self, day: Day) -> Result<Vec<u8>>;
}
