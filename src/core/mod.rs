pub mod client;
pub mod fetcher;
pub mod repo;

pub use crate::domain::model::{Day, Session};
pub use crate::domain::ports::{ConfigProvider, InputSource, Storage};
pub use crate::utils::error::Result;
