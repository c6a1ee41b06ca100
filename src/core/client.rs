use crate::core::{ConfigProvider, InputSource};
use crate::domain::model::{Day, Session};
use crate::utils::error::{AocError, Result};
use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use reqwest::Client;

/// HTTP client for adventofcode.com, authenticated with the session cookie.
pub struct AocClient {
    client: Client,
    base_url: String,
    year: i32,
}

impl AocClient {
    /// 讀取 `AOC_SESSION` 建立 client，沒有設定時直接失敗，不會發出任何請求
    pub fn from_env<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config, Session::from_env()?)
    }

    pub fn new<C: ConfigProvider>(config: &C, session: Session) -> Result<Self> {
        let mut cookie = HeaderValue::from_str(&session.cookie()).map_err(|e| {
            AocError::InvalidConfigValueError {
                field: crate::domain::model::SESSION_ENV.to_string(),
                value: "<redacted>".to_string(),
                reason: e.to_string(),
            }
        })?;
        cookie.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, cookie);

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url().trim_end_matches('/').to_string(),
            year: config.year(),
        })
    }

    pub fn input_url(&self, day: Day) -> String {
        format!("{}/{}/day/{}/input", self.base_url, self.year, day)
    }
}

#[async_trait::async_trait]
impl InputSource for AocClient {
    async fn fetch_input(&self, day: Day) -> Result<Vec<u8>> {
        let url = self.input_url(day);
        tracing::debug!("Making API request to: {}", url);

        let response = self.client.get(&url).send().await?;
        tracing::debug!("API response status: {}", response.status());

        let body = response.bytes().await?;
        tracing::debug!("Received {} bytes", body.len());
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::domain::model::parse_day;
    use httpmock::prelude::*;

    fn config(base_url: &str) -> AppConfig {
        let mut config = AppConfig::default();
        config.base_url = base_url.to_string();
        config
    }

    fn session() -> Session {
        Session::from_value(Some("abc123".to_string())).unwrap()
    }

    #[test]
    fn test_default_input_url_is_pinned_to_one_year() {
        let client = AocClient::new(&AppConfig::default(), session()).unwrap();
        assert_eq!(
            client.input_url(parse_day(6).unwrap()),
            "https://adventofcode.com/2024/day/6/input"
        );
    }

    #[test]
    fn test_input_url() {
        let client = AocClient::new(&config("https://adventofcode.com/"), session()).unwrap();
        let day = parse_day(7).unwrap();
        assert_eq!(
            client.input_url(day),
            "https://adventofcode.com/2024/day/7/input"
        );
    }

    #[tokio::test]
    async fn test_fetch_sends_session_cookie() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/2024/day/3/input")
                .header("cookie", "session=abc123");
            then.status(200).body("xmul(2,4)\n");
        });

        let client = AocClient::new(&config(&server.base_url()), session()).unwrap();
        let body = client
            .fetch_input(parse_day(3).unwrap())
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(body, b"xmul(2,4)\n");
    }

    #[tokio::test]
    async fn test_fetch_does_not_inspect_status() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/2024/day/24/input");
            then.status(404).body("Please don't repeatedly request this endpoint before it unlocks!");
        });

        let client = AocClient::new(&config(&server.base_url()), session()).unwrap();
        let body = client
            .fetch_input(parse_day(24).unwrap())
            .await
            .unwrap();

        api_mock.assert();
        assert!(body.starts_with(b"Please don't"));
    }

    #[test]
    fn test_invalid_cookie_characters_are_rejected() {
        let session = Session::from_value(Some("abc\u{7f}def".to_string())).unwrap();
        let result = AocClient::new(&config("https://adventofcode.com"), session);
        assert!(matches!(
            result,
            Err(AocError::InvalidConfigValueError { .. })
        ));
    }
}
