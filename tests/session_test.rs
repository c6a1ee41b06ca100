use aoc_fetch::{AocClient, AocError, AppConfig};
use httpmock::prelude::*;

// 這個檔案只放一個測試：它會修改行程的環境變數
#[test]
fn test_missing_session_fails_before_any_request() {
    std::env::remove_var("AOC_SESSION");

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200).body("should not be requested");
    });

    let mut config = AppConfig::default();
    config.base_url = server.base_url();

    let result = AocClient::from_env(&config);

    assert!(matches!(result, Err(AocError::MissingSession)));
    api_mock.assert_hits(0);

    std::env::set_var("AOC_SESSION", "");
    assert!(matches!(
        AocClient::from_env(&config),
        Err(AocError::MissingSession)
    ));
    std::env::remove_var("AOC_SESSION");
}
