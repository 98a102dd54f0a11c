//! Rate client against a mock provider.

use chrono::NaiveDate;
use dashboard::core::{AppError, RateService};
use dashboard::services::api::{RateClient, RetryPolicy};
use serde_json::json;
use shared::CurrencyCode;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> RateClient {
    RateClient::with_base_url(
        &server.uri(),
        Duration::from_secs(5),
        RetryPolicy {
            max_attempts: 3,
            backoff_step: Duration::from_millis(10),
        },
    )
}

fn code(s: &str) -> CurrencyCode {
    CurrencyCode::from(s)
}

#[tokio::test]
async fn test_list_currencies() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/currencies"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "EUR": "Euro",
            "USD": "United States Dollar"
        })))
        .mount(&server)
        .await;

    let list = client_for(&server).list_currencies().await.unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list.get(&code("EUR")).map(String::as_str), Some("Euro"));
}

#[tokio::test]
async fn test_retry_recovers_after_transient_failures() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/latest"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/latest"))
        .and(query_param("from", "USD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "amount": 1.0,
            "base": "USD",
            "date": "2024-05-17",
            "rates": { "EUR": 0.92, "TRY": 32.21 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let snapshot = client_for(&server).latest_rates(&code("USD")).await.unwrap();
    assert_eq!(snapshot.rate(&code("EUR")), Some(0.92));
    assert_eq!(snapshot.rate(&code("TRY")), Some(32.21));
}

#[tokio::test]
async fn test_retries_exhausted_reports_attempts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/latest"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&server)
        .await;

    let err = client_for(&server).latest_rates(&code("USD")).await.unwrap_err();
    match err {
        AppError::ProviderUnavailable { attempts, reason } => {
            assert_eq!(attempts, 3);
            assert!(reason.contains("500"), "unexpected reason: {reason}");
        }
        other => panic!("expected ProviderUnavailable, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_retried_then_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/currencies"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .expect(3)
        .mount(&server)
        .await;

    let err = client_for(&server).list_currencies().await.unwrap_err();
    assert!(err.is_provider_error());
}

#[tokio::test]
async fn test_snapshot_includes_base_at_one() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "base": "EUR",
            "rates": { "USD": 1.08 }
        })))
        .mount(&server)
        .await;

    let snapshot = client_for(&server).latest_rates(&code("EUR")).await.unwrap();
    assert_eq!(snapshot.base(), &code("EUR"));
    assert_eq!(snapshot.rate(&code("EUR")), Some(1.0));
    assert_eq!(snapshot.len(), 2);
}

#[tokio::test]
async fn test_convert_derives_effective_rate() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/latest"))
        .and(query_param("amount", "250"))
        .and(query_param("from", "USD"))
        .and(query_param("to", "EUR"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "amount": 250.0,
            "base": "USD",
            "rates": { "EUR": 230.0 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .convert(&code("USD"), &code("EUR"), 250.0)
        .await
        .unwrap();
    assert_eq!(result.converted_amount, 230.0);
    assert!((result.effective_rate - 0.92).abs() < 1e-12);
}

#[tokio::test]
async fn test_convert_missing_target_rate() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "amount": 10.0,
            "base": "USD",
            "rates": {}
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .convert(&code("USD"), &code("XYZ"), 10.0)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::MissingRate(ref c) if c == &code("XYZ")));
}

#[tokio::test]
async fn test_same_currency_conversion_stays_local() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .convert(&code("GBP"), &code("GBP"), 42.5)
        .await
        .unwrap();
    assert_eq!(result.converted_amount, 42.5);
    assert_eq!(result.effective_rate, 1.0);
}

#[tokio::test]
async fn test_historical_rate_for_date() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2024-05-10"))
        .and(query_param("from", "EUR"))
        .and(query_param("to", "USD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "amount": 1.0,
            "base": "EUR",
            "date": "2024-05-10",
            "rates": { "USD": 1.0771 }
        })))
        .mount(&server)
        .await;

    let date = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
    let rate = client_for(&server).historical_rate(&code("EUR"), &code("USD"), date).await;
    assert_eq!(rate, Some(1.0771));
}

#[tokio::test]
async fn test_historical_rate_unavailable_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2024-05-10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "base": "EUR",
            "rates": {}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/2024-04-17"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let missing = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
    let not_found = NaiveDate::from_ymd_opt(2024, 4, 17).unwrap();

    assert_eq!(client.historical_rate(&code("EUR"), &code("USD"), missing).await, None);
    assert_eq!(client.historical_rate(&code("EUR"), &code("USD"), not_found).await, None);
}
