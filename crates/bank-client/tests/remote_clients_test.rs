//! HTTP client and caching decorator tests against a wiremock server.

use bank_client::{
    CachedBankDetailsClient, CachedProfileClient, HttpBankDetailsClient, HttpProfileClient,
    StaticServiceDiscovery,
};
use bank_service::{BankDetailsClient, CacheRegion, LocalCacheService, ProfileClient};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn discovery(server: &MockServer) -> Arc<StaticServiceDiscovery> {
    Arc::new(StaticServiceDiscovery::new(HashMap::from([
        ("profile-app".to_string(), server.uri()),
        ("public-info-app".to_string(), server.uri()),
    ])))
}

fn region(ttl: Duration) -> CacheRegion {
    CacheRegion {
        cache: Arc::new(LocalCacheService::new("test", 1024 * 1024)),
        ttl,
    }
}

fn profile_json(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "phoneNumber": 79_161_234_567_i64,
        "email": "petrov@example.ru",
        "nameOnCard": "IVAN PETROV",
        "inn": 500_100_732_259_i64,
        "snils": 11_223_344_595_i64,
        "passportId": 1,
        "actualRegistrationId": 2
    })
}

#[tokio::test]
async fn test_profile_client_reads_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/profile/profile/read/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_json(7)))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpProfileClient::new(reqwest::Client::new(), discovery(&server));
    let profile = client.read_by_id(7).await.unwrap();

    assert_eq!(profile.id, Some(7));
    assert_eq!(profile.name_on_card.as_deref(), Some("IVAN PETROV"));
}

#[tokio::test]
async fn test_bank_details_client_reads_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/public-info/bank/details/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3,
            "bik": 44_525_225,
            "inn": 7_707_083_893_i64,
            "kpp": 773_601_001,
            "corAccount": 30_101_810_400_000_000_i64,
            "city": "Москва",
            "jointStockCompany": "ПАО",
            "name": "Сбербанк"
        })))
        .mount(&server)
        .await;

    let client = HttpBankDetailsClient::new(reqwest::Client::new(), discovery(&server));
    let details = client.read_by_id(3).await.unwrap();

    assert_eq!(details.bik, Some(44_525_225));
    assert_eq!(details.city.as_deref(), Some("Москва"));
}

#[tokio::test]
async fn test_non_success_status_is_remote_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such profile"))
        .mount(&server)
        .await;

    let client = HttpProfileClient::new(reqwest::Client::new(), discovery(&server));
    let err = client.read_by_id(1).await.unwrap_err();

    assert_eq!(err.error_code(), "REMOTE_UNAVAILABLE");
    assert!(err.to_string().contains("profile-app"));
    assert!(!err.to_string().contains("no such profile"));
}

#[tokio::test]
async fn test_large_error_body_is_not_forwarded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("x".repeat(64 * 1024)))
        .mount(&server)
        .await;

    let client = HttpProfileClient::new(reqwest::Client::new(), discovery(&server));
    let err = client.read_by_id(1).await.unwrap_err();

    assert_eq!(err.error_code(), "REMOTE_UNAVAILABLE");
    assert!(err.to_string().len() < 256);
}

#[tokio::test]
async fn test_unreachable_service_is_remote_unavailable() {
    let server = MockServer::start().await;
    let discovery = discovery(&server);
    drop(server);

    let client = HttpBankDetailsClient::new(reqwest::Client::new(), discovery);
    let err = client.read_by_id(1).await.unwrap_err();

    assert_eq!(err.status_code(), 502);
}

#[tokio::test]
async fn test_cached_client_reaches_remote_once_within_ttl() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/profile/profile/read/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_json(5)))
        .expect(1)
        .mount(&server)
        .await;

    let inner = Arc::new(HttpProfileClient::new(reqwest::Client::new(), discovery(&server)));
    let client = CachedProfileClient::new(inner, region(Duration::from_secs(60)));

    let first = client.read_by_id(5).await.unwrap();
    let second = client.read_by_id(5).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_cached_client_refetches_after_ttl() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/public-info/bank/details/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 9, "bik": 1 })))
        .expect(2)
        .mount(&server)
        .await;

    let inner = Arc::new(HttpBankDetailsClient::new(reqwest::Client::new(), discovery(&server)));
    let client = CachedBankDetailsClient::new(inner, region(Duration::from_millis(100)));

    client.read_by_id(9).await.unwrap();
    client.read_by_id(9).await.unwrap();
    tokio::time::sleep(Duration::from_millis(300)).await;
    client.read_by_id(9).await.unwrap();
}

#[tokio::test]
async fn test_failed_reads_are_not_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/profile/profile/read/4"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/profile/profile/read/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_json(4)))
        .expect(1)
        .mount(&server)
        .await;

    let inner = Arc::new(HttpProfileClient::new(reqwest::Client::new(), discovery(&server)));
    let client = CachedProfileClient::new(inner, region(Duration::from_secs(60)));

    assert!(client.read_by_id(4).await.is_err());
    assert_eq!(client.read_by_id(4).await.unwrap().id, Some(4));
    assert_eq!(client.read_by_id(4).await.unwrap().id, Some(4));
}

#[tokio::test]
async fn test_disabled_cache_always_reaches_remote() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_json(1)))
        .expect(2)
        .mount(&server)
        .await;

    let inner = Arc::new(HttpProfileClient::new(reqwest::Client::new(), discovery(&server)));
    let disabled = CacheRegion {
        cache: Arc::new(LocalCacheService::disabled("profileCache")),
        ttl: Duration::from_secs(60),
    };
    let client = CachedProfileClient::new(inner, disabled);

    client.read_by_id(1).await.unwrap();
    client.read_by_id(1).await.unwrap();
}
