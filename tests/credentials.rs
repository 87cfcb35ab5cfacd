//! Scenario tests for the credential-collection phase


use mock_api::{MockApi, MockKey};
use postget_provision::core::catalog;
use postget_provision::execution::CredentialCollector;

/// Two keys resolve, one lookup returns a non-200: the mapping still holds
/// three entries, with the unresolved client marked absent
#[tokio::test]
async fn test_collect_two_found_one_missing() {
    let mock = MockApi::new(vec![])
        .with_key("sally", MockKey::Found("key-sally".to_string()))
        .with_key("jake", MockKey::Found("key-jake".to_string()))
        .with_key("possums_inc", MockKey::Missing);

    let collector = CredentialCollector::new(mock);
    let keys = collector.collect(&catalog::client_doc_ids()).await;

    assert_eq!(keys.len(), 3);
    assert_eq!(keys["sally"].as_deref(), Some("key-sally"));
    assert_eq!(keys["jake"].as_deref(), Some("key-jake"));
    assert_eq!(keys["possums_inc"], None);
}

/// A transport failure during one lookup is recorded as absent rather than
/// aborting the phase
#[tokio::test]
async fn test_transport_failure_is_recorded_as_absent() {
    let mock = MockApi::new(vec![])
        .with_key("sally", MockKey::Transport("connection reset".to_string()))
        .with_key("jake", MockKey::Found("key-jake".to_string()))
        .with_key("possums_inc", MockKey::Found("key-possums".to_string()));

    let collector = CredentialCollector::new(mock);
    let keys = collector.collect(&catalog::client_doc_ids()).await;

    assert_eq!(keys.len(), 3);
    assert_eq!(keys["sally"], None);
    assert_eq!(keys["jake"].as_deref(), Some("key-jake"));
    assert_eq!(keys["possums_inc"].as_deref(), Some("key-possums"));
}

/// The collection phase always yields one entry per requested identifier,
/// even when nothing resolves
#[tokio::test]
async fn test_collect_with_no_resolvable_keys() {
    let mock = MockApi::new(vec![]);

    let collector = CredentialCollector::new(mock);
    let keys = collector.collect(&catalog::client_doc_ids()).await;

    assert_eq!(keys.len(), 3);
    assert!(keys.values().all(Option::is_none));
}
