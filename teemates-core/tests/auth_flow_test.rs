//! Tests for the magic-link sign-in entry

use std::sync::Arc;

use teemates_core::{AuthView, Error, InMemoryBackend, MagicLinkFlow, ValidationError};

/// Test: a valid address requests exactly one sign-in link
#[tokio::test]
async fn test_send_records_the_address() {
    let backend = Arc::new(InMemoryBackend::new());
    let mut flow = MagicLinkFlow::new(backend.clone());

    flow.send("golfer@example.com", Some("https://teemates.app"))
        .await
        .unwrap();

    assert_eq!(flow.view(), AuthView::LinkSent);
    assert_eq!(backend.magic_links(), vec!["golfer@example.com".to_string()]);
}

/// Test: a malformed address is rejected before any call
#[tokio::test]
async fn test_invalid_email_is_rejected_before_any_call() {
    let backend = Arc::new(InMemoryBackend::new());
    let mut flow = MagicLinkFlow::new(backend.clone());

    let err = flow.send("not-an-email", None).await.unwrap_err();

    assert!(matches!(
        err,
        Error::Validation(ValidationError::InvalidEmail)
    ));
    assert_eq!(flow.view(), AuthView::EnterEmail);
    assert!(backend.magic_links().is_empty());
}

/// Test: a backend failure returns to the email field and the send can
/// be retried
#[tokio::test]
async fn test_backend_failure_allows_retry() {
    let backend = Arc::new(InMemoryBackend::new());
    let mut flow = MagicLinkFlow::new(backend.clone());

    backend.fail_next_magic_link("smtp relay down");
    let err = flow.send("golfer@example.com", None).await.unwrap_err();

    assert!(matches!(err, Error::Backend(_)));
    assert_eq!(flow.view(), AuthView::EnterEmail);

    flow.send("golfer@example.com", None).await.unwrap();
    assert_eq!(flow.view(), AuthView::LinkSent);
}

/// Test: once the link is out, the flow stays on the confirmation screen
#[tokio::test]
async fn test_link_sent_is_terminal() {
    let backend = Arc::new(InMemoryBackend::new());
    let mut flow = MagicLinkFlow::new(backend.clone());

    flow.send("golfer@example.com", None).await.unwrap();
    let err = flow.send("golfer@example.com", None).await.unwrap_err();

    assert!(matches!(err, Error::InvalidTransition { .. }));
    assert_eq!(backend.magic_links().len(), 1);
}
