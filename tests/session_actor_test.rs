use std::sync::Arc;

use pos_kiosk::config::Config;
use pos_kiosk::lifecycle::Kiosk;
use pos_kiosk::notifier::{MockNotifier, NotifyError, WebhookNotifier};
use pos_kiosk::session_actor::SessionError;

fn test_config() -> Config {
    Config {
        password: "secret".to_string(),
        webhook_url: None,
    }
}

/// Real session actor with a scripted notifier: confirmed delivery (a
/// simulated 204) clears the cart and records the receipt.
#[tokio::test]
async fn submit_success_clears_cart_and_keeps_receipt() {
    let notifier = Arc::new(MockNotifier::new());
    let kiosk = Kiosk::with_notifier(&test_config(), notifier.clone());
    let client = kiosk.session_client.clone();

    client.login("secret").await.unwrap();
    client.add_line("Coke", 1500, 3).await.unwrap();
    client.add_line("Chips", 2000, 1).await.unwrap();
    assert_eq!(client.total().await.unwrap(), 6500);

    let receipt = client.submit_order().await.expect("submission failed");
    assert_eq!(receipt.order_text, "Coke 3개, Chips 1개");
    assert_eq!(receipt.total, 6500);

    // Cart reset, receipt retained for the confirmation display.
    let view = client.snapshot().await.unwrap();
    assert!(view.lines.is_empty());
    assert_eq!(view.total, 0);
    assert_eq!(view.last_receipt, Some(receipt));

    // Exactly one delivery attempt, carrying the formatted envelope.
    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].contains("Coke 3개, Chips 1개"));
    assert!(sent[0].contains("6500원"));

    drop(client);
    kiosk.shutdown().await.unwrap();
}

/// A rejected delivery (simulated 400) must leave the cart untouched so the
/// operator can retry without re-entering items.
#[tokio::test]
async fn submit_failure_preserves_cart_for_retry() {
    let notifier = Arc::new(MockNotifier::new());
    notifier.enqueue_err(NotifyError::Delivery {
        status: 400,
        body: "bad request".to_string(),
    });

    let kiosk = Kiosk::with_notifier(&test_config(), notifier.clone());
    let client = kiosk.session_client.clone();

    client.login("secret").await.unwrap();
    client.add_line("Coke", 1500, 3).await.unwrap();
    client.add_line("Chips", 2000, 1).await.unwrap();
    let before = client.snapshot().await.unwrap();

    let result = client.submit_order().await;
    assert_eq!(
        result,
        Err(SessionError::Notify(NotifyError::Delivery {
            status: 400,
            body: "bad request".to_string(),
        }))
    );

    // Both lines survive unchanged.
    let after = client.snapshot().await.unwrap();
    assert_eq!(after.lines, before.lines);
    assert_eq!(after.total, 6500);
    assert_eq!(after.last_receipt, None);

    // Retry succeeds once the endpoint accepts, clearing the cart.
    notifier.enqueue_ok();
    let receipt = client.submit_order().await.unwrap();
    assert_eq!(receipt.total, 6500);
    assert!(client.snapshot().await.unwrap().lines.is_empty());
    assert_eq!(notifier.sent_count(), 2);

    drop(client);
    kiosk.shutdown().await.unwrap();
}

/// Zero-quantity adds are rejected and never stored.
#[tokio::test]
async fn zero_quantity_add_is_rejected_without_mutation() {
    let kiosk = Kiosk::with_notifier(&test_config(), Arc::new(MockNotifier::new()));
    let client = kiosk.session_client.clone();

    client.login("secret").await.unwrap();
    let result = client.add_line("Coke", 1500, 0).await;
    assert_eq!(result, Err(SessionError::InvalidQuantity));
    assert_eq!(client.total().await.unwrap(), 0);
    assert!(client.snapshot().await.unwrap().lines.is_empty());

    drop(client);
    kiosk.shutdown().await.unwrap();
}

/// Wrong password leaves the session logged out; the right one flips it.
#[tokio::test]
async fn login_gate() {
    let kiosk = Kiosk::with_notifier(&test_config(), Arc::new(MockNotifier::new()));
    let client = kiosk.session_client.clone();

    assert_eq!(
        client.login("letmein").await,
        Err(SessionError::LoginMismatch)
    );
    assert!(!client.snapshot().await.unwrap().logged_in);

    // Cart actions stay gated while logged out.
    assert_eq!(
        client.add_line("Coke", 1500, 1).await,
        Err(SessionError::NotLoggedIn)
    );

    client.login("secret").await.unwrap();
    assert!(client.snapshot().await.unwrap().logged_in);

    drop(client);
    kiosk.shutdown().await.unwrap();
}

/// With no webhook URL configured, submission fails with a configuration
/// error and no network attempt; the cart is preserved.
#[tokio::test]
async fn unconfigured_webhook_surfaces_not_configured() {
    // Production notifier, but without a URL there is nothing to call.
    let notifier = Arc::new(WebhookNotifier::new(None));
    let kiosk = Kiosk::with_notifier(&test_config(), notifier);
    let client = kiosk.session_client.clone();

    client.login("secret").await.unwrap();
    client.add_line("Coke", 1500, 2).await.unwrap();

    let result = client.submit_order().await;
    assert_eq!(result, Err(SessionError::Notify(NotifyError::NotConfigured)));
    assert_eq!(client.total().await.unwrap(), 3000);

    drop(client);
    kiosk.shutdown().await.unwrap();
}

/// Submitting an empty cart is rejected before any notification attempt.
#[tokio::test]
async fn empty_cart_submission_is_rejected() {
    let notifier = Arc::new(MockNotifier::new());
    let kiosk = Kiosk::with_notifier(&test_config(), notifier.clone());
    let client = kiosk.session_client.clone();

    client.login("secret").await.unwrap();
    assert_eq!(client.submit_order().await, Err(SessionError::EmptyCart));
    assert_eq!(notifier.sent_count(), 0);

    drop(client);
    kiosk.shutdown().await.unwrap();
}
