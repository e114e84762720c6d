//! Integration tests for the airtime conversion flow.
//!
//! The simulated backend sleeps through `tokio::time`, so every test runs on
//! a paused clock and finishes instantly.

use std::sync::Arc;
use std::time::Duration;

use assert_matches::assert_matches;
use cards2cash_client::action::ActionStatus;
use cards2cash_client::convert::{
    conversion_rules, CreditConverter, Wallet, CANCELLED_REASON, FIELD_AMOUNT, FIELD_CARRIER,
    FIELD_PHONE, FIELD_PIN,
};
use cards2cash_client::{ActionError, SimulatedBackend};
use cards2cash_core::validation::FormState;
use cards2cash_events::{BusNotifier, EventBus, NotificationKind, RecordingNotifier};

const LATENCY: Duration = Duration::from_millis(1_500);

fn filled_form() -> FormState {
    let mut form = FormState::new(conversion_rules());
    form.set_value(FIELD_PHONE, "08012345678");
    form.set_value(FIELD_CARRIER, "MTN");
    form.set_value(FIELD_AMOUNT, "1000");
    form.set_value(FIELD_PIN, "1234");
    form
}

// ---------------------------------------------------------------------------
// Test: successful conversion credits the wallet and notifies success
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn successful_conversion_credits_wallet() {
    let notifier = Arc::new(RecordingNotifier::new());
    let converter = CreditConverter::new(SimulatedBackend::new(LATENCY), notifier.clone());
    let wallet = Wallet::new(0);
    let mut form = filled_form();

    let receipt = converter
        .convert(&wallet, &mut form)
        .await
        .expect("conversion should succeed");

    assert_eq!(receipt.quote.payout_minor, 80_000);
    assert_eq!(receipt.phone, "08012345678");
    assert_eq!(wallet.balance_minor(), 80_000);
    assert_eq!(notifier.count_of(NotificationKind::Success), 1);
    assert_matches!(converter.action().status(), ActionStatus::Resolved(r) if r == receipt);
}

// ---------------------------------------------------------------------------
// Test: rejected conversion reverts the optimistic credit
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn rejected_conversion_reverts_balance() {
    let notifier = Arc::new(RecordingNotifier::new());
    let converter = CreditConverter::new(
        SimulatedBackend::failing(LATENCY, "Carrier timed out"),
        notifier.clone(),
    );
    let wallet = Arc::new(Wallet::new(5_000));
    let balances = Arc::new(std::sync::Mutex::new(Vec::new()));
    let sink = Arc::clone(&balances);
    let _sub = wallet.subscribe(move |b| sink.lock().unwrap().push(*b));
    let mut form = filled_form();

    let result = converter.convert(&wallet, &mut form).await;

    assert_matches!(result, Err(ActionError::Rejected { reason, .. }) if reason == "Carrier timed out");
    assert_eq!(wallet.balance_minor(), 5_000);
    assert_eq!(*balances.lock().unwrap(), [85_000, 5_000], "optimistic credit then revert");

    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].kind, NotificationKind::Error);
    assert_eq!(sent[0].message, "Carrier timed out");
}

// ---------------------------------------------------------------------------
// Test: abandoning a conversion mid-flight reverts the optimistic credit
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn abandoned_conversion_reverts_balance() {
    let notifier = Arc::new(RecordingNotifier::new());
    let converter = CreditConverter::new(SimulatedBackend::new(LATENCY), notifier.clone());
    let wallet = Wallet::new(5_000);
    let mut form = filled_form();

    let timed_out = tokio::time::timeout(
        Duration::from_millis(10),
        converter.convert(&wallet, &mut form),
    )
    .await;

    assert!(timed_out.is_err(), "conversion should still be in flight");
    assert_eq!(wallet.balance_minor(), 5_000);
    assert_eq!(
        converter.action().status(),
        ActionStatus::Rejected("cancelled".into())
    );
    assert!(!converter.action().is_disabled());

    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].kind, NotificationKind::Error);
    assert_eq!(sent[0].message, CANCELLED_REASON);
}

// ---------------------------------------------------------------------------
// Test: invalid form never reaches the backend
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn invalid_form_is_rejected_up_front() {
    let notifier = Arc::new(RecordingNotifier::new());
    let converter = CreditConverter::new(SimulatedBackend::new(LATENCY), notifier.clone());
    let wallet = Wallet::new(0);
    let mut form = filled_form();
    form.set_value(FIELD_PIN, "12");
    form.set_value(FIELD_AMOUNT, "");

    let result = converter.convert(&wallet, &mut form).await;

    assert_matches!(result, Err(ActionError::Invalid(errors)) => {
        assert_eq!(errors.len(), 2);
        assert!(errors.contains_key(FIELD_PIN));
        assert!(errors.contains_key(FIELD_AMOUNT));
    });
    assert!(form.is_touched(FIELD_PHONE), "submit marks every field touched");
    assert_eq!(wallet.balance_minor(), 0);
    assert!(notifier.sent().is_empty());
    assert_eq!(converter.action().status(), ActionStatus::Idle);
}

// ---------------------------------------------------------------------------
// Test: a second submit while pending is refused
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn double_submit_is_refused_while_pending() {
    let notifier = Arc::new(RecordingNotifier::new());
    let converter = Arc::new(CreditConverter::new(
        SimulatedBackend::new(LATENCY),
        notifier.clone(),
    ));
    let wallet = Arc::new(Wallet::new(0));

    let first = {
        let converter = Arc::clone(&converter);
        let wallet = Arc::clone(&wallet);
        tokio::spawn(async move {
            let mut form = filled_form();
            converter.convert(&wallet, &mut form).await
        })
    };
    tokio::task::yield_now().await;
    assert!(converter.action().is_disabled());

    let mut form = filled_form();
    let second = converter.convert(&wallet, &mut form).await;
    assert_matches!(second, Err(ActionError::InFlight { .. }));

    first
        .await
        .expect("task should not panic")
        .expect("first conversion should succeed");
    assert_eq!(wallet.balance_minor(), 80_000, "credited exactly once");
    assert!(!converter.action().is_disabled());
}

// ---------------------------------------------------------------------------
// Test: notifications reach the event bus
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn notifications_are_published_on_the_bus() {
    let bus = Arc::new(EventBus::default());
    let mut rx = bus.subscribe();
    let converter = CreditConverter::new(
        SimulatedBackend::new(LATENCY),
        Arc::new(BusNotifier::new(Arc::clone(&bus))),
    );
    let wallet = Wallet::new(0);
    let mut form = filled_form();

    converter
        .convert(&wallet, &mut form)
        .await
        .expect("conversion should succeed");

    let event = rx.recv().await.expect("should receive notification");
    assert_eq!(event.kind, "notification.success");
    assert_eq!(event.payload["title"], "Conversion successful");
}
