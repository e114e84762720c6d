//! Airtime-to-cash conversion flow.
//!
//! Validates the conversion form, credits the wallet optimistically, waits
//! on the simulated backend, and reverts the credit if the call is rejected.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use cards2cash_core::validation::patterns::{card_pin_regex, phone_regex};
use cards2cash_core::validation::{CustomOutcome, FieldRule, FormState, FormValues, RuleSet};
use cards2cash_events::{Listeners, Notification, Notifier, Subscription};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::action::{SimulatedAction, SimulatedBackend};
use crate::error::ActionError;

/// Smallest convertible amount, in whole currency units.
pub const MIN_CONVERSION_AMOUNT: i64 = 100;

/// Largest convertible amount per request, in whole currency units.
pub const MAX_CONVERSION_AMOUNT: i64 = 50_000;

/// Minor units per whole unit.
const MINOR_PER_UNIT: i64 = 100;

// ---------------------------------------------------------------------------
// Carrier rates
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CarrierRate {
    pub carrier: &'static str,
    /// Share of the airtime value paid out, in basis points.
    pub rate_bps: i64,
}

pub const CARRIER_RATES: &[CarrierRate] = &[
    CarrierRate { carrier: "MTN", rate_bps: 8_000 },
    CarrierRate { carrier: "Airtel", rate_bps: 7_800 },
    CarrierRate { carrier: "Glo", rate_bps: 7_500 },
    CarrierRate { carrier: "9mobile", rate_bps: 7_000 },
];

/// Look up a carrier by name, ignoring case.
pub fn carrier_rate(carrier: &str) -> Option<&'static CarrierRate> {
    CARRIER_RATES
        .iter()
        .find(|rate| rate.carrier.eq_ignore_ascii_case(carrier.trim()))
}

// ---------------------------------------------------------------------------
// Form
// ---------------------------------------------------------------------------

pub const FIELD_PHONE: &str = "phone";
pub const FIELD_CARRIER: &str = "carrier";
pub const FIELD_AMOUNT: &str = "amount";
pub const FIELD_PIN: &str = "pin";

/// Rules for the conversion form.
pub fn conversion_rules() -> RuleSet {
    RuleSet::new()
        .field(
            FIELD_PHONE,
            FieldRule::new()
                .required()
                .pattern(phone_regex().clone())
                .message("Enter a valid phone number"),
        )
        .field(
            FIELD_CARRIER,
            FieldRule::new()
                .required()
                .custom(|value: &str, _: &FormValues| carrier_rate(value).is_some())
                .message("Select a supported network"),
        )
        .field(
            FIELD_AMOUNT,
            FieldRule::new().required().custom(|value: &str, _: &FormValues| {
                match value.trim().parse::<i64>() {
                    Ok(n) if (MIN_CONVERSION_AMOUNT..=MAX_CONVERSION_AMOUNT).contains(&n) => {
                        CustomOutcome::Pass
                    }
                    Ok(_) => CustomOutcome::fail_with(format!(
                        "Amount must be between {MIN_CONVERSION_AMOUNT} and {MAX_CONVERSION_AMOUNT}"
                    )),
                    Err(_) => CustomOutcome::fail_with("Amount must be a whole number"),
                }
            }),
        )
        .field(
            FIELD_PIN,
            FieldRule::new()
                .required()
                .pattern(card_pin_regex().clone())
                .message("PIN must be 4 digits"),
        )
}

/// A priced conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionQuote {
    pub carrier: String,
    /// Airtime value in whole units.
    pub amount: i64,
    /// Funds credited, in minor units.
    pub payout_minor: i64,
}

impl ConversionQuote {
    /// Price `amount` of airtime on `carrier`. `None` for unknown carriers
    /// and for amounts too large to price.
    pub fn new(carrier: &str, amount: i64) -> Option<Self> {
        let rate = carrier_rate(carrier)?;
        let payout_minor = amount
            .checked_mul(MINOR_PER_UNIT)?
            .checked_mul(rate.rate_bps)?
            / 10_000;
        Some(Self {
            carrier: rate.carrier.to_string(),
            amount,
            payout_minor,
        })
    }

    fn from_form(form: &FormState) -> Option<Self> {
        let amount = form.value(FIELD_AMOUNT).trim().parse().ok()?;
        Self::new(form.value(FIELD_CARRIER), amount)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionReceipt {
    pub reference: Uuid,
    pub quote: ConversionQuote,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Wallet
// ---------------------------------------------------------------------------

/// Wallet balance in minor units, observable by the dashboard.
#[derive(Default)]
pub struct Wallet {
    balance_minor: AtomicI64,
    listeners: Listeners<i64>,
}

impl Wallet {
    pub fn new(balance_minor: i64) -> Self {
        Self {
            balance_minor: AtomicI64::new(balance_minor),
            listeners: Listeners::new(),
        }
    }

    pub fn balance_minor(&self) -> i64 {
        self.balance_minor.load(Ordering::SeqCst)
    }

    pub fn credit(&self, amount_minor: i64) {
        let balance = self.balance_minor.fetch_add(amount_minor, Ordering::SeqCst) + amount_minor;
        self.listeners.notify(&balance);
    }

    pub fn debit(&self, amount_minor: i64) {
        self.credit(-amount_minor);
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&i64) + Send + Sync + 'static,
    {
        self.listeners.subscribe(listener)
    }
}

// ---------------------------------------------------------------------------
// Optimistic credit
// ---------------------------------------------------------------------------

/// A payout credited ahead of the backend's answer.
///
/// Unless [`commit`](Self::commit) is called, the credit is taken back and
/// an error notification is sent, including when the conversion future is
/// dropped mid-flight.
struct OptimisticCredit<'a> {
    wallet: &'a Wallet,
    notifier: &'a dyn Notifier,
    payout: i64,
    settled: bool,
}

impl<'a> OptimisticCredit<'a> {
    fn place(wallet: &'a Wallet, notifier: &'a dyn Notifier, payout: i64) -> Self {
        wallet.credit(payout);
        Self {
            wallet,
            notifier,
            payout,
            settled: false,
        }
    }

    fn commit(mut self) {
        self.settled = true;
    }

    fn revert(mut self, reason: &str) {
        self.settled = true;
        self.undo(reason);
    }

    fn undo(&self, reason: &str) {
        self.wallet.debit(self.payout);
        self.notifier
            .notify(Notification::error("Conversion failed", reason));
    }
}

impl Drop for OptimisticCredit<'_> {
    fn drop(&mut self) {
        if !self.settled {
            tracing::warn!(payout = self.payout, "Conversion cancelled, reverting credit");
            self.undo(CANCELLED_REASON);
        }
    }
}

/// Notification message for a conversion abandoned before the backend answered.
pub const CANCELLED_REASON: &str = "Conversion was cancelled";

// ---------------------------------------------------------------------------
// CreditConverter
// ---------------------------------------------------------------------------

pub struct CreditConverter {
    backend: SimulatedBackend,
    action: SimulatedAction<ConversionReceipt>,
    notifier: Arc<dyn Notifier>,
}

impl CreditConverter {
    pub fn new(backend: SimulatedBackend, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            backend,
            action: SimulatedAction::new("Credit conversion"),
            notifier,
        }
    }

    /// The submit button's action state.
    pub fn action(&self) -> &SimulatedAction<ConversionReceipt> {
        &self.action
    }

    /// Submit the conversion form.
    ///
    /// Invalid forms are rejected before anything else happens. Otherwise
    /// the payout is credited immediately and taken back if the simulated
    /// call fails or the returned future is dropped before it settles.
    pub async fn convert(
        &self,
        wallet: &Wallet,
        form: &mut FormState,
    ) -> Result<ConversionReceipt, ActionError> {
        if self.action.is_disabled() {
            return Err(ActionError::InFlight {
                action: self.action.name(),
            });
        }
        if !form.submit() {
            return Err(ActionError::Invalid(form.errors().clone()));
        }
        let Some(quote) = ConversionQuote::from_form(form) else {
            // The rules already guarantee a known carrier and numeric amount.
            return Err(ActionError::Invalid(form.errors().clone()));
        };

        let payout = quote.payout_minor;
        let receipt = ConversionReceipt {
            reference: Uuid::new_v4(),
            quote,
            phone: form.value(FIELD_PHONE).trim().to_string(),
            created_at: Utc::now(),
        };

        let result = self
            .action
            .run(async {
                let credit = OptimisticCredit::place(wallet, self.notifier.as_ref(), payout);
                let outcome = self.backend.call(receipt).await;
                match &outcome {
                    Ok(_) => credit.commit(),
                    Err(reason) => credit.revert(reason),
                }
                outcome
            })
            .await;

        if let Ok(receipt) = &result {
            tracing::info!(reference = %receipt.reference, payout, "Conversion completed");
            self.notifier.notify(Notification::success(
                "Conversion successful",
                format!(
                    "{} {} airtime converted to funds",
                    receipt.quote.amount, receipt.quote.carrier
                ),
            ));
        }
        result
    }
}
