//! Static catalog of searchable pages.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::types::{Category, Route};

/// A navigable feature or page that global search can surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    /// Destination path. Opaque to the index.
    pub url: String,
}

impl SearchEntry {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            category,
            url: url.into(),
        }
    }
}

/// `(id, title, description, category, route, url suffix)`
type Row = (
    &'static str,
    &'static str,
    &'static str,
    Category,
    Route,
    &'static str,
);

const CATALOG_ROWS: &[Row] = &[
    ("generate-card", "Generate Card", "Create a new virtual payment card", Category::Cards, Route::GenerateCard, ""),
    ("my-cards", "My Cards", "View and manage your virtual cards", Category::Cards, Route::Dashboard, "#cards"),
    ("freeze-card", "Freeze Card", "Temporarily block a virtual card", Category::Cards, Route::Dashboard, "#cards"),
    ("crypto-trade", "Buy & Sell Crypto", "Trade Bitcoin, Ethereum and USDT", Category::Crypto, Route::Crypto, ""),
    ("crypto-rates", "Crypto Rates", "Live exchange rates for supported coins", Category::Crypto, Route::Crypto, "#rates"),
    ("convert-credit", "Convert Credit", "Turn airtime into digital funds", Category::Convert, Route::Convert, ""),
    ("carrier-rates", "Carrier Rates", "Conversion rates for each network carrier", Category::Convert, Route::Convert, "#rates"),
    ("add-funds", "Add Funds", "Top up your wallet balance", Category::Funds, Route::AddFunds, ""),
    ("withdraw", "Withdraw Funds", "Send your balance to a bank account", Category::Funds, Route::AddFunds, "#withdraw"),
    ("buy-airtime", "Buy Airtime", "Recharge any phone number", Category::Phone, Route::Convert, "#airtime"),
    ("data-bundles", "Data Bundles", "Purchase mobile data plans", Category::Phone, Route::Convert, "#data"),
    ("rewards", "Rewards", "Earn points on every conversion", Category::Rewards, Route::Rewards, ""),
    ("referral", "Refer a Friend", "Share your referral code and earn bonuses", Category::Rewards, Route::Referral, ""),
    ("profile", "Profile", "Update your name, avatar and contact details", Category::Profile, Route::Profile, ""),
    ("security", "Security Settings", "Change password and enable two-factor authentication", Category::Profile, Route::Settings, "?tab=security"),
    ("notifications", "Notification Preferences", "Choose which alerts you receive", Category::Profile, Route::Settings, "?tab=notifications"),
    ("transactions", "Transaction History", "Review past conversions and payments", Category::Transactions, Route::Transactions, ""),
    ("receipts", "Receipts", "Download or share transaction receipts", Category::Transactions, Route::Transactions, "#receipts"),
    ("help-center", "Help Center", "Answers to frequently asked questions", Category::Help, Route::Help, ""),
    ("contact-support", "Contact Support", "Chat with our support team", Category::Help, Route::Help, "#contact"),
];

static DEFAULT_CATALOG: LazyLock<Vec<SearchEntry>> = LazyLock::new(|| {
    CATALOG_ROWS
        .iter()
        .map(|&(id, title, description, category, route, suffix)| {
            SearchEntry::new(
                id,
                title,
                description,
                category,
                format!("{}{suffix}", route.path()),
            )
        })
        .collect()
});

/// The application's built-in search catalog, in display order.
pub fn default_catalog() -> &'static [SearchEntry] {
    &DEFAULT_CATALOG
}
