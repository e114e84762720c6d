//! Shared domain enums: search categories, category filters, and routes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Feature area a searchable entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cards,
    Crypto,
    Convert,
    Profile,
    Help,
    Funds,
    Phone,
    Rewards,
    Transactions,
    Uncategorized,
}

impl Category {
    /// Every category, in tab display order.
    pub const ALL: [Category; 10] = [
        Category::Cards,
        Category::Crypto,
        Category::Convert,
        Category::Profile,
        Category::Help,
        Category::Funds,
        Category::Phone,
        Category::Rewards,
        Category::Transactions,
        Category::Uncategorized,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Cards => "cards",
            Category::Crypto => "crypto",
            Category::Convert => "convert",
            Category::Profile => "profile",
            Category::Help => "help",
            Category::Funds => "funds",
            Category::Phone => "phone",
            Category::Rewards => "rewards",
            Category::Transactions => "transactions",
            Category::Uncategorized => "uncategorized",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// CategoryFilter
// ---------------------------------------------------------------------------

/// Category tab selection: everything, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn admits(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl FromStr for CategoryFilter {
    type Err = CoreError;

    /// `"all"` and the empty string select every category.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "all" => Ok(CategoryFilter::All),
            other => other.parse().map(CategoryFilter::Only),
        }
    }
}

// ---------------------------------------------------------------------------
// Route
// ---------------------------------------------------------------------------

/// Symbolic navigation targets. Entries reference these by path; no router
/// is involved at this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Dashboard,
    GenerateCard,
    AddFunds,
    Convert,
    Rewards,
    Referral,
    Crypto,
    Settings,
    Transactions,
    Help,
    Profile,
}

impl Route {
    pub const ALL: [Route; 11] = [
        Route::Dashboard,
        Route::GenerateCard,
        Route::AddFunds,
        Route::Convert,
        Route::Rewards,
        Route::Referral,
        Route::Crypto,
        Route::Settings,
        Route::Transactions,
        Route::Help,
        Route::Profile,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Dashboard => "/dashboard",
            Route::GenerateCard => "/generate-card",
            Route::AddFunds => "/add-funds",
            Route::Convert => "/convert",
            Route::Rewards => "/rewards",
            Route::Referral => "/referral",
            Route::Crypto => "/crypto",
            Route::Settings => "/settings",
            Route::Transactions => "/transactions",
            Route::Help => "/help",
            Route::Profile => "/profile",
        }
    }
}

impl FromStr for Route {
    type Err = CoreError;

    /// Parse a route path. Query strings and fragments are ignored, so
    /// `/settings?tab=security` resolves to [`Route::Settings`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = s.split(['?', '#']).next().unwrap_or_default();
        Route::ALL
            .into_iter()
            .find(|r| r.path() == path)
            .ok_or_else(|| CoreError::UnknownRoute(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
