use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{LedgerError, LedgerResult};

/// Categorises ledger activity for reporting and chart grouping.
///
/// The taxonomy is fixed at build time: changing it is a deployment change,
/// not a runtime one. Labels are the Romanian display strings the dashboard
/// shows, and double as the serialized and parsed representation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    #[serde(rename = "Facturi")]
    Bills,
    #[serde(rename = "Mâncare")]
    Food,
    #[serde(rename = "Transport")]
    Transport,
    #[serde(rename = "Cumpărături")]
    Shopping,
    #[serde(rename = "Divertisment")]
    Entertainment,
    #[serde(rename = "Călătorii")]
    Travel,
    #[serde(rename = "Altele")]
    Other,
    #[serde(rename = "Venit")]
    Salary,
    #[serde(rename = "Bonus")]
    Bonus,
    #[serde(rename = "Cadouri")]
    Gifts,
}

/// Supported category types.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CategoryKind {
    Expense,
    Income,
}

/// Expense categories in the order a selection UI should offer them.
pub const EXPENSE_CATEGORIES: [Category; 7] = [
    Category::Bills,
    Category::Food,
    Category::Transport,
    Category::Shopping,
    Category::Entertainment,
    Category::Travel,
    Category::Other,
];

/// Income categories in the order a selection UI should offer them.
pub const INCOME_CATEGORIES: [Category; 3] =
    [Category::Salary, Category::Bonus, Category::Gifts];

impl Category {
    /// Returns the display label shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Bills => "Facturi",
            Category::Food => "Mâncare",
            Category::Transport => "Transport",
            Category::Shopping => "Cumpărături",
            Category::Entertainment => "Divertisment",
            Category::Travel => "Călătorii",
            Category::Other => "Altele",
            Category::Salary => "Venit",
            Category::Bonus => "Bonus",
            Category::Gifts => "Cadouri",
        }
    }

    pub fn kind(&self) -> CategoryKind {
        match self {
            Category::Bills
            | Category::Food
            | Category::Transport
            | Category::Shopping
            | Category::Entertainment
            | Category::Travel
            | Category::Other => CategoryKind::Expense,
            Category::Salary | Category::Bonus | Category::Gifts => CategoryKind::Income,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = LedgerError;

    fn from_str(value: &str) -> LedgerResult<Self> {
        EXPENSE_CATEGORIES
            .iter()
            .chain(INCOME_CATEGORIES.iter())
            .copied()
            .find(|category| category.label() == value)
            .ok_or_else(|| LedgerError::Validation(format!("Unknown category: {value}")))
    }
}
