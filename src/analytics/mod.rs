//! Pure derivation functions over a ledger snapshot.
//!
//! Nothing here holds state: every figure is recomputed from the transaction
//! slice it is handed, so there is no cache to invalidate.

use serde::{Deserialize, Serialize};

use crate::ledger::{Category, Transaction};
use crate::utils::round2;

/// Fixed chart palette; slices are colored by group position.
pub const CHART_PALETTE: [&str; 7] = [
    "#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#AF19FF", "#FF6666", "#66CCCC",
];

/// Net figures over a transaction snapshot.
///
/// `expenses` keeps its negative sign; `balance = income + expenses`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodTotals {
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
}

/// One expense category's share of the breakdown, with its display color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySlice {
    pub category: Category,
    pub total: f64,
    pub color: &'static str,
}

/// Sums income and expenses over the snapshot.
///
/// An empty snapshot yields exact zeros.
pub fn compute_totals(transactions: &[Transaction]) -> PeriodTotals {
    let mut income = 0.0;
    let mut expenses = 0.0;
    for transaction in transactions {
        if transaction.amount > 0.0 {
            income += transaction.amount;
        } else {
            expenses += transaction.amount;
        }
    }
    PeriodTotals {
        income,
        expenses,
        balance: income + expenses,
    }
}

/// Groups expense transactions by category, summing absolute amounts.
///
/// Groups appear in the order their category is first seen while scanning the
/// snapshot; the palette is assigned by that position, so output is
/// deterministic for a given input order. Sums stay at full precision until
/// the final per-group rounding to two decimals.
pub fn compute_category_breakdown(transactions: &[Transaction]) -> Vec<CategorySlice> {
    let mut groups: Vec<(Category, f64)> = Vec::new();

    for transaction in transactions.iter().filter(|t| t.amount < 0.0) {
        match groups.iter_mut().find(|(category, _)| *category == transaction.category) {
            Some((_, total)) => *total += transaction.amount.abs(),
            None => groups.push((transaction.category, transaction.amount.abs())),
        }
    }

    groups
        .into_iter()
        .enumerate()
        .map(|(index, (category, total))| CategorySlice {
            category,
            total: round2(total),
            color: CHART_PALETTE[index % CHART_PALETTE.len()],
        })
        .collect()
}
