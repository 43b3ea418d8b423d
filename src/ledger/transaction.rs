use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::{Category, CategoryKind};
use crate::errors::{LedgerError, LedgerResult};

/// A single recorded income or expense.
///
/// Immutable once recorded: the stored amount already carries its sign
/// (negative for expenses, positive for income), so consumers never need the
/// original type flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub description: String,
    pub category: Category,
    pub amount: f64,
    pub date: DateTime<Utc>,
}

/// Caller-facing type flag; determines the sign of the stored amount.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransactionKind {
    Expense,
    Income,
}

impl TransactionKind {
    fn category_kind(self) -> CategoryKind {
        match self {
            TransactionKind::Expense => CategoryKind::Expense,
            TransactionKind::Income => CategoryKind::Income,
        }
    }
}

/// Unvalidated input for recording a transaction.
///
/// `amount` is the magnitude as entered; sign normalization happens when the
/// draft is accepted. `date` defaults to the creation instant when `None`.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub description: String,
    pub amount: f64,
    pub category: Category,
    pub kind: TransactionKind,
    pub date: Option<DateTime<Utc>>,
}

impl TransactionDraft {
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        category: Category,
        kind: TransactionKind,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            category,
            kind,
            date: None,
        }
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }
}

impl Transaction {
    /// Validates a draft and turns it into a recorded transaction.
    ///
    /// Fails without side effects on an empty description, a zero or
    /// non-finite amount, or a category whose kind contradicts the type flag.
    pub fn try_from_draft(draft: TransactionDraft) -> LedgerResult<Self> {
        if draft.description.trim().is_empty() {
            return Err(LedgerError::Validation(
                "Transaction description must not be empty".into(),
            ));
        }
        if draft.amount == 0.0 || !draft.amount.is_finite() {
            return Err(LedgerError::Validation(format!(
                "Transaction amount must be a non-zero number, got {}",
                draft.amount
            )));
        }
        if draft.category.kind() != draft.kind.category_kind() {
            return Err(LedgerError::Validation(format!(
                "Category {} is not valid for a {:?} transaction",
                draft.category, draft.kind
            )));
        }

        let magnitude = draft.amount.abs();
        let amount = match draft.kind {
            TransactionKind::Expense => -magnitude,
            TransactionKind::Income => magnitude,
        };

        Ok(Self {
            id: Uuid::new_v4(),
            description: draft.description,
            category: draft.category,
            amount,
            date: draft.date.unwrap_or_else(Utc::now),
        })
    }
}

/// Parses the raw amount string a form submits.
pub fn parse_amount(raw: &str) -> LedgerResult<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| LedgerError::Validation(format!("Amount is not numeric: {raw:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expense_amount_is_negated_regardless_of_input_sign() {
        let draft = TransactionDraft::new("Cafea", 12.5, Category::Food, TransactionKind::Expense);
        let txn = Transaction::try_from_draft(draft).expect("valid draft");
        assert_eq!(txn.amount, -12.5);

        let draft =
            TransactionDraft::new("Cafea", -12.5, Category::Food, TransactionKind::Expense);
        let txn = Transaction::try_from_draft(draft).expect("valid draft");
        assert_eq!(txn.amount, -12.5);
    }

    #[test]
    fn income_amount_stays_positive() {
        let draft =
            TransactionDraft::new("Salariu", 4500.0, Category::Salary, TransactionKind::Income);
        let txn = Transaction::try_from_draft(draft).expect("valid draft");
        assert_eq!(txn.amount, 4500.0);
    }

    #[test]
    fn blank_description_is_rejected() {
        let draft = TransactionDraft::new("   ", 10.0, Category::Food, TransactionKind::Expense);
        let err = Transaction::try_from_draft(draft).expect_err("blank description must fail");
        assert!(matches!(err, LedgerError::Validation(_)));
    }

    #[test]
    fn zero_amount_is_rejected() {
        let draft = TransactionDraft::new("Cafea", 0.0, Category::Food, TransactionKind::Expense);
        let err = Transaction::try_from_draft(draft).expect_err("zero amount must fail");
        assert!(matches!(err, LedgerError::Validation(_)));
    }

    #[test]
    fn income_category_on_expense_is_rejected() {
        let draft =
            TransactionDraft::new("Cafea", 10.0, Category::Salary, TransactionKind::Expense);
        let err = Transaction::try_from_draft(draft).expect_err("kind mismatch must fail");
        assert!(matches!(err, LedgerError::Validation(_)));
    }

    #[test]
    fn parse_amount_accepts_form_input() {
        assert_eq!(parse_amount(" 124.50 ").unwrap(), 124.5);
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("").is_err());
        assert!(parse_amount("NaN").is_err());
    }

    #[test]
    fn explicit_date_is_preserved() {
        let date = DateTime::parse_from_rfc3339("2024-06-18T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let draft = TransactionDraft::new("Cafea", 10.0, Category::Food, TransactionKind::Expense)
            .with_date(date);
        let txn = Transaction::try_from_draft(draft).expect("valid draft");
        assert_eq!(txn.date, date);
    }
}
