use uuid::Uuid;

use super::transaction::{Transaction, TransactionDraft};
use crate::errors::LedgerResult;

/// Owns the ordered collection of recorded transactions.
///
/// Records are kept newest first, which is the display convention of every
/// consumer. Derived figures (totals, breakdowns) are never cached here; the
/// analytics functions recompute them from a snapshot on demand.
#[derive(Debug, Clone, Default)]
pub struct LedgerStore {
    transactions: Vec<Transaction>,
}

impl LedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and records a transaction, returning its identifier.
    ///
    /// Validation is all-or-nothing: a failed draft leaves the collection
    /// unchanged.
    pub fn add_transaction(&mut self, draft: TransactionDraft) -> LedgerResult<Uuid> {
        let transaction = Transaction::try_from_draft(draft)?;
        let id = transaction.id;
        tracing::debug!(%id, amount = transaction.amount, "transaction recorded");
        self.transactions.insert(0, transaction);
        Ok(id)
    }

    /// Returns the full collection, newest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{Category, TransactionKind};

    fn draft(description: &str, amount: f64) -> TransactionDraft {
        TransactionDraft::new(description, amount, Category::Food, TransactionKind::Expense)
    }

    #[test]
    fn newest_transaction_comes_first() {
        let mut store = LedgerStore::new();
        store.add_transaction(draft("Prima", 10.0)).unwrap();
        store.add_transaction(draft("A doua", 20.0)).unwrap();

        let listed = store.transactions();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].description, "A doua");
        assert_eq!(listed[1].description, "Prima");
    }

    #[test]
    fn recorded_transaction_keeps_description_and_signed_amount() {
        let mut store = LedgerStore::new();
        let id = store.add_transaction(draft("Supermarket", 124.5)).unwrap();

        let latest = &store.transactions()[0];
        assert_eq!(latest.id, id);
        assert_eq!(latest.description, "Supermarket");
        assert_eq!(latest.amount, -124.5);
    }

    #[test]
    fn rejected_draft_leaves_collection_unchanged() {
        let mut store = LedgerStore::new();
        store.add_transaction(draft("Valid", 10.0)).unwrap();

        store
            .add_transaction(draft("", 10.0))
            .expect_err("empty description must fail");
        store
            .add_transaction(draft("Zero", 0.0))
            .expect_err("zero amount must fail");

        assert_eq!(store.transaction_count(), 1);
    }

    #[test]
    fn ids_are_unique_across_insertions() {
        let mut store = LedgerStore::new();
        let first = store.add_transaction(draft("Unu", 1.0)).unwrap();
        let second = store.add_transaction(draft("Doi", 2.0)).unwrap();
        assert_ne!(first, second);
    }
}
