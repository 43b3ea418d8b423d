//! Ledger domain models and the transaction store.

pub mod category;
pub mod store;
pub mod transaction;

pub use category::{Category, CategoryKind, EXPENSE_CATEGORIES, INCOME_CATEGORIES};
pub use store::LedgerStore;
pub use transaction::{parse_amount, Transaction, TransactionDraft, TransactionKind};
