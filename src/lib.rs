// Diario General - Core Library
// Free-text Spanish transaction descriptions in, balanced double-entry
// journal lines out. Exposes all modules for use in the CLI and tests.

pub mod classify;
pub mod export;
pub mod extract;
pub mod fmt;
pub mod journal;
pub mod plans;
pub mod session;
pub mod transaction;

// Re-export commonly used types
pub use classify::{detect_transaction_kind, TransactionKind};
pub use export::{export_to_file, suggested_filename, write_csv};
pub use extract::{
    extract_amount, extract_client_name, extract_concept, extract_date, extract_payment_terms,
    DEFAULT_CONCEPT, MIN_AMOUNT,
};
pub use journal::{generate_entries, verification_totals, JournalEntry};
pub use plans::{PlanRegistry, SubscriptionPlan};
pub use session::Session;
pub use transaction::{
    assemble_batch, BatchOutcome, BatchStatus, Transaction, DEFAULT_CLIENT, MIN_LINE_CHARS,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
