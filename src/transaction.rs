// 📊 Transaction Assembly
// Splits a submitted text block into candidate lines, runs the field
// extractors on each, and keeps only the lines that carry a real amount.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::classify::{detect_transaction_kind, TransactionKind};
use crate::extract::{
    extract_amount, extract_client_name, extract_concept, extract_date, extract_payment_terms,
};

/// Lines with fewer characters than this never reach the extractors;
/// they cannot hold a date, a counterparty and an amount at once.
pub const MIN_LINE_CHARS: usize = 16;

/// Fallback counterparty when extraction finds nothing. Never empty on a
/// retained transaction.
pub const DEFAULT_CLIENT: &str = "Cliente General";

// ============================================================================
// TRANSACTION
// ============================================================================

/// One parsed line of input. Created in bulk by [`assemble_batch`], lives in
/// memory for the session, never mutated in place (removal and re-add is the
/// only mutation).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Stable identity (UUID), generated at creation, never reused
    pub id: String,

    /// Calendar date of the operation (extracted or defaulted)
    pub date: NaiveDate,

    /// The filer/business name, copied onto every transaction in a batch
    pub company: String,

    /// Verbatim source line
    pub description: String,

    /// Always > 0; zero-amount lines are dropped, not stored
    pub amount: f64,

    /// Detected category
    pub kind: TransactionKind,

    /// Extracted counterparty, or [`DEFAULT_CLIENT`]
    pub client_name: String,

    /// Short label for the operation, always populated
    pub concept: String,

    /// e.g. "30 días" or "contado"; empty when the line says nothing
    pub payment_terms: String,

    /// Reserved; consumed by the detailed-sale auxiliary when present
    #[serde(default)]
    pub specific_detail: String,
}

impl Transaction {
    /// Parse a single candidate line. Returns `None` when no plausible
    /// amount is found; line-level rejection is silent.
    pub fn from_line(line: &str, company: &str, today: NaiveDate) -> Option<Transaction> {
        let amount = extract_amount(line);
        if amount <= 0.0 {
            return None;
        }

        let client_name = match extract_client_name(line) {
            name if name.is_empty() => DEFAULT_CLIENT.to_string(),
            name => name,
        };

        Some(Transaction {
            id: uuid::Uuid::new_v4().to_string(),
            date: extract_date(line, today),
            company: company.to_string(),
            description: line.to_string(),
            amount,
            kind: detect_transaction_kind(line),
            client_name,
            concept: extract_concept(line),
            payment_terms: extract_payment_terms(line),
            specific_detail: String::new(),
        })
    }
}

// ============================================================================
// BATCH OUTCOME
// ============================================================================

/// What a submission produced. The plan ceiling is injected policy: the
/// assembler only sees the remaining capacity, never the plan itself.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    /// Retained transactions, in original line order
    pub transactions: Vec<Transaction>,
    /// Valid transactions that did not fit under the plan ceiling
    pub dropped_over_limit: usize,
}

/// Caller-facing summary of a batch, used for messaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchStatus {
    /// No line produced a valid transaction
    NoValidTransactions,
    /// Everything that parsed was retained
    Processed { count: usize },
    /// Some retained, the rest hit the plan ceiling
    PartiallyProcessed { processed: usize, dropped: usize },
}

impl BatchOutcome {
    pub fn status(&self) -> BatchStatus {
        match (self.transactions.len(), self.dropped_over_limit) {
            (0, 0) => BatchStatus::NoValidTransactions,
            (n, 0) => BatchStatus::Processed { count: n },
            (n, dropped) => BatchStatus::PartiallyProcessed { processed: n, dropped },
        }
    }
}

/// Run the full assembly pipeline over a submitted text block.
///
/// `capacity` is the number of transactions the caller may still add under
/// its plan (`None` = unlimited). When a batch produces more valid
/// transactions than fit, the prefix that fits is retained in original
/// order and the remainder is reported in `dropped_over_limit`.
pub fn assemble_batch(
    text: &str,
    company: &str,
    today: NaiveDate,
    capacity: Option<usize>,
) -> BatchOutcome {
    let parsed: Vec<Transaction> = text
        .lines()
        .map(str::trim)
        .filter(|line| line.chars().count() >= MIN_LINE_CHARS)
        .filter_map(|line| Transaction::from_line(line, company, today))
        .collect();

    let keep = capacity.unwrap_or(parsed.len()).min(parsed.len());
    let dropped_over_limit = parsed.len() - keep;
    let mut transactions = parsed;
    transactions.truncate(keep);

    BatchOutcome {
        transactions,
        dropped_over_limit,
    }
}
