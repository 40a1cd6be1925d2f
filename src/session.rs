// 🗂️ Session State
// One session owns one transaction list. Single writer: submit-batch appends,
// remove-one deletes by id. Journal entries are a derived view recomputed
// from the current list on every read, never stored.

use chrono::{Local, NaiveDate};

use crate::journal::{generate_entries, verification_totals, JournalEntry};
use crate::plans::SubscriptionPlan;
use crate::transaction::{assemble_batch, BatchOutcome, Transaction};

pub struct Session {
    company: String,
    plan: SubscriptionPlan,
    transactions: Vec<Transaction>,
}

impl Session {
    pub fn new(company: impl Into<String>, plan: SubscriptionPlan) -> Self {
        Session {
            company: company.into(),
            plan,
            transactions: Vec::new(),
        }
    }

    /// Process a submitted text block and append what fits under the plan
    /// ceiling. Returns the batch outcome for caller messaging.
    pub fn process_text(&mut self, text: &str) -> BatchOutcome {
        self.process_text_on(text, Local::now().date_naive())
    }

    /// Same as [`process_text`](Self::process_text) with an explicit "today",
    /// so relative dates stay deterministic in tests.
    pub fn process_text_on(&mut self, text: &str, today: NaiveDate) -> BatchOutcome {
        let capacity = self.plan.remaining_capacity(self.transactions.len());
        let outcome = assemble_batch(text, &self.company, today, capacity);
        self.transactions.extend(outcome.transactions.iter().cloned());
        outcome
    }

    /// Remove one transaction by id. Its two journal entries disappear on
    /// the next read, since entries are derived, not owned.
    pub fn remove_transaction(&mut self, id: &str) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|tx| tx.id != id);
        self.transactions.len() < before
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn plan(&self) -> &SubscriptionPlan {
        &self.plan
    }

    /// Derived view: recomputed from the current transaction list on every
    /// call. Calling twice without mutation yields identical output.
    pub fn journal_entries(&self) -> Vec<JournalEntry> {
        generate_entries(&self.transactions)
    }

    /// Debit/credit totals for the self-check display.
    pub fn verification_totals(&self) -> (f64, f64) {
        verification_totals(&self.journal_entries())
    }
}
