// 🔍 Field Extractors
// Each extractor scans one line of uncurated text for one field and returns
// a sentinel default on a miss (0.0, "", today). None of them can fail:
// absence is an expected, common outcome, not an error.

pub mod amount;
pub mod client;
pub mod concept;
pub mod date;

pub use amount::{extract_amount, MIN_AMOUNT};
pub use client::extract_client_name;
pub use concept::{extract_concept, extract_payment_terms, DEFAULT_CONCEPT};
pub use date::extract_date;
