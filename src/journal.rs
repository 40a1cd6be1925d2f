// 📒 Journal Entry Generation - Diario General
// Pure mapping from transactions to balanced debit/credit pairs. Entries are
// a derived view: recomputed on every read, never mutated independently.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::classify::TransactionKind;
use crate::fmt::money_plain;
use crate::transaction::Transaction;

// ============================================================================
// LEDGER ACCOUNT NAMES (fixed chart, one pair per category)
// ============================================================================

pub const CUENTA_POR_COBRAR: &str = "cuenta por cobrar";
pub const VENTA_DE_MERCANCIA: &str = "venta de mercancía";
pub const EFECTIVO_CAJA_Y_BANCO: &str = "efectivo caja y banco";
pub const DESCUENTO_Y_DEVOLUCION: &str = "descuento y devolución de venta";
pub const GASTOS_OPERACIONALES: &str = "gastos operacionales";
pub const ACTIVOS_FIJOS: &str = "activos fijos";
pub const CUENTA_POR_PAGAR: &str = "cuenta por pagar";
pub const CAPITAL_SOCIAL: &str = "capital social";

// ============================================================================
// JOURNAL ENTRY
// ============================================================================

/// One ledger line. Exactly one of `debit`/`credit` is nonzero; the other is
/// exactly zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub date: NaiveDate,

    /// Ledger account name
    pub account: String,

    /// Free-text sub-ledger annotation (counterparty or operation detail)
    pub auxiliary: String,

    pub debit: f64,
    pub credit: f64,

    /// Back-reference to the originating transaction (relation, not ownership)
    pub transaction_id: String,
}

impl JournalEntry {
    fn debit_line(tx: &Transaction, account: &str, auxiliary: String) -> JournalEntry {
        JournalEntry {
            date: tx.date,
            account: account.to_string(),
            auxiliary,
            debit: tx.amount,
            credit: 0.0,
            transaction_id: tx.id.clone(),
        }
    }

    fn credit_line(tx: &Transaction, account: &str, auxiliary: String) -> JournalEntry {
        JournalEntry {
            date: tx.date,
            account: account.to_string(),
            auxiliary,
            debit: 0.0,
            credit: tx.amount,
            transaction_id: tx.id.clone(),
        }
    }
}

// ============================================================================
// AUXILIARY TEMPLATES
// ============================================================================

// Five fixed templates, selected per account role. Wording (including the
// colloquial "para registra") matches the original journal sheets.

fn aux_client_with_amount(tx: &Transaction) -> String {
    format!("{} {}", tx.client_name, money_plain(tx.amount))
}

fn aux_detailed_sale(tx: &Transaction) -> String {
    let mut aux = format!("para registra {}", tx.concept);
    if !tx.specific_detail.is_empty() {
        aux.push_str(&format!(" de {}", tx.specific_detail));
    }
    aux.push_str(&format!(" a {}", tx.client_name.to_lowercase()));
    if !tx.payment_terms.is_empty() {
        aux.push_str(&format!(" para pagar en {}", tx.payment_terms));
    }
    aux
}

fn aux_collection(tx: &Transaction) -> String {
    format!("para registra el abono de {}", tx.client_name.to_lowercase())
}

fn aux_return(tx: &Transaction) -> String {
    format!("para registra la devolución a {}", tx.client_name.to_lowercase())
}

fn aux_simple_operation(tx: &Transaction) -> String {
    format!("para registra {}", tx.concept)
}

// ============================================================================
// GENERATOR
// ============================================================================

/// Generate the journal entries for a list of transactions.
///
/// Pure and stateless: the same input always produces the same output, so
/// the view layer can recompute on every render. Each transaction yields
/// exactly one balanced debit/credit pair, except `Payment`, which has no
/// account mapping in the source chart and emits nothing.
pub fn generate_entries(transactions: &[Transaction]) -> Vec<JournalEntry> {
    let mut entries = Vec::with_capacity(transactions.len() * 2);

    for tx in transactions {
        match tx.kind {
            TransactionKind::Income => {
                entries.push(JournalEntry::debit_line(tx, CUENTA_POR_COBRAR, aux_client_with_amount(tx)));
                entries.push(JournalEntry::credit_line(tx, VENTA_DE_MERCANCIA, aux_detailed_sale(tx)));
            }
            TransactionKind::Collection => {
                entries.push(JournalEntry::debit_line(tx, EFECTIVO_CAJA_Y_BANCO, aux_client_with_amount(tx)));
                entries.push(JournalEntry::credit_line(tx, CUENTA_POR_COBRAR, aux_collection(tx)));
            }
            TransactionKind::Discount => {
                entries.push(JournalEntry::debit_line(tx, DESCUENTO_Y_DEVOLUCION, aux_client_with_amount(tx)));
                entries.push(JournalEntry::credit_line(tx, CUENTA_POR_COBRAR, aux_return(tx)));
            }
            TransactionKind::Expense => {
                entries.push(JournalEntry::debit_line(tx, GASTOS_OPERACIONALES, aux_simple_operation(tx)));
                entries.push(JournalEntry::credit_line(tx, EFECTIVO_CAJA_Y_BANCO, tx.company.clone()));
            }
            TransactionKind::Asset => {
                entries.push(JournalEntry::debit_line(tx, ACTIVOS_FIJOS, aux_simple_operation(tx)));
                entries.push(JournalEntry::credit_line(tx, EFECTIVO_CAJA_Y_BANCO, tx.company.clone()));
            }
            TransactionKind::Liability => {
                entries.push(JournalEntry::debit_line(tx, EFECTIVO_CAJA_Y_BANCO, aux_client_with_amount(tx)));
                entries.push(JournalEntry::credit_line(tx, CUENTA_POR_PAGAR, aux_detailed_sale(tx)));
            }
            TransactionKind::Equity => {
                entries.push(JournalEntry::debit_line(tx, EFECTIVO_CAJA_Y_BANCO, aux_client_with_amount(tx)));
                entries.push(JournalEntry::credit_line(tx, CAPITAL_SOCIAL, aux_detailed_sale(tx)));
            }
            // Sin par de cuentas en el catálogo original; pendiente de
            // decisión de producto, no se inventa una.
            TransactionKind::Payment => {}
        }
    }

    entries
}

/// Debit and credit totals over a set of entries, for the self-check
/// display. Double-entry balance holds per pair, so the two totals are
/// always equal.
pub fn verification_totals(entries: &[JournalEntry]) -> (f64, f64) {
    let debits = entries.iter().map(|e| e.debit).sum();
    let credits = entries.iter().map(|e| e.credit).sum();
    (debits, credits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::assemble_batch;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn tx(kind: TransactionKind, amount: f64) -> Transaction {
        Transaction {
            id: uuid::Uuid::new_v4().to_string(),
            date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            company: "Consultoría Integral SA".to_string(),
            description: "línea de prueba".to_string(),
            amount,
            kind,
            client_name: "Frank Muebles".to_string(),
            concept: "venta de mercancía".to_string(),
            payment_terms: "30 días".to_string(),
            specific_detail: String::new(),
        }
    }

    #[test]
    fn test_income_pair() {
        let entries = generate_entries(&[tx(TransactionKind::Income, 1230000.0)]);
        assert_eq!(entries.len(), 2);

        assert_eq!(entries[0].account, CUENTA_POR_COBRAR);
        assert_eq!(entries[0].debit, 1230000.0);
        assert_eq!(entries[0].credit, 0.0);
        assert_eq!(entries[0].auxiliary, "Frank Muebles 1,230,000.00");

        assert_eq!(entries[1].account, VENTA_DE_MERCANCIA);
        assert_eq!(entries[1].credit, 1230000.0);
        assert_eq!(entries[1].debit, 0.0);
        assert_eq!(
            entries[1].auxiliary,
            "para registra venta de mercancía a frank muebles para pagar en 30 días"
        );

        assert_eq!(entries[0].transaction_id, entries[1].transaction_id);
        assert_eq!(entries[0].date, entries[1].date);
    }

    #[test]
    fn test_collection_pair() {
        let entries = generate_entries(&[tx(TransactionKind::Collection, 300000.0)]);
        assert_eq!(entries[0].account, EFECTIVO_CAJA_Y_BANCO);
        assert_eq!(entries[1].account, CUENTA_POR_COBRAR);
        assert_eq!(entries[1].auxiliary, "para registra el abono de frank muebles");
    }

    #[test]
    fn test_discount_pair() {
        let entries = generate_entries(&[tx(TransactionKind::Discount, 20000.0)]);
        assert_eq!(entries[0].account, DESCUENTO_Y_DEVOLUCION);
        assert_eq!(entries[0].debit, 20000.0);
        assert_eq!(entries[1].account, CUENTA_POR_COBRAR);
        assert_eq!(entries[1].auxiliary, "para registra la devolución a frank muebles");
    }

    #[test]
    fn test_expense_pair_credits_cash_with_company_auxiliary() {
        let entries = generate_entries(&[tx(TransactionKind::Expense, 80000.0)]);
        assert_eq!(entries[0].account, GASTOS_OPERACIONALES);
        assert_eq!(entries[1].account, EFECTIVO_CAJA_Y_BANCO);
        assert_eq!(entries[1].auxiliary, "Consultoría Integral SA");
    }

    #[test]
    fn test_asset_pair() {
        let entries = generate_entries(&[tx(TransactionKind::Asset, 1500000.0)]);
        assert_eq!(entries[0].account, ACTIVOS_FIJOS);
        assert_eq!(entries[1].account, EFECTIVO_CAJA_Y_BANCO);
    }

    #[test]
    fn test_liability_pair() {
        let entries = generate_entries(&[tx(TransactionKind::Liability, 5000000.0)]);
        assert_eq!(entries[0].account, EFECTIVO_CAJA_Y_BANCO);
        assert_eq!(entries[1].account, CUENTA_POR_PAGAR);
    }

    #[test]
    fn test_equity_pair() {
        let entries = generate_entries(&[tx(TransactionKind::Equity, 10000000.0)]);
        assert_eq!(entries[0].account, EFECTIVO_CAJA_Y_BANCO);
        assert_eq!(entries[1].account, CAPITAL_SOCIAL);
    }

    #[test]
    fn test_payment_emits_nothing() {
        let entries = generate_entries(&[tx(TransactionKind::Payment, 2000000.0)]);
        assert!(entries.is_empty());
    }

    #[test]
    fn test_every_pair_balances() {
        for kind in [
            TransactionKind::Income,
            TransactionKind::Collection,
            TransactionKind::Discount,
            TransactionKind::Expense,
            TransactionKind::Asset,
            TransactionKind::Liability,
            TransactionKind::Equity,
        ] {
            let entries = generate_entries(&[tx(kind, 123456.78)]);
            assert_eq!(entries.len(), 2, "{:?} must emit exactly two lines", kind);
            let (debits, credits) = verification_totals(&entries);
            assert_eq!(debits, credits);
            for entry in &entries {
                let debit_side = entry.debit > 0.0;
                let credit_side = entry.credit > 0.0;
                assert!(debit_side != credit_side, "exactly one side must be nonzero");
            }
        }
    }

    #[test]
    fn test_generator_is_idempotent() {
        let sample = "El 1 de mayo se realizó una venta a crédito por valor de $1,230,000.00 a Frank muebles, para pagar en 30 días\n\
                      El 8 de mayo de la mercancía vendida a casa Suárez devolvieron $20,000.00";
        let outcome = assemble_batch(sample, "Empresa", today(), None);

        let first = generate_entries(&outcome.transactions);
        let second = generate_entries(&outcome.transactions);
        assert_eq!(first, second);

        let json_a = serde_json::to_string(&first).unwrap();
        let json_b = serde_json::to_string(&second).unwrap();
        assert_eq!(json_a, json_b);
    }

    #[test]
    fn test_end_to_end_return_entries() {
        let outcome = assemble_batch(
            "El 8 de mayo de la mercancía vendida a casa Suárez devolvieron $20,000.00",
            "Empresa",
            today(),
            None,
        );
        let entries = generate_entries(&outcome.transactions);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].account, DESCUENTO_Y_DEVOLUCION);
        assert_eq!(entries[0].debit, 20000.0);
        assert_eq!(entries[1].account, CUENTA_POR_COBRAR);
        assert_eq!(entries[1].credit, 20000.0);
    }

    #[test]
    fn test_aggregate_totals_balance() {
        let txs = vec![
            tx(TransactionKind::Income, 1230000.0),
            tx(TransactionKind::Collection, 300000.0),
            tx(TransactionKind::Discount, 20000.0),
        ];
        let entries = generate_entries(&txs);
        let (debits, credits) = verification_totals(&entries);
        assert_eq!(debits, 1550000.0);
        assert_eq!(credits, 1550000.0);
    }
}
