// 🏷️ Transaction Classification - Rules as Data
// A fixed, ordered list of (pattern, kind) pairs; first match wins.
// The order IS the tie-break policy: a line mentioning both "abono" and
// "venta" classifies as Collection because that rule runs first.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

// ============================================================================
// TRANSACTION KIND
// ============================================================================

/// The eight transaction categories the classifier can emit.
///
/// `Payment` is carried from the source system: the classifier can reach it,
/// but the journal generator has no account pair for it (see `journal`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
    Asset,
    Liability,
    Equity,
    Collection,
    Payment,
    Discount,
}

impl TransactionKind {
    /// Short code for serialization and display
    pub fn code(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
            TransactionKind::Asset => "asset",
            TransactionKind::Liability => "liability",
            TransactionKind::Equity => "equity",
            TransactionKind::Collection => "collection",
            TransactionKind::Payment => "payment",
            TransactionKind::Discount => "discount",
        }
    }

    /// Human-readable Spanish label for display
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Income => "Venta a Crédito",
            TransactionKind::Collection => "Cobro/Abono",
            TransactionKind::Discount => "Descuento/Devolución",
            TransactionKind::Expense => "Gasto Operacional",
            TransactionKind::Asset => "Compra de Activo",
            TransactionKind::Liability => "Préstamo/Crédito",
            TransactionKind::Equity => "Aporte de Capital",
            TransactionKind::Payment => "Pago a Proveedor",
        }
    }
}

// ============================================================================
// ORDERED RULE LIST
// ============================================================================

fn classification_rules() -> &'static [(Regex, TransactionKind)] {
    static RULES: OnceLock<Vec<(Regex, TransactionKind)>> = OnceLock::new();
    RULES.get_or_init(|| {
        [
            // Cobros primero: "abonó" es señal más fuerte que "venta"
            (r"(?i)abono|abonó|realizó\s+un\s+abono", TransactionKind::Collection),
            (r"(?i)descuento|devoluci[oó]n|devolvieron", TransactionKind::Discount),
            (r"(?i)venta.*crédito|se.*vende|se.*realizó.*venta", TransactionKind::Income),
            (r"(?i)pagamos|pago.*de|cancelamos|liquidamos", TransactionKind::Payment),
            (r"(?i)compra.*(equipo|computadora|mueble)", TransactionKind::Asset),
            (r"(?i)préstamo|crédito.*bancario|financiamiento", TransactionKind::Liability),
            (r"(?i)aporte.*capital|inversión.*socio", TransactionKind::Equity),
            (r"(?i)gasto|electricidad|agua|teléfono|alquiler", TransactionKind::Expense),
        ]
        .iter()
        .map(|(p, kind)| (Regex::new(p).expect("classification pattern"), *kind))
        .collect()
    })
}

/// Classify a line of text into a [`TransactionKind`].
///
/// Evaluates the rule list in order and returns the first hit; defaults to
/// `Income` (the system's main use case is recording sales).
pub fn detect_transaction_kind(text: &str) -> TransactionKind {
    for (pattern, kind) in classification_rules() {
        if pattern.is_match(text) {
            return *kind;
        }
    }
    TransactionKind::Income
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_beats_income() {
        // "abono" + "compra" in one line: collection rule runs first
        let kind = detect_transaction_kind(
            "la tienda distribuidora Corripio realizó un abono de $300,000 a la compra realizada",
        );
        assert_eq!(kind, TransactionKind::Collection);
    }

    #[test]
    fn test_discount_from_devolvieron() {
        let kind = detect_transaction_kind("de la mercancía vendida a casa Suárez devolvieron $20,000.00");
        assert_eq!(kind, TransactionKind::Discount);
    }

    #[test]
    fn test_income_credit_sale() {
        let kind = detect_transaction_kind(
            "El 1 de mayo se realizó una venta a crédito por valor de $1,230,000.00 a Frank muebles",
        );
        assert_eq!(kind, TransactionKind::Income);
    }

    #[test]
    fn test_income_se_vende() {
        let kind = detect_transaction_kind("El 7 de mayo se vende mercancía a crédito por $1,300,000.00");
        assert_eq!(kind, TransactionKind::Income);
    }

    #[test]
    fn test_payment_reachable() {
        assert_eq!(detect_transaction_kind("pagamos $2,000,000 a proveedores"), TransactionKind::Payment);
        assert_eq!(detect_transaction_kind("liquidamos la factura pendiente"), TransactionKind::Payment);
    }

    #[test]
    fn test_asset_purchase() {
        assert_eq!(
            detect_transaction_kind("compra de equipo de cómputo por $1,500,000"),
            TransactionKind::Asset
        );
        assert_eq!(
            detect_transaction_kind("compra de mueble para la oficina por $300,000"),
            TransactionKind::Asset
        );
    }

    #[test]
    fn test_liability_prestamo() {
        assert_eq!(
            detect_transaction_kind("recibimos un préstamo de $5,000,000 del banco"),
            TransactionKind::Liability
        );
        assert_eq!(
            detect_transaction_kind("financiamiento aprobado por $2,500,000"),
            TransactionKind::Liability
        );
    }

    #[test]
    fn test_equity_aporte() {
        assert_eq!(
            detect_transaction_kind("aporte de capital del socio por $10,000,000"),
            TransactionKind::Equity
        );
    }

    #[test]
    fn test_expense_keywords() {
        assert_eq!(detect_transaction_kind("gasto de electricidad del mes"), TransactionKind::Expense);
        assert_eq!(detect_transaction_kind("alquiler del local comercial"), TransactionKind::Expense);
    }

    #[test]
    fn test_default_is_income() {
        assert_eq!(
            detect_transaction_kind("Supermercado Nacional entregó $850,000 por mercancía"),
            TransactionKind::Income
        );
        assert_eq!(detect_transaction_kind(""), TransactionKind::Income);
    }

    #[test]
    fn test_pago_accented_does_not_trigger_payment() {
        // "pagó" (pretérito) is not "pago.*de", so the line stays a sale
        assert_eq!(
            detect_transaction_kind("cliente Distribuidora Corripio pagó $1,200,000 por venta"),
            TransactionKind::Income
        );
    }

    #[test]
    fn test_kind_codes_and_labels() {
        assert_eq!(TransactionKind::Collection.code(), "collection");
        assert_eq!(TransactionKind::Discount.label(), "Descuento/Devolución");
    }
}
