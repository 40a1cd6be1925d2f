// 📝 Concept & Payment-Terms Extraction
// Pure keyword-to-label lookups, first match wins, static defaults.

use regex::Regex;
use std::sync::OnceLock;

/// Default concept when nothing in the line says otherwise.
pub const DEFAULT_CONCEPT: &str = "venta de mercancía";

// Ordered (pattern, label) pairs. The order encodes tie-break policy the
// same way the classifier does: a line mentioning both "abono" and
// "préstamo" reads as "abono a cuenta".
fn concept_rules() -> &'static [(Regex, &'static str)] {
    static RULES: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    RULES.get_or_init(|| {
        [
            (r"(?i)venta.*mercanc[ií]a", "venta de mercancía"),
            (r"(?i)abono|abonó", "abono a cuenta"),
            (r"(?i)devoluci[oó]n|devolvieron", "descuento y devolución de venta"),
            (r"(?i)consultor[ií]a", "servicios de consultoría"),
            (r"(?i)préstamo|crédito", "préstamo bancario"),
            (r"(?i)aporte.*capital", "aporte de capital"),
            (r"(?i)compra.*(equipo|computadora)", "compra de activos"),
        ]
        .iter()
        .map(|(p, label)| (Regex::new(p).expect("concept pattern"), *label))
        .collect()
    })
}

fn explicit_days() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(\d+)\s*d[ií]as?").expect("days pattern"))
}

fn cash_terms() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)contado|efectivo").expect("cash pattern"))
}

/// Derive a short human-readable concept for the operation.
/// Always returns a non-empty label; defaults to [`DEFAULT_CONCEPT`].
pub fn extract_concept(text: &str) -> String {
    for (pattern, label) in concept_rules() {
        if pattern.is_match(text) {
            return (*label).to_string();
        }
    }
    DEFAULT_CONCEPT.to_string()
}

/// Derive the payment terms, e.g. "30 días" or "contado".
/// Returns `""` when the line says nothing about terms.
pub fn extract_payment_terms(text: &str) -> String {
    if let Some(caps) = explicit_days().captures(text) {
        return format!("{} días", &caps[1]);
    }
    if cash_terms().is_match(text) {
        return "contado".to_string();
    }
    String::new()
}
