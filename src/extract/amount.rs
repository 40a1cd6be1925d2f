// 💰 Amount Extraction
// Ordered regex patterns over uncurated Spanish text, first plausible match wins

use regex::Regex;
use std::sync::OnceLock;

/// Minimum plausible transaction amount. Anything below this is assumed to be
/// an incidental number in the sentence (a day, a quantity, an invoice number)
/// rather than the monetary value of the operation.
pub const MIN_AMOUNT: f64 = 1000.0;

// ============================================================================
// PATTERNS (priority order, earlier patterns are more specific)
// ============================================================================

fn amount_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            // $ con agrupación de miles: "$1,230,000.00"
            r"\$\s*([0-9]{1,3}(?:,[0-9]{3})*(?:\.[0-9]{1,2})?)",
            // $ sin agrupación: "$850000"
            r"\$\s*([0-9]+(?:\.[0-9]{1,2})?)",
            // "por valor de $1,230,000.00" / "por valor de 1,230,000"
            r"(?i)por\s+valor\s+de\s+\$?\s*([0-9]{1,3}(?:,[0-9]{3})*(?:\.[0-9]{1,2})?)",
            // Peso dominicano: "RD$300,000"
            r"(?i)rd\$\s*([0-9]{1,3}(?:,[0-9]{3})*(?:\.[0-9]{1,2})?)",
            // "por 300,000"
            r"(?i)por\s+\$?\s*([0-9]{1,3}(?:,[0-9]{3})*(?:\.[0-9]{1,2})?)",
            // Comma-grouped number anywhere (at least one group)
            r"([0-9]{1,3}(?:,[0-9]{3})+(?:\.[0-9]{1,2})?)",
            // Bare number of at least 6 digits
            r"([0-9]{6,}(?:\.[0-9]{1,2})?)",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("amount pattern"))
        .collect()
    })
}

/// Scan a line of free text for a monetary value.
///
/// Returns the first match (pattern order, then text order) that parses to a
/// number `>= MIN_AMOUNT` after removing thousands separators. Returns `0.0`
/// as the "no amount found" sentinel; absence is an expected outcome on
/// uncurated text, not an error.
///
/// Guarantees: never panics, never returns NaN, never returns a negative.
pub fn extract_amount(text: &str) -> f64 {
    let clean: String = text.split_whitespace().collect::<Vec<_>>().join(" ");

    for pattern in amount_patterns() {
        for caps in pattern.captures_iter(&clean) {
            let Some(m) = caps.get(1) else { continue };
            let number_str = m.as_str().replace(',', "");
            if let Ok(number) = number_str.parse::<f64>() {
                if number.is_finite() && number >= MIN_AMOUNT {
                    return number;
                }
            }
        }
    }

    0.0
}
