// 🏪 Counterparty Extraction
// Finds the client/company name in a sentence. Pattern order is priority
// order: business-entity keywords are the strongest signal, bare
// prepositional spans the weakest.

use regex::Regex;
use std::sync::OnceLock;

/// A counterparty name must land strictly between these lengths (in chars)
/// to be accepted. Shorter is noise, longer means the pattern swallowed
/// half the sentence.
const MIN_NAME_CHARS: usize = 2;
const MAX_NAME_CHARS: usize = 50;

fn client_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            // Entity keyword + name span: "casa Suárez", "distribuidora Corripio".
            // The keyword stays in the capture ("Casa Suárez" is the full name).
            r"(?i)\b((?:distribuidora|casa|supermercado|tienda|empresa|compañía|mueblería|almacenes)\s+[a-záéíóúñ\s]+?)(?:\s+(?:pagó|pagaron|pago|realizó|abonó|abonaron|devolvieron|devolvió|por)|\s*,|$)",
            // "cliente X" prefix
            r"(?i)cliente\s+([a-záéíóúñ\s]+?)(?:\s+(?:pagó|pagaron|pago|por)|\s*,|$)",
            // Capitalized span right before an action verb: "Juan Pérez pagó"
            r"([A-ZÁÉÍÓÚÑ][a-záéíóúñ]*(?:\s+[A-Za-zÁÉÍÓÚÑáéíóúñ]+){0,2})\s+(?:pagó|pagaron|pago|realizó|abonó|devolvieron)",
            // "a <Nombre>" / "de <Nombre>" prepositional span, capitalized
            r"\b(?:[Aa]|[Dd]e)\s+([A-ZÁÉÍÓÚÑ][A-Za-zÁÉÍÓÚÑáéíóúñ]*(?:\s+[a-zA-ZáéíóúñÁÉÍÓÚÑ]+){0,2})",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("client pattern"))
        .collect()
    })
}

// Filler words stripped out of a raw match. Month names are included because
// date phrases ("de mayo se realizó") leak into verb-adjacent spans.
fn stop_words() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)\b(por|de|del|la|el|en|con|para|que|se|un|una|y|a|o|tienda|enero|febrero|marzo|abril|mayo|junio|julio|agosto|septiembre|octubre|noviembre|diciembre)\b",
        )
        .expect("stop words")
    })
}

/// Extract a counterparty name from a line of free text.
///
/// Tries the patterns in priority order. A match is cleaned (stop-words
/// stripped, each word title-cased) and accepted only if its length is
/// strictly between 2 and 50 chars; a rejected match falls through to the
/// next pattern. Returns `""` as the "no client found" sentinel.
pub fn extract_client_name(text: &str) -> String {
    for pattern in client_patterns() {
        let Some(caps) = pattern.captures(text) else {
            continue;
        };
        let Some(m) = caps.get(1) else { continue };

        let stripped = stop_words().replace_all(m.as_str(), "");
        let name = title_case(&stripped);

        let len = name.chars().count();
        if len > MIN_NAME_CHARS && len < MAX_NAME_CHARS {
            return name;
        }
    }

    String::new()
}

/// Title-case every word: "frank muebles" → "Frank Muebles".
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
