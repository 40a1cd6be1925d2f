// 💵 Money Formatting
// Two decimals + comma grouping, the way the original journal sheets print amounts

/// Format an amount with thousands separators and two decimals: `1,230,000.00`
///
/// No currency symbol: auxiliaries and the journal table embed the bare
/// figure ("Frank Muebles 1,230,000.00").
pub fn money_plain(val: f64) -> String {
    let negative = val < 0.0;
    let abs = val.abs();
    let cents = format!("{:.2}", abs);
    let (int_part, dec_part) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let mut with_commas = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    let with_commas: String = with_commas.chars().rev().collect();

    if negative {
        format!("-{with_commas}.{dec_part}")
    } else {
        format!("{with_commas}.{dec_part}")
    }
}

/// Same as [`money_plain`] but with a `$` prefix, for totals display.
pub fn money(val: f64) -> String {
    if val < 0.0 {
        format!("-${}", money_plain(val.abs()))
    } else {
        format!("${}", money_plain(val))
    }
}
