// 📤 CSV Export - Diario General
// Serializes the derived journal view to a comma-delimited document. The
// zero side of each line exports as a blank cell, matching the printed
// journal sheets.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::fmt::money_plain;
use crate::journal::JournalEntry;

const HEADERS: [&str; 5] = ["Fecha", "Nombre de la Cuenta", "Auxiliar", "Débito", "Crédito"];

/// Write journal entries as CSV to any writer. Always emits the header row,
/// even for an empty journal.
pub fn write_csv<W: Write>(entries: &[JournalEntry], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(HEADERS)
        .context("Failed to write CSV header")?;

    for entry in entries {
        let debit = if entry.debit > 0.0 { money_plain(entry.debit) } else { String::new() };
        let credit = if entry.credit > 0.0 { money_plain(entry.credit) } else { String::new() };

        csv_writer
            .write_record([
                entry.date.format("%Y-%m-%d").to_string(),
                entry.account.clone(),
                entry.auxiliary.clone(),
                debit,
                credit,
            ])
            .context("Failed to write CSV record")?;
    }

    csv_writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}

/// Export to a file on disk.
pub fn export_to_file(entries: &[JournalEntry], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create export file: {}", path.display()))?;
    write_csv(entries, file)
}

/// Suggested download name: `diario-general-<empresa>.csv`, lowercased with
/// spaces collapsed to dashes.
pub fn suggested_filename(company: &str) -> String {
    let slug: String = company
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        "diario-general-empresa.csv".to_string()
    } else {
        format!("diario-general-{}.csv", slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(account: &str, debit: f64, credit: f64) -> JournalEntry {
        JournalEntry {
            date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            account: account.to_string(),
            auxiliary: "Frank Muebles 1,230,000.00".to_string(),
            debit,
            credit,
            transaction_id: "tx-1".to_string(),
        }
    }

    fn export_to_string(entries: &[JournalEntry]) -> String {
        let mut buf = Vec::new();
        write_csv(entries, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_header_row_always_present() {
        let out = export_to_string(&[]);
        assert_eq!(out.trim_end(), "Fecha,Nombre de la Cuenta,Auxiliar,Débito,Crédito");
    }

    #[test]
    fn test_zero_side_is_blank_cell() {
        let out = export_to_string(&[entry("cuenta por cobrar", 1230000.0, 0.0)]);
        let line = out.lines().nth(1).unwrap();
        assert!(line.starts_with("2025-05-01,cuenta por cobrar,"));
        assert!(line.contains("\"1,230,000.00\","));
        assert!(line.ends_with(','), "credit cell must be blank: {line}");
    }

    #[test]
    fn test_credit_line() {
        let out = export_to_string(&[entry("venta de mercancía", 0.0, 1230000.0)]);
        let line = out.lines().nth(1).unwrap();
        assert!(line.ends_with("\"1,230,000.00\""));
    }

    #[test]
    fn test_auxiliary_with_comma_is_quoted() {
        // Grouped amounts in auxiliaries contain commas; the writer must quote
        let out = export_to_string(&[entry("cuenta por cobrar", 1230000.0, 0.0)]);
        assert!(out.contains("\"Frank Muebles 1,230,000.00\""));
    }

    #[test]
    fn test_suggested_filename() {
        assert_eq!(
            suggested_filename("Consultoría Integral SA"),
            "diario-general-consultoría-integral-sa.csv"
        );
        assert_eq!(suggested_filename("  "), "diario-general-empresa.csv");
    }
}
