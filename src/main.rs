// Diario General - CLI
// Reads a text file of free-form Spanish transaction descriptions, builds
// the double-entry journal and prints it, optionally exporting to CSV.

use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::path::Path;

use diario_general::{
    export_to_file, suggested_filename, BatchStatus, PlanRegistry, Session,
};
use diario_general::fmt::money;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Uso: diario-general <archivo.txt> <empresa> [plan] [salida.csv]");
        eprintln!("     plan: basic | medium | premium (por defecto: basic)");
        std::process::exit(1);
    }

    let input_path = Path::new(&args[1]);
    let company = args[2].as_str();
    let plan_id = args.get(3).map(String::as_str).unwrap_or("basic");
    let output_path = args.get(4).map(Path::new);

    run(input_path, company, plan_id, output_path)
}

fn run(input_path: &Path, company: &str, plan_id: &str, output_path: Option<&Path>) -> Result<()> {
    println!("📒 Diario General v{}", diario_general::VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let registry = PlanRegistry::with_defaults();
    let plan = match registry.find(plan_id) {
        Some(plan) => plan.clone(),
        None => bail!("Plan desconocido: {plan_id} (opciones: basic, medium, premium)"),
    };

    println!("\n📂 Leyendo {}...", input_path.display());
    let text = fs::read_to_string(input_path)
        .with_context(|| format!("Failed to read input file: {}", input_path.display()))?;

    let mut session = Session::new(company, plan);
    let outcome = session.process_text(&text);

    match outcome.status() {
        BatchStatus::NoValidTransactions => {
            println!("⚠️  No se encontraron transacciones válidas en el texto");
            return Ok(());
        }
        BatchStatus::Processed { count } => {
            println!("✓ {} transacciones procesadas", count);
        }
        BatchStatus::PartiallyProcessed { processed, dropped } => {
            println!("✓ {} transacciones procesadas", processed);
            println!(
                "⚠️  {} transacciones descartadas por el límite del plan {}",
                dropped,
                session.plan().name
            );
        }
    }

    println!("\n🔎 Transacciones detectadas:");
    for tx in session.transactions() {
        println!(
            "   {} [{}] {} - {}",
            tx.date.format("%Y-%m-%d"),
            tx.kind.label(),
            tx.client_name,
            money(tx.amount)
        );
    }

    print_journal(&session);

    if let Some(path) = output_path {
        println!("\n💾 Exportando a {}...", path.display());
        export_to_file(&session.journal_entries(), path)?;
        println!("✓ Exportación completada");
    } else {
        println!(
            "\n💡 Para exportar: diario-general {} \"{}\" {} {}",
            input_path.display(),
            company,
            session.plan().id,
            suggested_filename(company)
        );
    }

    Ok(())
}

fn print_journal(session: &Session) {
    let entries = session.journal_entries();

    println!("\n📊 Diario general de {}", session.company());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!(
        "{:<12} {:<38} {:>16} {:>16}",
        "Fecha", "Cuenta", "Débito", "Crédito"
    );

    for entry in &entries {
        let debit = if entry.debit > 0.0 { money(entry.debit) } else { String::new() };
        let credit = if entry.credit > 0.0 { money(entry.credit) } else { String::new() };
        println!(
            "{:<12} {:<38} {:>16} {:>16}",
            entry.date.format("%Y-%m-%d"),
            entry.account,
            debit,
            credit
        );
        println!("             └─ {}", entry.auxiliary);
    }

    let (debits, credits) = session.verification_totals();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!(
        "{:<51} {:>16} {:>16}",
        "Totales", money(debits), money(credits)
    );

    if debits == credits {
        println!("✅ El diario está balanceado");
    } else {
        println!("❌ Descuadre: débitos {} vs créditos {}", money(debits), money(credits));
    }
}
