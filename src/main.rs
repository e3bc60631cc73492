// src/main.rs
//
// Calculatrice fractions — point d’entrée en ligne de commande
// ------------------------------------------------------------
// Usage:
// - `calculatrice 3/4+1`    : évalue les arguments (concaténés) et affiche "3/4+1=7/4"
// - `calculatrice`          : évalue chaque ligne de l’entrée standard
//
// Environnement:
// - RUST_LOG               : filtre de logs (défaut "warn"), logs sur stderr
// - CALCULATRICE_ERREUR    : indicateur d’erreur (défaut "Error")
// - CALCULATRICE_DIGITS    : affiche aussi une lecture décimale tronquée

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use calculatrice_fractions::app::{AppCalc, Reglages};

fn main() -> io::Result<ExitCode> {
    init_tracing();

    let mut app = AppCalc::new(Reglages::from_env());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        // "1 + 2" passé en plusieurs arguments => "1+2"
        afficher(&mut app, &args.concat(), &mut out)?;
        return Ok(if app.erreur {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        });
    }

    for ligne in io::stdin().lock().lines() {
        let ligne = ligne?;
        let s = ligne.trim();
        if s.is_empty() {
            continue;
        }
        afficher(&mut app, s, &mut out)?;
    }

    Ok(ExitCode::SUCCESS)
}

/// Une saisie complète : C, frappe, "=", puis écran.
fn afficher(app: &mut AppCalc, expr: &str, out: &mut impl Write) -> io::Result<()> {
    app.clear_entree();
    app.push(expr);
    app.evaluer();

    writeln!(out, "{}", app.affichage)?;
    if let Some(lecture) = &app.lecture {
        writeln!(out, "≈ {lecture}")?;
    }
    Ok(())
}

/// Logs structurés sur stderr (stdout reste réservé à l’affichage).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
