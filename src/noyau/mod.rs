//! Noyau exact
//!
//! Organisation interne :
//! - rationnel.rs : Rational (construction réduite, arithmétique, opérateurs)
//! - format.rs    : affichage EXACT ("n" ou "n/d")
//! - lecture.rs   : lecture décimale tronquée
//! - erreur.rs    : DomainError, ParseRationalError, EvalError
//! - numerique.rs : capacité Numeric exigée par l’évaluateur
//! - jetons.rs    : tokenisation (tête + paires opérateur/opérande)
//! - eval.rs      : pli gauche→droite

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod lecture;
pub mod numerique;
pub mod rationnel;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use erreur::{DomainError, EvalError, ParseRationalError};
pub use eval::{evaluate, try_evaluate};
pub use format::format_resultat;
pub use lecture::decimal_reading;
pub use numerique::Numeric;
pub use rationnel::Rational;
