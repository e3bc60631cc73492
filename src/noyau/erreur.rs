// src/noyau/erreur.rs
//
// Deux canaux d’erreur, à ne pas confondre :
// - DomainError : construction invalide d’un rationnel (dénominateur nul).
// - ParseRationalError / EvalError : échecs attendus (saisie utilisateur),
//   que `evaluate` transforme en résultat absent.

use thiserror::Error;

/// Faute de domaine : un rationnel de dénominateur nul n’est pas représentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("denominator cannot be zero")]
    ZeroDenominator,
}

/// Échec de lecture d’un jeton `a` ou `a/b`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseRationalError {
    #[error("invalid numerator: {0:?}")]
    Numerator(String),

    #[error("invalid denominator: {0:?}")]
    Denominator(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Raison pour laquelle une évaluation ne produit pas de valeur.
///
/// `index` compte les opérandes depuis 0 (l’opérande de tête).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("empty expression")]
    EmptyInput,

    #[error("missing operand at position {index}")]
    MissingOperand { index: usize },

    #[error("invalid operand {token:?} at position {index}")]
    InvalidOperand { index: usize, token: String },

    #[error("undefined result for '{operator}' at position {index}")]
    UndefinedOperation { index: usize, operator: char },
}
