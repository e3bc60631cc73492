//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> lecture de la tête -> pli gauche→droite sur (op, opérande)
//!
//! Pas de précédence, pas de parenthèses : "2+3*4" = (2+3)*4 = 20.
//! Aucune logique propre à `Rational` ici : tout passe par `Numeric`.

use tracing::{debug, trace};

use super::erreur::EvalError;
use super::jetons::{format_tokens, tokenize, Jetons};
use super::numerique::Numeric;

/// Évalue `expr` ; `None` pour toute entrée invalide ou résultat indéfini.
///
/// ```
/// use calculatrice_fractions::noyau::{evaluate, Rational};
///
/// assert_eq!(evaluate::<Rational>("2+3*4"), Rational::new(20, 1).ok());
/// assert_eq!(evaluate::<Rational>("5/0"), None);
/// ```
pub fn evaluate<T: Numeric>(expr: &str) -> Option<T> {
    match try_evaluate(expr) {
        Ok(v) => Some(v),
        Err(e) => {
            debug!(expr, erreur = %e, "évaluation sans résultat");
            None
        }
    }
}

/// Comme `evaluate`, avec la raison de l’échec.
pub fn try_evaluate<T: Numeric>(expr: &str) -> Result<T, EvalError> {
    if expr.is_empty() {
        return Err(EvalError::EmptyInput);
    }

    let jetons = tokenize(expr);
    trace!(jetons = %format_tokens(&jetons), "jetons");

    fold_tokens(&jetons)
}

/// Pli gauche→droite d’un flux de jetons déjà découpé.
pub fn fold_tokens<T: Numeric>(jetons: &Jetons<'_>) -> Result<T, EvalError> {
    let tete = lire_operande(0, jetons.tete)?;

    jetons
        .suite
        .iter()
        .enumerate()
        .try_fold(tete, |acc, (i, (op, jeton))| {
            let index = i + 1;
            let rhs = lire_operande(index, jeton)?;
            let out = op.apply(&acc, &rhs).ok_or(EvalError::UndefinedOperation {
                index,
                operator: op.symbole(),
            })?;
            trace!(index, op = %op.symbole(), jeton, "étape");
            Ok(out)
        })
}

fn lire_operande<T: Numeric>(index: usize, jeton: &str) -> Result<T, EvalError> {
    if jeton.is_empty() {
        return Err(EvalError::MissingOperand { index });
    }
    T::parse_token(jeton).ok_or_else(|| EvalError::InvalidOperand {
        index,
        token: jeton.to_string(),
    })
}
