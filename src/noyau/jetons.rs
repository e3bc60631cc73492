// src/noyau/jetons.rs

use super::numerique::Numeric;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Minus,
    Star,
    Slash,
}

impl Op {
    pub fn from_char(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Plus),
            '-' => Some(Op::Minus),
            '*' => Some(Op::Star),
            '/' => Some(Op::Slash),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Minus => '-',
            Op::Star => '*',
            Op::Slash => '/',
        }
    }

    /// Applique l’opérateur ; `None` si le résultat est indéfini.
    pub fn apply<T: Numeric>(self, a: &T, b: &T) -> Option<T> {
        match self {
            Op::Plus => a.checked_add(b),
            Op::Minus => a.checked_sub(b),
            Op::Star => a.checked_mul(b),
            Op::Slash => a.checked_div(b),
        }
    }
}

fn est_operateur(c: char) -> bool {
    Op::from_char(c).is_some()
}

/// Flux de jetons : opérande de tête, puis (opérateur, opérande suivant).
///
/// Les opérandes sont des sous-chaînes brutes de l’entrée, éventuellement vides
/// ("2+" donne `suite = [(Plus, "")]`) : c’est l’évaluateur qui tranche.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Jetons<'a> {
    pub tete: &'a str,
    pub suite: Vec<(Op, &'a str)>,
}

/// Découpe `s` à chaque `+ - * /`.
///
/// Exemple:
///   "12+3/4" -> tete "12", suite [(Plus, "3"), (Slash, "4")]
pub fn tokenize(s: &str) -> Jetons<'_> {
    let mut operandes = s.split(est_operateur);

    // split produit toujours au moins un morceau (n opérateurs => n+1 morceaux)
    let tete = operandes.next().unwrap_or_default();

    let suite = s
        .matches(est_operateur)
        .filter_map(|m| m.chars().next().and_then(Op::from_char))
        .zip(operandes)
        .collect();

    Jetons { tete, suite }
}

/// Format utilitaire (debug) : jetons séparés par des espaces.
pub fn format_tokens(jetons: &Jetons<'_>) -> String {
    let mut out = vec![jetons.tete.to_string()];
    for (op, operande) in &jetons.suite {
        out.push(op.symbole().to_string());
        out.push(operande.to_string());
    }
    out.join(" ")
}
