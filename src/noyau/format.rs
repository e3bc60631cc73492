// src/noyau/format.rs
//
// Affichage EXACT d’un rationnel.
// - entier      : "n"
// - zéro        : "0"
// - sinon       : "n/d" (irréductible, signe sur n)
//
// Toujours relisible par `Rational::parse` (aller-retour garanti).

use std::fmt;

use num_traits::{One, Zero};

use super::rationnel::Rational;

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.numer();
        let d = self.denom();
        if d.is_one() || n.is_zero() {
            write!(f, "{n}")
        } else {
            write!(f, "{n}/{d}")
        }
    }
}

/// Ligne d’affichage après une évaluation réussie : `"<entrée>=<résultat>"`.
pub fn format_resultat(entree: &str, resultat: &Rational) -> String {
    format!("{entree}={resultat}")
}
