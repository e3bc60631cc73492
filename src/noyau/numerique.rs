// src/noyau/numerique.rs
//
// Capacité “nombre” dont l’évaluateur a besoin, et rien de plus :
// lire un jeton + les quatre opérations vérifiées de num-traits.
// Une opération qui renvoie None (ex: division par zéro) annule l’évaluation.

use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub};

use super::rationnel::Rational;

pub trait Numeric: Sized + CheckedAdd + CheckedSub + CheckedMul + CheckedDiv {
    /// Lit un opérande (sans opérateur). `None` si le jeton est invalide.
    fn parse_token(token: &str) -> Option<Self>;
}

impl Numeric for Rational {
    fn parse_token(token: &str) -> Option<Self> {
        Rational::parse(token)
    }
}
