//! src/app/reglages.rs
//!
//! Réglages de l’affichage (sans noyau, sans vue).
//!
//! Sources, par ordre de priorité :
//! - variables d’environnement `CALCULATRICE_ERREUR`, `CALCULATRICE_DIGITS`
//! - valeurs par défaut ci-dessous
//!
//! Une valeur invalide est ignorée (warning) : on retombe sur le défaut.

use tracing::warn;

/// Indicateur affiché quand l’évaluation ne produit rien.
pub const INDICATEUR_ERREUR_DEFAUT: &str = "Error";

/// Garde-fou : on borne la précision de la lecture décimale (anti-abus / anti-gel).
pub const DIGITS_MAX: usize = 200;

pub const ENV_ERREUR: &str = "CALCULATRICE_ERREUR";
pub const ENV_DIGITS: &str = "CALCULATRICE_DIGITS";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reglages {
    pub indicateur_erreur: String,
    /// `None` : pas de lecture décimale sous le résultat exact.
    pub digits: Option<usize>,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            indicateur_erreur: INDICATEUR_ERREUR_DEFAUT.to_string(),
            digits: None,
        }
    }
}

impl Reglages {
    /// Réglages lus dans l’environnement du processus.
    pub fn from_env() -> Self {
        Self::from_lookup(|cle| std::env::var(cle).ok())
    }

    /// Réglages lus via `lookup` (clé -> valeur), pour tester sans toucher à l’environnement.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut reglages = Self::default();

        if let Some(v) = lookup(ENV_ERREUR) {
            if v.trim().is_empty() {
                warn!(cle = ENV_ERREUR, "indicateur d’erreur vide ignoré");
            } else {
                reglages.indicateur_erreur = v;
            }
        }

        if let Some(v) = lookup(ENV_DIGITS) {
            match v.trim().parse::<usize>() {
                Ok(d) => reglages.set_digits(d),
                Err(e) => warn!(cle = ENV_DIGITS, valeur = %v, erreur = %e, "précision ignorée"),
            }
        }

        reglages
    }

    /// Garde-fou : limite digits.
    pub fn set_digits(&mut self, digits: usize) {
        if digits > DIGITS_MAX {
            warn!(digits, max = DIGITS_MAX, "précision bornée");
        }
        self.digits = Some(digits.min(DIGITS_MAX));
    }
}
