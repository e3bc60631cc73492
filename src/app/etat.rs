//! src/app/etat.rs
//!
//! État d’affichage de la calculatrice (sans vue).
//!
//! Rôle : accumuler la saisie, appeler le noyau UNE fois par évaluation,
//! puis montrer soit `"<entrée>=<résultat>"`, soit l’indicateur d’erreur.
//!
//! Contrats :
//! - Aucune logique numérique ici (tout passe par `noyau::evaluate`).
//! - Actions déterministes, sans effet de bord caché.

use tracing::{debug, info};

use super::reglages::Reglages;
use crate::noyau::{decimal_reading, evaluate, format_resultat, Rational};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub affichage: String,       // ce que l’écran montre
    pub lecture: Option<String>, // lecture décimale (si digits réglé et succès)
    pub erreur: bool,            // true si la dernière évaluation a échoué

    // --- paramètres ---
    pub reglages: Reglages,

    // Après "=", la saisie suivante repart d’une entrée vide.
    termine: bool,
}

impl AppCalc {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            reglages,
            ..Self::default()
        }
    }

    /* ------------------------ Actions “boutons” ------------------------ */

    /// Ajoute un chiffre, un opérateur ou un morceau de texte à l’entrée.
    pub fn push(&mut self, s: &str) {
        if self.termine {
            self.entree.clear();
            self.lecture = None;
            self.erreur = false;
            self.termine = false;
        }
        self.entree.push_str(s);
        self.affichage = self.entree.clone();
    }

    /// DEL : retire le dernier caractère saisi.
    pub fn backspace(&mut self) {
        if self.termine {
            return;
        }
        self.entree.pop();
        self.affichage = self.entree.clone();
    }

    /// C : effacer seulement l’entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.affichage.clear();
        self.termine = false;
    }

    /// AC : remise à zéro totale (réglages conservés).
    pub fn reset_total(&mut self) {
        let reglages = std::mem::take(&mut self.reglages);
        *self = Self::new(reglages);
    }

    /// "=" : évalue l’entrée courante et met l’affichage à jour.
    ///
    /// Renvoie le résultat exact, `None` si l’entrée est invalide.
    pub fn evaluer(&mut self) -> Option<Rational> {
        let resultat = evaluate::<Rational>(&self.entree);
        self.termine = true;

        match &resultat {
            Some(v) => {
                info!(entree = %self.entree, resultat = %v, "évaluation");
                self.affichage = format_resultat(&self.entree, v);
                self.lecture = self.reglages.digits.map(|d| decimal_reading(v, d));
                self.erreur = false;
            }
            None => {
                debug!(entree = %self.entree, "évaluation en erreur");
                self.affichage = self.reglages.indicateur_erreur.clone();
                self.lecture = None;
                self.erreur = true;
            }
        }

        resultat
    }
}
