// src/app.rs
//
// Calculatrice fractions — module App (racine)
// --------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + reglages.rs)
// - Ré-exporter AppCalc / Reglages (pour main.rs)
//
// Le noyau ne connaît rien de l’affichage : c’est ici (et seulement ici)
// qu’un résultat absent devient l’indicateur d’erreur.

pub mod etat;
pub mod reglages;

// Ré-exports pratiques : `use calculatrice_fractions::app::{AppCalc, Reglages};`
pub use etat::AppCalc;
pub use reglages::Reglages;
