//! Calculatrice fractions
//!
//! - `noyau` : rationnels exacts + évaluateur gauche→droite générique
//! - `app`   : état d’affichage et réglages (collaborateur du noyau)
//!
//! ```
//! use calculatrice_fractions::noyau::{evaluate, Rational};
//!
//! // gauche→droite : (2+3)*4
//! let v = evaluate::<Rational>("2+3*4").unwrap();
//! assert_eq!(v.to_string(), "20");
//!
//! let v = evaluate::<Rational>("3/4+1").unwrap();
//! assert_eq!(v.to_string(), "7/4");
//! ```

pub mod app;
pub mod noyau;
