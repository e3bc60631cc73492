// src/noyau/lecture.rs
//
// Lecture décimale tronquée d’un rationnel exact.
// Vue exacte de `to_f64` : pas d’arrondi flottant, troncature vers zéro.

use num_bigint::BigInt;
use num_traits::Signed;

use super::rationnel::Rational;

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal.
pub fn scaled_to_decimal(scaled: &BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    let abs = scaled.abs();

    let scale = pow10(digits);
    let int_part = &abs / &scale;
    let frac_part = &abs % &scale;

    let signe = if neg { "-" } else { "" };

    if digits == 0 {
        return format!("{signe}{int_part}");
    }

    // zéros de tête de la partie fractionnaire
    format!("{signe}{int_part}.{:0>digits$}", frac_part.to_str_radix(10))
}

/// r -> entier “scalé” = trunc(r * 10^digits) (troncature vers zéro)
fn rational_scaled(r: &Rational, digits: usize) -> BigInt {
    (r.numer() * pow10(digits)) / r.denom()
}

/// Lecture décimale de `r` avec exactement `digits` chiffres après la virgule.
///
/// ```
/// use calculatrice_fractions::noyau::{decimal_reading, Rational};
///
/// let r = Rational::new(-2, 3).unwrap();
/// assert_eq!(decimal_reading(&r, 4), "-0.6666");
/// ```
pub fn decimal_reading(r: &Rational, digits: usize) -> String {
    // -1/1000 à 2 chiffres : troncature à 0, donc "0.00" et non "-0.00"
    scaled_to_decimal(&rational_scaled(r, digits), digits)
}
