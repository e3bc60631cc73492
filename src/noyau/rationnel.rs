// src/noyau/rationnel.rs
//
// Rationnel exact (sans flottants).
// Invariants, vrais pour toute valeur construite :
// - denom > 0 (le signe est porté par le numérateur)
// - pgcd(|numer|, denom) == 1
// - denom == 0 n’est jamais représentable (DomainError à la construction)

use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, One, Signed, ToPrimitive, Zero};

use super::erreur::{DomainError, ParseRationalError};

/// Fraction exacte `numer/denom`, toujours irréductible.
///
/// Valeur immuable : chaque opération renvoie un nouveau `Rational`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rational {
    numer: BigInt,
    denom: BigInt,
}

impl Rational {
    /// Construit `numer/denom` réduit, dénominateur positif.
    ///
    /// ```
    /// use calculatrice_fractions::noyau::Rational;
    ///
    /// let r = Rational::new(6, -8).unwrap();
    /// assert_eq!(r.to_string(), "-3/4");
    /// assert!(Rational::new(1, 0).is_err());
    /// ```
    pub fn new(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> Result<Self, DomainError> {
        let denom = denom.into();
        if denom.is_zero() {
            return Err(DomainError::ZeroDenominator);
        }
        Ok(Self::reduit(numer.into(), denom))
    }

    /// Forme entière `n/1`.
    pub fn from_integer(numer: impl Into<BigInt>) -> Self {
        Self {
            numer: numer.into(),
            denom: BigInt::one(),
        }
    }

    /// Lecture d’un jeton `a` ou `a/b` ; `None` si la syntaxe est invalide
    /// ou si le dénominateur est nul.
    ///
    /// Seuls les deux premiers morceaux sont lus : `"1/2/3"` vaut `1/2`.
    pub fn parse(token: &str) -> Option<Self> {
        token.parse().ok()
    }

    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// Normalisation (signe + réduction). Appelant : `denom != 0`.
    fn reduit(mut numer: BigInt, mut denom: BigInt) -> Self {
        debug_assert!(!denom.is_zero());

        if denom.is_negative() {
            numer = -numer;
            denom = -denom;
        }

        // plus grand diviseur commun dans [1, denom] ; pgcd(0, d) = d => 0/1
        let g = numer.gcd(&denom);
        if !g.is_one() {
            numer /= &g;
            denom /= &g;
        }

        Self { numer, denom }
    }

    /* ------------------------ Rationnel ∘ Rationnel ------------------------ */

    pub fn add_rational(&self, rhs: &Rational) -> Rational {
        Self::reduit(
            &self.numer * &rhs.denom + &self.denom * &rhs.numer,
            &self.denom * &rhs.denom,
        )
    }

    pub fn subtract_rational(&self, rhs: &Rational) -> Rational {
        Self::reduit(
            &self.numer * &rhs.denom - &self.denom * &rhs.numer,
            &self.denom * &rhs.denom,
        )
    }

    pub fn multiply_rational(&self, rhs: &Rational) -> Rational {
        Self::reduit(&self.numer * &rhs.numer, &self.denom * &rhs.denom)
    }

    /// Échoue si `rhs` est nul.
    pub fn divide_rational(&self, rhs: &Rational) -> Result<Rational, DomainError> {
        Rational::new(&self.numer * &rhs.denom, &self.denom * &rhs.numer)
    }

    /* ------------------------ Rationnel ∘ entier ------------------------ */

    pub fn add_integer(&self, x: impl Into<BigInt>) -> Rational {
        let x: BigInt = x.into();
        Self::reduit(&self.numer + &self.denom * x, self.denom.clone())
    }

    pub fn subtract_integer(&self, x: impl Into<BigInt>) -> Rational {
        let x: BigInt = x.into();
        Self::reduit(&self.numer - &self.denom * x, self.denom.clone())
    }

    pub fn multiply_integer(&self, x: impl Into<BigInt>) -> Rational {
        let x: BigInt = x.into();
        Self::reduit(&self.numer * x, self.denom.clone())
    }

    /// Échoue si `x == 0`.
    pub fn divide_integer(&self, x: impl Into<BigInt>) -> Result<Rational, DomainError> {
        let x: BigInt = x.into();
        Rational::new(self.numer.clone(), &self.denom * x)
    }

    /* ------------------------ Unaires ------------------------ */

    pub fn negate(&self) -> Rational {
        Self {
            numer: -&self.numer,
            denom: self.denom.clone(),
        }
    }

    pub fn reciprocal(&self) -> Result<Rational, DomainError> {
        Rational::new(self.denom.clone(), self.numer.clone())
    }

    /// Approximation flottante `numer / denom`.
    pub fn to_f64(&self) -> f64 {
        BigRational::new_raw(self.numer.clone(), self.denom.clone())
            .to_f64()
            .unwrap_or(f64::NAN)
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::from_integer(0)
    }
}

impl FromStr for Rational {
    type Err = ParseRationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut morceaux = s.split('/');

        // split renvoie toujours au moins un morceau
        let tete = morceaux.next().unwrap_or_default();
        let numer = lire_entier(tete).ok_or_else(|| ParseRationalError::Numerator(tete.into()))?;

        let denom = match morceaux.next() {
            Some(d) => lire_entier(d).ok_or_else(|| ParseRationalError::Denominator(d.into()))?,
            None => BigInt::one(),
        };

        Ok(Rational::new(numer, denom)?)
    }
}

/// Entier décimal : signe optionnel puis chiffres ASCII uniquement
/// (pas d’espaces, pas de `_`).
fn lire_entier(s: &str) -> Option<BigInt> {
    let chiffres = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
    if chiffres.is_empty() || !chiffres.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let n = BigInt::parse_bytes(chiffres.as_bytes(), 10)?;
    Some(if s.starts_with('-') { -n } else { n })
}

/* ------------------------ Conversions ------------------------ */

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Rational::from_integer(n)
    }
}

impl From<BigInt> for Rational {
    fn from(n: BigInt) -> Self {
        Rational::from_integer(n)
    }
}

impl From<Rational> for BigRational {
    fn from(r: Rational) -> Self {
        // déjà irréductible, dénominateur positif
        BigRational::new_raw(r.numer, r.denom)
    }
}

impl TryFrom<BigRational> for Rational {
    type Error = DomainError;

    fn try_from(r: BigRational) -> Result<Self, Self::Error> {
        Rational::new(r.numer().clone(), r.denom().clone())
    }
}

/* ------------------------ Ordre ------------------------ */

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // dénominateurs > 0 : le produit croisé préserve l’ordre
        (&self.numer * &other.denom).cmp(&(&other.numer * &self.denom))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/* ------------------------ Opérateurs (enveloppes minces) ------------------------ */

impl Add<&Rational> for &Rational {
    type Output = Rational;
    fn add(self, rhs: &Rational) -> Rational {
        self.add_rational(rhs)
    }
}

impl Add for Rational {
    type Output = Rational;
    fn add(self, rhs: Rational) -> Rational {
        self.add_rational(&rhs)
    }
}

impl Add<i64> for Rational {
    type Output = Rational;
    fn add(self, rhs: i64) -> Rational {
        self.add_integer(rhs)
    }
}

impl Sub<&Rational> for &Rational {
    type Output = Rational;
    fn sub(self, rhs: &Rational) -> Rational {
        self.subtract_rational(rhs)
    }
}

impl Sub for Rational {
    type Output = Rational;
    fn sub(self, rhs: Rational) -> Rational {
        self.subtract_rational(&rhs)
    }
}

impl Sub<i64> for Rational {
    type Output = Rational;
    fn sub(self, rhs: i64) -> Rational {
        self.subtract_integer(rhs)
    }
}

impl Mul<&Rational> for &Rational {
    type Output = Rational;
    fn mul(self, rhs: &Rational) -> Rational {
        self.multiply_rational(rhs)
    }
}

impl Mul for Rational {
    type Output = Rational;
    fn mul(self, rhs: Rational) -> Rational {
        self.multiply_rational(&rhs)
    }
}

impl Mul<i64> for Rational {
    type Output = Rational;
    fn mul(self, rhs: i64) -> Rational {
        self.multiply_integer(rhs)
    }
}

/// # Panics
///
/// Si `rhs` est nul (comme la division entière). Voir `divide_rational`.
impl Div<&Rational> for &Rational {
    type Output = Rational;
    fn div(self, rhs: &Rational) -> Rational {
        match self.divide_rational(rhs) {
            Ok(r) => r,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Div for Rational {
    type Output = Rational;
    fn div(self, rhs: Rational) -> Rational {
        &self / &rhs
    }
}

/// # Panics
///
/// Si `rhs == 0`. Voir `divide_integer`.
impl Div<i64> for Rational {
    type Output = Rational;
    fn div(self, rhs: i64) -> Rational {
        match self.divide_integer(rhs) {
            Ok(r) => r,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Neg for Rational {
    type Output = Rational;
    fn neg(self) -> Rational {
        Rational {
            numer: -self.numer,
            denom: self.denom,
        }
    }
}

impl Neg for &Rational {
    type Output = Rational;
    fn neg(self) -> Rational {
        self.negate()
    }
}

/* ------------------------ num-traits ------------------------ */

impl Zero for Rational {
    fn zero() -> Self {
        Rational::default()
    }

    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Rational::from_integer(1)
    }
}

impl CheckedAdd for Rational {
    fn checked_add(&self, v: &Self) -> Option<Self> {
        Some(self.add_rational(v))
    }
}

impl CheckedSub for Rational {
    fn checked_sub(&self, v: &Self) -> Option<Self> {
        Some(self.subtract_rational(v))
    }
}

impl CheckedMul for Rational {
    fn checked_mul(&self, v: &Self) -> Option<Self> {
        Some(self.multiply_rational(v))
    }
}

impl CheckedDiv for Rational {
    fn checked_div(&self, v: &Self) -> Option<Self> {
        self.divide_rational(v).ok()
    }
}
