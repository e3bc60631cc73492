//! Tests scientifiques (campagne) : lois algébriques sur des rationnels tirés au hasard.
//!
//! - RNG déterministe (seed fixe) : même campagne à chaque exécution
//! - valeurs bornées (numérateurs/dénominateurs petits, produits exacts)
//! - budget temps global

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use super::{evaluate, Rational};

/* ------------------------ RNG déterministe minimal ------------------------ */

struct Rng {
    state: u64,
}

impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    /// entier dans [-max, max]
    fn entier(&mut self, max: i64) -> i64 {
        (self.next_u32() as i64 % (2 * max + 1)) - max
    }
    /// entier non nul dans [-max, max]
    fn non_nul(&mut self, max: i64) -> i64 {
        loop {
            let v = self.entier(max);
            if v != 0 {
                return v;
            }
        }
    }
    fn rationnel(&mut self) -> Rational {
        let n = self.entier(60);
        let d = self.non_nul(60);
        Rational::new(n, d).unwrap_or_else(|e| panic!("{n}/{d}: {e}"))
    }
}

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

const TIRAGES: usize = 300;

/* ------------------------ Construction ------------------------ */

#[test]
fn sci_normalisation_du_signe() {
    let mut rng = Rng::new(0x5EED_u64);
    for _ in 0..TIRAGES {
        let n = rng.entier(1000);
        let d = rng.non_nul(1000);
        assert_eq!(Rational::new(n, d), Rational::new(-n, -d), "{n}/{d}");
    }
}

#[test]
fn sci_irreductible_et_denominateur_positif() {
    let mut rng = Rng::new(0xFACE_u64);
    for _ in 0..TIRAGES {
        let x = rng.rationnel();
        assert!(x.denom().is_positive(), "{x:?}");
        assert!(x.numer().abs().gcd(x.denom()).is_one(), "{x:?}");
    }
}

/// Réduction par recherche descendante du plus grand diviseur commun dans
/// [1, d] : doit coïncider avec la réduction par pgcd.
#[test]
fn sci_reduction_recherche_descendante() {
    fn reduit_naif(mut n: i64, mut d: i64) -> (i64, i64) {
        if d < 0 {
            n = -n;
            d = -d;
        }
        for g in (1..=d).rev() {
            if n % g == 0 && d % g == 0 {
                return (n / g, d / g);
            }
        }
        (n, d)
    }

    for n in -40..=40 {
        for d in (-40..=40).filter(|d| *d != 0) {
            let x = Rational::new(n, d).unwrap();
            let (rn, rd) = reduit_naif(n, d);
            assert_eq!(x.numer(), &BigInt::from(rn), "{n}/{d}");
            assert_eq!(x.denom(), &BigInt::from(rd), "{n}/{d}");
        }
    }
}

#[test]
fn sci_denominateur_nul_toujours_refuse() {
    let mut rng = Rng::new(0xDEAD_u64);
    for _ in 0..TIRAGES {
        assert!(Rational::new(rng.entier(1_000_000), 0).is_err());
    }
}

#[test]
fn sci_aller_retour_texte() {
    let mut rng = Rng::new(0xBEEF_u64);
    for _ in 0..TIRAGES {
        let x = rng.rationnel();
        assert_eq!(Rational::parse(&x.to_string()), Some(x.clone()), "{x}");
    }
}

/* ------------------------ Lois arithmétiques ------------------------ */

#[test]
fn sci_commutativite() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);
    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..TIRAGES {
        budget(t0, max);
        let a = rng.rationnel();
        let b = rng.rationnel();
        assert_eq!(a.add_rational(&b), b.add_rational(&a));
        assert_eq!(a.multiply_rational(&b), b.multiply_rational(&a));
    }
}

#[test]
fn sci_inverses() {
    let mut rng = Rng::new(0xABCD_u64);
    for _ in 0..TIRAGES {
        let a = rng.rationnel();
        assert!(a.add_rational(&a.negate()).is_zero(), "{a}");

        if !a.is_zero() {
            let inv = a.reciprocal().unwrap();
            assert!(a.multiply_rational(&inv).is_one(), "{a}");
        } else {
            assert!(a.reciprocal().is_err());
        }
    }
}

#[test]
fn sci_distributivite() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);
    let mut rng = Rng::new(0x1234_5678_u64);

    for _ in 0..TIRAGES {
        budget(t0, max);
        let a = rng.rationnel();
        let b = rng.rationnel();
        let c = rng.rationnel();
        assert_eq!(
            a.multiply_rational(&b.add_rational(&c)),
            a.multiply_rational(&b).add_rational(&a.multiply_rational(&c))
        );
    }
}

#[test]
fn sci_formes_entieres_coherentes() {
    let mut rng = Rng::new(0x0BAD_F00D_u64);
    for _ in 0..TIRAGES {
        let a = rng.rationnel();
        let x = rng.entier(50);
        let rx = Rational::from_integer(x);

        assert_eq!(a.add_integer(x), a.add_rational(&rx));
        assert_eq!(a.subtract_integer(x), a.subtract_rational(&rx));
        assert_eq!(a.multiply_integer(x), a.multiply_rational(&rx));
        assert_eq!(a.divide_integer(x), a.divide_rational(&rx));
    }
}

#[test]
fn sci_soustraction_et_division_inverses() {
    let mut rng = Rng::new(0x7777_u64);
    for _ in 0..TIRAGES {
        let a = rng.rationnel();
        let b = rng.rationnel();
        assert_eq!(a.add_rational(&b).subtract_rational(&b), a);
        if !b.is_zero() {
            let q = a.divide_rational(&b).unwrap();
            assert_eq!(q.multiply_rational(&b), a);
        }
    }
}

/* ------------------------ Évaluateur vs arithmétique directe ------------------------ */

#[test]
fn sci_evaluateur_pli_gauche() {
    let mut rng = Rng::new(0xE7A1_u64);
    for _ in 0..TIRAGES {
        let a = rng.entier(30).abs();
        let b = rng.entier(30).abs();
        let c = rng.non_nul(30).abs();

        let attendu = Rational::from_integer(a)
            .add_integer(b)
            .divide_integer(c)
            .unwrap();
        assert_eq!(evaluate::<Rational>(&format!("{a}+{b}/{c}")), Some(attendu));
    }
}
