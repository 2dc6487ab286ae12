//! Binomialkoeffizienten für die Bernstein-Basis.
//!
//! Berechnet die Zeile `C(n, 0..=n)` des Pascalschen Dreiecks über das
//! Produktverfahren `C(n,k) = C(n,k-1) · (n-k+1) / k`. Gerechnet wird in
//! `BigUint`, die Division ist daher in jedem Schritt exakt. Für das Blending
//! wird jede Zeile zusätzlich einmal nach `f64` übertragen.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};

use super::CurveError;

/// Größter Grad, dessen Koeffizienten als endliche `f64`-Gewichte darstellbar sind.
///
/// `C(1029, 514)` liegt knapp unter `f64::MAX`, `C(1030, 515)` darüber. Größere
/// Grade liefern [`CurveError::CoefficientOverflow`].
pub const MAX_DEGREE: usize = 1029;

/// Koeffizientenzeile `C(degree, k)` für `k = 0..=degree`.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientVector {
    values: Vec<BigUint>,
    weights: Vec<f64>,
}

impl CoefficientVector {
    /// Polynomgrad, für den die Zeile berechnet wurde.
    pub fn degree(&self) -> usize {
        self.values.len() - 1
    }

    /// Anzahl Koeffizienten (= Anzahl Kontrollpunkte).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Eine Koeffizientenzeile ist nie leer (Grad 0 → `[1]`).
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Exakte Koeffizienten.
    pub fn as_slice(&self) -> &[BigUint] {
        &self.values
    }

    /// Koeffizienten als `f64`, in derselben Reihenfolge wie [`Self::as_slice`].
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}

/// Berechnet die Binomialkoeffizienten `C(degree, k)` für `k = 0..=degree`.
pub fn binomial_row(degree: usize) -> Result<CoefficientVector, CurveError> {
    let overflow = CurveError::CoefficientOverflow { degree };
    if degree > MAX_DEGREE {
        return Err(overflow);
    }

    let n = degree as u64;
    let mut values = vec![BigUint::one(); degree + 1];
    let mut current = BigUint::one();

    // Nur die erste Hälfte rechnen, der Rest folgt aus C(n,k) = C(n,n-k)
    for k in 1..=degree / 2 {
        let k_u = k as u64;
        // C(n,k-1) · (n-k+1) = k · C(n,k), die Division geht immer auf
        current = current * (n - k_u + 1) / k_u;

        values[k] = current.clone();
        values[degree - k] = current.clone();
    }

    let weights = values
        .iter()
        .map(|c| c.to_f64().filter(|w| w.is_finite()).ok_or(overflow))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CoefficientVector { values, weights })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_row(degree: usize) -> Vec<u64> {
        binomial_row(degree)
            .unwrap()
            .as_slice()
            .iter()
            .map(|c| c.to_u64().unwrap())
            .collect()
    }

    #[test]
    fn test_degree_zero_is_single_one() {
        let row = binomial_row(0).expect("Grad 0 ist immer darstellbar");
        assert_eq!(row.as_slice(), &[BigUint::one()]);
        assert_eq!(row.weights(), &[1.0]);
        assert_eq!(row.degree(), 0);
    }

    #[test]
    fn test_small_rows_match_pascal_triangle() {
        assert_eq!(small_row(1), vec![1, 1]);
        assert_eq!(small_row(2), vec![1, 2, 1]);
        assert_eq!(small_row(3), vec![1, 3, 3, 1]);
        assert_eq!(small_row(6), vec![1, 6, 15, 20, 15, 6, 1]);
        assert_eq!(
            binomial_row(6).unwrap().weights(),
            &[1.0, 6.0, 15.0, 20.0, 15.0, 6.0, 1.0]
        );
    }

    #[test]
    fn test_row_sum_is_power_of_two() {
        // n Kontrollpunkte → Grad n-1 → Summe 2^(n-1)
        for n in (1..=200usize).chain([999]) {
            let row = binomial_row(n - 1).unwrap();
            let sum: BigUint = row.as_slice().iter().sum();
            assert_eq!(sum, BigUint::one() << (n - 1), "Zeilensumme für n = {n}");
        }
    }

    #[test]
    fn test_central_coefficient_is_exact() {
        let row = binomial_row(100).unwrap();
        let expected: BigUint = "100891344545564193334812497256".parse().unwrap();
        assert_eq!(row.as_slice()[50], expected);
    }

    #[test]
    fn test_row_is_symmetric() {
        let row = binomial_row(37).unwrap();
        let values = row.as_slice();
        for k in 0..=37 {
            assert_eq!(values[k], values[37 - k]);
        }
    }

    #[test]
    fn test_default_capacity_row_matches_pascal_recurrence() {
        // 999 Kontrollpunkte → Grad 998
        let prev = binomial_row(997).unwrap();
        let row = binomial_row(998).unwrap();
        let p = prev.as_slice();
        for k in 1..998 {
            assert_eq!(row.as_slice()[k], &p[k - 1] + &p[k], "k = {k}");
        }
        assert!(row.weights().iter().all(|w| w.is_finite() && *w >= 1.0));
    }

    #[test]
    fn test_largest_degree_has_finite_weights() {
        let row = binomial_row(MAX_DEGREE).unwrap();
        assert_eq!(row.len(), MAX_DEGREE + 1);
        assert!(row.weights().iter().all(|w| w.is_finite()));
    }

    #[test]
    fn test_overflow_is_reported_not_wrapped() {
        let err = binomial_row(MAX_DEGREE + 1).unwrap_err();
        assert_eq!(
            err,
            CurveError::CoefficientOverflow {
                degree: MAX_DEGREE + 1
            }
        );
    }
}
