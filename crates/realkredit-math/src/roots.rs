//! Dense polynomial root-finding.
//!
//! Finds all roots (real and complex) of a real-coefficient polynomial by
//! computing the eigenvalues of its companion matrix. The uniqueness
//! requirements of financial callers (e.g. a single admissible discount
//! factor) are post-filters applied on top of the full root set, never
//! assumptions baked into the root-finder itself.

use nalgebra::{Complex, DMatrix};

use crate::error::{MathError, MathResult};

/// Default absolute tolerance below which a root's imaginary part is
/// treated as zero.
///
/// Eigenvalues of a real companion matrix computed via the real Schur
/// form carry exactly-zero imaginary parts for real roots on common
/// backends, but that is a backend detail; a small absolute tolerance
/// keeps the classification portable.
pub const DEFAULT_IMAG_TOLERANCE: f64 = 1e-9;

/// Finds all roots of the polynomial with the given coefficients.
///
/// Coefficients are in ascending-degree order:
/// `p(x) = coeffs[0] + coeffs[1] * x + ... + coeffs[n] * x^n`.
/// Zero coefficients of the highest degrees are trimmed before the
/// companion matrix is formed.
///
/// # Errors
///
/// Returns an error if any coefficient is non-finite or if, after
/// trimming, the polynomial is constant (degree < 1).
///
/// # Example
///
/// ```rust
/// use realkredit_math::roots::polynomial_roots;
///
/// // x^2 - 3x + 2 = (x - 1)(x - 2)
/// let mut roots = polynomial_roots(&[2.0, -3.0, 1.0]).unwrap();
/// roots.sort_by(|a, b| a.re.partial_cmp(&b.re).unwrap());
/// assert!((roots[0].re - 1.0).abs() < 1e-9);
/// assert!((roots[1].re - 2.0).abs() < 1e-9);
/// ```
pub fn polynomial_roots(coeffs: &[f64]) -> MathResult<Vec<Complex<f64>>> {
    if coeffs.iter().any(|c| !c.is_finite()) {
        return Err(MathError::invalid_input(
            "polynomial coefficients must be finite",
        ));
    }

    // Trim zero leading (highest-degree) coefficients
    let mut len = coeffs.len();
    while len > 0 && coeffs[len - 1] == 0.0 {
        len -= 1;
    }

    if len < 2 {
        return Err(MathError::insufficient_data(2, len));
    }

    let degree = len - 1;
    let lead = coeffs[len - 1];

    // Companion matrix: ones on the subdiagonal, negated monic
    // coefficients in the last column. Its characteristic polynomial is
    // the monic form of p.
    let mut companion = DMatrix::<f64>::zeros(degree, degree);
    for i in 1..degree {
        companion[(i, i - 1)] = 1.0;
    }
    for i in 0..degree {
        companion[(i, degree - 1)] = -coeffs[i] / lead;
    }

    Ok(companion.complex_eigenvalues().iter().copied().collect())
}

/// Finds the real roots of the polynomial with the given coefficients.
///
/// A root is classified as real when the absolute value of its imaginary
/// part is at most `imag_tolerance`. Results are sorted ascending.
///
/// # Errors
///
/// Same conditions as [`polynomial_roots`].
pub fn real_roots(coeffs: &[f64], imag_tolerance: f64) -> MathResult<Vec<f64>> {
    let mut reals: Vec<f64> = polynomial_roots(coeffs)?
        .into_iter()
        .filter(|root| root.im.abs() <= imag_tolerance)
        .map(|root| root.re)
        .collect();
    reals.sort_by(f64::total_cmp);
    Ok(reals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear() {
        // 2x - 6 = 0
        let roots = real_roots(&[-6.0, 2.0], DEFAULT_IMAG_TOLERANCE).unwrap();
        assert_eq!(roots.len(), 1);
        assert_relative_eq!(roots[0], 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_quadratic_two_real_roots() {
        // (x - 1)(x - 2)
        let roots = real_roots(&[2.0, -3.0, 1.0], DEFAULT_IMAG_TOLERANCE).unwrap();
        assert_eq!(roots.len(), 2);
        assert_relative_eq!(roots[0], 1.0, epsilon = 1e-9);
        assert_relative_eq!(roots[1], 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_quadratic_complex_pair() {
        // x^2 + 1 has no real roots
        let all = polynomial_roots(&[1.0, 0.0, 1.0]).unwrap();
        assert_eq!(all.len(), 2);

        let reals = real_roots(&[1.0, 0.0, 1.0], DEFAULT_IMAG_TOLERANCE).unwrap();
        assert!(reals.is_empty());
    }

    #[test]
    fn test_cubic_mixed_roots() {
        // (x - 2)(x^2 + 1) = x^3 - 2x^2 + x - 2
        let reals = real_roots(&[-2.0, 1.0, -2.0, 1.0], DEFAULT_IMAG_TOLERANCE).unwrap();
        assert_eq!(reals.len(), 1);
        assert_relative_eq!(reals[0], 2.0, epsilon = 1e-8);
    }

    #[test]
    fn test_leading_zeros_trimmed() {
        let trimmed = real_roots(&[2.0, -3.0, 1.0, 0.0, 0.0], DEFAULT_IMAG_TOLERANCE).unwrap();
        let plain = real_roots(&[2.0, -3.0, 1.0], DEFAULT_IMAG_TOLERANCE).unwrap();
        assert_eq!(trimmed.len(), plain.len());
        for (a, b) in trimmed.iter().zip(plain.iter()) {
            assert_relative_eq!(a, b, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_degenerate_inputs_rejected() {
        assert!(polynomial_roots(&[]).is_err());
        assert!(polynomial_roots(&[1.0]).is_err());
        assert!(polynomial_roots(&[1.0, 0.0, 0.0]).is_err());
        assert!(polynomial_roots(&[1.0, f64::NAN]).is_err());
        assert!(polynomial_roots(&[1.0, f64::INFINITY]).is_err());
    }

    #[test]
    fn test_discount_factor_polynomial() {
        // A single disbursement of 1000 repaid by one payment of 1100:
        // p(x) = -1000 + 1100 x, root x = 10/11, rate = 1/x - 1 = 10%
        let roots = real_roots(&[-1000.0, 1100.0], DEFAULT_IMAG_TOLERANCE).unwrap();
        assert_eq!(roots.len(), 1);
        assert_relative_eq!(1.0 / roots[0] - 1.0, 0.10, epsilon = 1e-10);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn recovers_roots_of_factored_quadratic(
                r1 in -50.0..50.0f64,
                r2 in -50.0..50.0f64,
            ) {
                // Near-double roots are ill-conditioned for any eigenvalue
                // method; keep the factors separated.
                prop_assume!((r1 - r2).abs() > 0.1);

                // (x - r1)(x - r2) = r1*r2 - (r1 + r2)x + x^2
                let coeffs = [r1 * r2, -(r1 + r2), 1.0];
                let roots = real_roots(&coeffs, 1e-6).unwrap();
                prop_assert_eq!(roots.len(), 2);

                let mut expected = [r1, r2];
                expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
                for (found, want) in roots.iter().zip(expected.iter()) {
                    prop_assert!((found - want).abs() < 1e-6 * (1.0 + want.abs()));
                }
            }
        }
    }

    #[test]
    fn test_level_payment_polynomial_has_one_positive_real_root() {
        // 10 level payments of 130 against a disbursement of 1000
        let mut coeffs = vec![-1000.0];
        coeffs.extend(std::iter::repeat(130.0).take(10));

        let reals = real_roots(&coeffs, DEFAULT_IMAG_TOLERANCE).unwrap();
        let positive: Vec<f64> = reals.into_iter().filter(|r| *r > 0.0).collect();
        assert_eq!(positive.len(), 1);

        // NPV at the recovered rate must be zero
        let x = positive[0];
        let npv: f64 = coeffs
            .iter()
            .enumerate()
            .map(|(k, c)| c * x.powi(k as i32))
            .sum();
        assert!(npv.abs() < 1e-6);
    }
}
