//! Polynomial root finding.
//!
//! Roots are computed as the eigenvalues of the companion matrix, using the
//! real Schur decomposition from `nalgebra`. This finds every root (real and
//! complex) at once, at the cost of being less accurate than a bracketing
//! method for ill-conditioned polynomials.

use nalgebra::linalg::Schur;
use nalgebra::{Complex, DMatrix};

use crate::error::{MathError, MathResult};

/// Maximum QR sweeps allowed for the Schur decomposition.
const SCHUR_MAX_ITERATIONS: usize = 10_000;

/// Returns all roots of the polynomial `Σ coeffs[i] · x^i`.
///
/// Coefficients are ordered by increasing power. Trailing zero coefficients
/// (vanishing high-order terms) are ignored; leading zero coefficients
/// contribute roots at exactly zero.
///
/// # Errors
///
/// - [`MathError::InvalidInput`] if every coefficient is zero or any is not
///   finite.
/// - [`MathError::InsufficientData`] if the polynomial is a non-zero
///   constant (degree 0 has no roots).
/// - [`MathError::ConvergenceFailed`] if the eigenvalue iteration does not
///   converge.
///
/// # Example
///
/// ```rust
/// use npvlab_math::polynomial::polynomial_roots;
///
/// // x^2 - 3x + 2 = (x - 1)(x - 2)
/// let mut roots: Vec<f64> = polynomial_roots(&[2.0, -3.0, 1.0])
///     .unwrap()
///     .iter()
///     .map(|z| z.re)
///     .collect();
/// roots.sort_by(f64::total_cmp);
///
/// assert!((roots[0] - 1.0).abs() < 1e-10);
/// assert!((roots[1] - 2.0).abs() < 1e-10);
/// ```
pub fn polynomial_roots(coeffs: &[f64]) -> MathResult<Vec<Complex<f64>>> {
    if coeffs.iter().any(|c| !c.is_finite()) {
        return Err(MathError::invalid_input(
            "polynomial coefficients must be finite",
        ));
    }

    let Some(top) = coeffs.iter().rposition(|&c| c != 0.0) else {
        return Err(MathError::invalid_input(
            "polynomial has no non-zero coefficient",
        ));
    };
    // `top` is the first non-zero from the end, so a non-zero exists at or before it
    let bottom = coeffs.iter().position(|&c| c != 0.0).unwrap_or(top);

    if top == 0 {
        return Err(MathError::insufficient_data(2, 1));
    }

    let mut roots = vec![Complex::new(0.0, 0.0); bottom];
    let trimmed = &coeffs[bottom..=top];
    let degree = trimmed.len() - 1;

    match degree {
        0 => {}
        1 => roots.push(Complex::new(-trimmed[0] / trimmed[1], 0.0)),
        _ => {
            let schur = Schur::try_new(
                companion_matrix(trimmed),
                f64::EPSILON,
                SCHUR_MAX_ITERATIONS,
            )
            .ok_or_else(|| {
                MathError::convergence_failed(SCHUR_MAX_ITERATIONS as u32, f64::NAN)
            })?;
            roots.extend(schur.complex_eigenvalues().iter().copied());
        }
    }

    Ok(roots)
}

/// Returns the real roots of `Σ coeffs[i] · x^i`, sorted ascending.
///
/// A root counts as real when its imaginary part is within
/// `imag_tolerance` (relative to `max(1, |re|)`).
pub fn real_polynomial_roots(coeffs: &[f64], imag_tolerance: f64) -> MathResult<Vec<f64>> {
    let mut real: Vec<f64> = polynomial_roots(coeffs)?
        .into_iter()
        .filter(|z| z.im.abs() <= imag_tolerance * z.re.abs().max(1.0))
        .map(|z| z.re)
        .collect();
    real.sort_by(f64::total_cmp);
    Ok(real)
}

/// Builds the companion matrix of a polynomial with non-zero leading
/// coefficient (`coeffs` ordered by increasing power, degree >= 1).
fn companion_matrix(coeffs: &[f64]) -> DMatrix<f64> {
    let degree = coeffs.len() - 1;
    let lead = coeffs[degree];

    let mut m = DMatrix::<f64>::zeros(degree, degree);
    for j in 0..degree {
        // First row holds -a_{n-1}, ..., -a_0 of the monic polynomial
        m[(0, j)] = -coeffs[degree - 1 - j] / lead;
    }
    for i in 1..degree {
        m[(i, i - 1)] = 1.0;
    }
    m
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear() {
        let roots = polynomial_roots(&[-3.0, 2.0]).unwrap();

        assert_eq!(roots.len(), 1);
        assert_relative_eq!(roots[0].re, 1.5);
        assert_eq!(roots[0].im, 0.0);
    }

    #[test]
    fn test_quadratic_real_roots() {
        // Discount-factor polynomial of -100 + 230x - 132x^2
        let roots = real_polynomial_roots(&[-100.0, 230.0, -132.0], 1e-10).unwrap();

        assert_eq!(roots.len(), 2);
        assert_relative_eq!(roots[0], 1.0 / 1.2, epsilon = 1e-10);
        assert_relative_eq!(roots[1], 1.0 / 1.1, epsilon = 1e-10);
    }

    #[test]
    fn test_complex_pair_filtered() {
        // x^2 + 1 has no real roots
        let all = polynomial_roots(&[1.0, 0.0, 1.0]).unwrap();
        let real = real_polynomial_roots(&[1.0, 0.0, 1.0], 1e-10).unwrap();

        assert_eq!(all.len(), 2);
        assert!(real.is_empty());
        for z in all {
            assert_relative_eq!(z.im.abs(), 1.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_cubic() {
        // (x - 1)(x - 2)(x - 3) = x^3 - 6x^2 + 11x - 6
        let roots = real_polynomial_roots(&[-6.0, 11.0, -6.0, 1.0], 1e-8).unwrap();

        assert_eq!(roots.len(), 3);
        assert_relative_eq!(roots[0], 1.0, epsilon = 1e-8);
        assert_relative_eq!(roots[1], 2.0, epsilon = 1e-8);
        assert_relative_eq!(roots[2], 3.0, epsilon = 1e-8);
    }

    #[test]
    fn test_zero_roots_from_leading_zeros() {
        // x^2 (x - 2)
        let roots = real_polynomial_roots(&[0.0, 0.0, -2.0, 1.0], 1e-10).unwrap();

        assert_eq!(roots, vec![0.0, 0.0, 2.0]);
    }

    #[test]
    fn test_trailing_zeros_ignored() {
        let roots = real_polynomial_roots(&[-1.0, 1.0, 0.0, 0.0], 1e-10).unwrap();

        assert_eq!(roots.len(), 1);
        assert_relative_eq!(roots[0], 1.0);
    }

    #[test]
    fn test_constant_has_no_roots() {
        assert!(matches!(
            polynomial_roots(&[5.0]),
            Err(MathError::InsufficientData { .. })
        ));
        assert!(matches!(
            polynomial_roots(&[0.0, 0.0]),
            Err(MathError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_companion_matrix_layout() {
        let m = companion_matrix(&[-6.0, 11.0, -6.0, 1.0]);

        assert_eq!(m[(0, 0)], 6.0);
        assert_eq!(m[(0, 1)], -11.0);
        assert_eq!(m[(0, 2)], 6.0);
        assert_eq!(m[(1, 0)], 1.0);
        assert_eq!(m[(2, 1)], 1.0);
        assert_eq!(m[(2, 2)], 0.0);
    }
}
