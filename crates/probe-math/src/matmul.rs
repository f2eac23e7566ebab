//! Dense complex matrix product.
//!
//! Plain triple loop; target matrices are lattice-scale (a few rows and
//! columns), so no blocking or tiling is worthwhile.

use ndarray::Array2;
use num_complex::Complex64;

/// Complex matrix product C = A * B.
///
/// `a` is n×k, `b` is k×m, the result is a fresh n×m array. Each entry
/// accumulates A[i][p] * B[p][j] over p = 0..k in visitation order, which
/// fixes the floating-point rounding pattern. The square case is just
/// equal dimensions; there is no separate entry point for it.
///
/// Panics if the inner dimensions disagree.
pub fn cmatmul(a: &Array2<Complex64>, b: &Array2<Complex64>) -> Array2<Complex64> {
    let (n, k) = a.dim();
    let (kb, m) = b.dim();
    assert_eq!(k, kb, "inner dimensions must agree: {k} vs {kb}");

    let mut c = Array2::zeros((n, m));
    for i in 0..n {
        for j in 0..m {
            let mut sum = Complex64::new(0.0, 0.0);
            for p in 0..k {
                sum += a[[i, p]] * b[[p, j]];
            }
            c[[i, j]] = sum;
        }
    }
    c
}
