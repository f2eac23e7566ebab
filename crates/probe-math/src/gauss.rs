// ─────────────────────────────────────────────────────────────────────
// Probe Particle Core — Gauss-Jordan Kernel
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Gauss-Jordan elimination with partial (row-only) pivoting on complex
//! matrices, plus the inversion and multi-RHS solve entry points built
//! on top of it.
//!
//! All pivot-magnitude comparisons use |z|^2 (`norm_sqr`), including the
//! singularity threshold; no square roots are taken anywhere in the
//! kernel.

use ndarray::Array2;
use num_complex::Complex64;
use probe_types::error::{ProbeError, ProbeResult};

pub use probe_types::constants::DEFAULT_PIVOT_THRESHOLD;

/// Row in `lo..n` whose entry in `col` has the largest squared magnitude.
///
/// Ties keep the lowest-indexed row: the scan replaces the current best
/// only on strict inequality.
fn find_pivot_row(aug: &Array2<Complex64>, col: usize, lo: usize, n: usize) -> usize {
    let mut best = lo;
    let mut best_mag = aug[[lo, col]].norm_sqr();
    for r in (lo + 1)..n {
        let mag = aug[[r, col]].norm_sqr();
        if mag > best_mag {
            best_mag = mag;
            best = r;
        }
    }
    best
}

/// Swap two full rows of the augmented matrix in place.
fn swap_rows(aug: &mut Array2<Complex64>, r1: usize, r2: usize) {
    let stride = aug.ncols();
    for j in 0..stride {
        aug.swap([r1, j], [r2, j]);
    }
}

/// Reduce the augmented matrix [A|B] to [I|A⁻¹B] in place.
///
/// `aug` must have shape (n, n+m): the first n columns hold the
/// coefficient block, the last m the companion block. Elimination is
/// full Gauss-Jordan; at every step the pivot column is cleared both
/// above and below the pivot row.
///
/// If a pivot's squared magnitude falls below `pivot_threshold`, the
/// matrix is judged numerically singular: rows `step..n` are zeroed
/// across the full width and `NearSingularPivot` is returned with the
/// failing step. Rows above the failing step keep their partial
/// reduction, so the whole buffer must be discarded on error.
pub fn gauss_jordan_eliminate(
    aug: &mut Array2<Complex64>,
    n: usize,
    m: usize,
    pivot_threshold: f64,
) -> ProbeResult<()> {
    let stride = n + m;
    assert_eq!(aug.dim(), (n, stride), "augmented matrix must be n x (n+m)");

    for i in 0..n {
        let pivot_row = find_pivot_row(aug, i, i, n);
        if pivot_row != i {
            swap_rows(aug, i, pivot_row);
        }

        let pivot = aug[[i, i]];
        let norm_sqr = pivot.norm_sqr();
        if norm_sqr < pivot_threshold {
            for r in i..n {
                for c in 0..stride {
                    aug[[r, c]] = Complex64::new(0.0, 0.0);
                }
            }
            return Err(ProbeError::NearSingularPivot { step: i, norm_sqr });
        }

        // Scale the pivot row so the pivot entry becomes exactly 1
        let pivot_inv = pivot.inv();
        for j in 0..stride {
            aug[[i, j]] *= pivot_inv;
        }

        // Clear column i from every other row
        for j in 0..n {
            if j == i {
                continue;
            }
            let factor = aug[[j, i]];
            for k in 0..stride {
                let sub = factor * aug[[i, k]];
                aug[[j, k]] -= sub;
            }
        }
    }

    Ok(())
}

/// Invert the n×n matrix `a` into `ainv`, using `workspace` (n×2n) for
/// the augmented [A|I] form.
///
/// On the singular branch `ainv` is zeroed in full before the error is
/// returned, so the buffer carries the same all-zero signal as the
/// augmented matrix.
pub fn invert_into(
    a: &Array2<Complex64>,
    ainv: &mut Array2<Complex64>,
    workspace: &mut Array2<Complex64>,
    pivot_threshold: f64,
) -> ProbeResult<()> {
    let n = a.nrows();
    assert_eq!(a.ncols(), n, "matrix must be square");
    assert_eq!(ainv.dim(), (n, n), "output must be n x n");
    assert_eq!(workspace.dim(), (n, 2 * n), "workspace must be n x 2n");

    // Augmented [A|I], identity via Kronecker delta
    for i in 0..n {
        for j in 0..n {
            workspace[[i, j]] = a[[i, j]];
            workspace[[i, j + n]] = Complex64::new(if i == j { 1.0 } else { 0.0 }, 0.0);
        }
    }

    match gauss_jordan_eliminate(workspace, n, n, pivot_threshold) {
        Ok(()) => {
            for i in 0..n {
                for j in 0..n {
                    ainv[[i, j]] = workspace[[i, j + n]];
                }
            }
            Ok(())
        }
        Err(err) => {
            ainv.fill(Complex64::new(0.0, 0.0));
            Err(err)
        }
    }
}

/// Allocating convenience wrapper around [`invert_into`].
pub fn invert(a: &Array2<Complex64>, pivot_threshold: f64) -> ProbeResult<Array2<Complex64>> {
    let n = a.nrows();
    let mut ainv = Array2::zeros((n, n));
    let mut workspace = Array2::zeros((n, 2 * n));
    invert_into(a, &mut ainv, &mut workspace, pivot_threshold)?;
    Ok(ainv)
}

/// Solve AX = B for the n×m solution block `x`, using `workspace`
/// (n×(n+m)) for the augmented [A|B] form.
///
/// All m right-hand sides are reduced in the same elimination pass, so
/// the O(n³) cost is paid once rather than per column. On the singular
/// branch `x` is zeroed in full before the error is returned.
pub fn solve_into(
    a: &Array2<Complex64>,
    b: &Array2<Complex64>,
    x: &mut Array2<Complex64>,
    workspace: &mut Array2<Complex64>,
    pivot_threshold: f64,
) -> ProbeResult<()> {
    let n = a.nrows();
    let m = b.ncols();
    assert_eq!(a.ncols(), n, "matrix must be square");
    assert_eq!(b.nrows(), n, "right-hand side must have n rows");
    assert_eq!(x.dim(), (n, m), "output must be n x m");
    assert_eq!(workspace.dim(), (n, n + m), "workspace must be n x (n+m)");

    for i in 0..n {
        for j in 0..n {
            workspace[[i, j]] = a[[i, j]];
        }
        for j in 0..m {
            workspace[[i, j + n]] = b[[i, j]];
        }
    }

    match gauss_jordan_eliminate(workspace, n, m, pivot_threshold) {
        Ok(()) => {
            for i in 0..n {
                for j in 0..m {
                    x[[i, j]] = workspace[[i, j + n]];
                }
            }
            Ok(())
        }
        Err(err) => {
            x.fill(Complex64::new(0.0, 0.0));
            Err(err)
        }
    }
}

/// Allocating convenience wrapper around [`solve_into`].
pub fn solve(
    a: &Array2<Complex64>,
    b: &Array2<Complex64>,
    pivot_threshold: f64,
) -> ProbeResult<Array2<Complex64>> {
    let n = a.nrows();
    let m = b.ncols();
    let mut x = Array2::zeros((n, m));
    let mut workspace = Array2::zeros((n, n + m));
    solve_into(a, b, &mut x, &mut workspace, pivot_threshold)?;
    Ok(x)
}
