//! Trilinear interpolation with periodic wraparound.
//!
//! Fields are flat row-major buffers with index `iz*nx*ny + iy*nx + ix`;
//! positions are fractional grid coordinates. All three axes wrap, so
//! any real coordinate (including negative ones) maps into the cell.

/// Split a fractional coordinate into wrapped lower/upper indices and the
/// fractional offset between them.
fn wrap_split(x: f64, n: usize) -> (usize, usize, f64) {
    let floor = x.floor();
    let t = x - floor;
    let i0 = floor.rem_euclid(n as f64) as usize;
    let i1 = (i0 + 1) % n;
    (i0, i1, t)
}

/// Trilinear interpolation of a scalar field at fractional position `r`.
///
/// Panics if the buffer length does not match `n`.
pub fn interpolate3d_wrap(grid: &[f64], n: [usize; 3], r: [f64; 3]) -> f64 {
    let [nx, ny, nz] = n;
    assert_eq!(grid.len(), nx * ny * nz, "grid buffer size mismatch");

    let (ix0, ix1, tx) = wrap_split(r[0], nx);
    let (iy0, iy1, ty) = wrap_split(r[1], ny);
    let (iz0, iz1, tz) = wrap_split(r[2], nz);
    let (mx, my, mz) = (1.0 - tx, 1.0 - ty, 1.0 - tz);

    let nxy = nx * ny;
    let idx = |ix: usize, iy: usize, iz: usize| iz * nxy + iy * nx + ix;

    mz * (my * (mx * grid[idx(ix0, iy0, iz0)] + tx * grid[idx(ix1, iy0, iz0)])
        + ty * (mx * grid[idx(ix0, iy1, iz0)] + tx * grid[idx(ix1, iy1, iz0)]))
        + tz * (my * (mx * grid[idx(ix0, iy0, iz1)] + tx * grid[idx(ix1, iy0, iz1)])
            + ty * (mx * grid[idx(ix0, iy1, iz1)] + tx * grid[idx(ix1, iy1, iz1)]))
}

/// Trilinear interpolation of a 3-vector field at fractional position `r`.
///
/// Same corner weights as the scalar case, applied per component.
pub fn interpolate3d_vec_wrap(grid: &[[f64; 3]], n: [usize; 3], r: [f64; 3]) -> [f64; 3] {
    let [nx, ny, nz] = n;
    assert_eq!(grid.len(), nx * ny * nz, "grid buffer size mismatch");

    let (ix0, ix1, tx) = wrap_split(r[0], nx);
    let (iy0, iy1, ty) = wrap_split(r[1], ny);
    let (iz0, iz1, tz) = wrap_split(r[2], nz);
    let (mx, my, mz) = (1.0 - tx, 1.0 - ty, 1.0 - tz);

    let nxy = nx * ny;
    let idx = |ix: usize, iy: usize, iz: usize| iz * nxy + iy * nx + ix;

    let corners = [
        (idx(ix0, iy0, iz0), mz * my * mx),
        (idx(ix1, iy0, iz0), mz * my * tx),
        (idx(ix0, iy1, iz0), mz * ty * mx),
        (idx(ix1, iy1, iz0), mz * ty * tx),
        (idx(ix0, iy0, iz1), tz * my * mx),
        (idx(ix1, iy0, iz1), tz * my * tx),
        (idx(ix0, iy1, iz1), tz * ty * mx),
        (idx(ix1, iy1, iz1), tz * ty * tx),
    ];

    let mut out = [0.0; 3];
    for (index, weight) in corners {
        for k in 0..3 {
            out[k] += grid[index][k] * weight;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar_field(n: [usize; 3], f: impl Fn(usize, usize, usize) -> f64) -> Vec<f64> {
        let mut grid = vec![0.0; n[0] * n[1] * n[2]];
        for iz in 0..n[2] {
            for iy in 0..n[1] {
                for ix in 0..n[0] {
                    grid[iz * n[0] * n[1] + iy * n[0] + ix] = f(ix, iy, iz);
                }
            }
        }
        grid
    }

    #[test]
    fn test_exact_at_lattice_points() {
        let n = [4, 5, 6];
        let grid = scalar_field(n, |ix, iy, iz| (ix * 100 + iy * 10 + iz) as f64);
        for iz in 0..n[2] {
            for iy in 0..n[1] {
                for ix in 0..n[0] {
                    let val =
                        interpolate3d_wrap(&grid, n, [ix as f64, iy as f64, iz as f64]);
                    let expected = (ix * 100 + iy * 10 + iz) as f64;
                    assert!(
                        (val - expected).abs() < 1e-12,
                        "node ({ix},{iy},{iz}): {val} vs {expected}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_constant_field_everywhere() {
        let n = [3, 3, 3];
        let grid = vec![7.5; 27];
        for &r in &[
            [0.0, 0.0, 0.0],
            [1.3, 2.7, 0.4],
            [-0.6, 5.1, -3.3],
            [2.999, 2.999, 2.999],
        ] {
            let val = interpolate3d_wrap(&grid, n, r);
            assert!((val - 7.5).abs() < 1e-12, "at {r:?}: {val}");
        }
    }

    #[test]
    fn test_linear_in_interior() {
        let n = [8, 8, 8];
        let grid = scalar_field(n, |ix, _, _| ix as f64);
        // Away from the wrap seam trilinear reproduces a linear ramp
        let val = interpolate3d_wrap(&grid, n, [2.25, 3.0, 4.5]);
        assert!((val - 2.25).abs() < 1e-12, "val = {val}");
    }

    #[test]
    fn test_periodic_wraparound() {
        let n = [4, 4, 4];
        let grid = scalar_field(n, |ix, iy, iz| (ix + iy + iz) as f64);
        // One full period along each axis lands on the same value
        let at_origin = interpolate3d_wrap(&grid, n, [0.5, 0.5, 0.5]);
        let shifted = interpolate3d_wrap(&grid, n, [4.5, -3.5, 8.5]);
        assert!((at_origin - shifted).abs() < 1e-12);
    }

    #[test]
    fn test_wrap_seam_blends_last_and_first() {
        let n = [4, 1, 1];
        let grid = vec![1.0, 2.0, 3.0, 8.0];
        // Halfway between ix=3 and the wrapped ix=0
        let val = interpolate3d_wrap(&grid, n, [3.5, 0.0, 0.0]);
        assert!((val - 4.5).abs() < 1e-12, "val = {val}");
    }

    #[test]
    fn test_vector_matches_scalar_per_component() {
        let n = [3, 4, 5];
        let count = n[0] * n[1] * n[2];
        let mut vec_grid = vec![[0.0; 3]; count];
        let mut comps = [vec![0.0; count], vec![0.0; count], vec![0.0; count]];
        for (i, entry) in vec_grid.iter_mut().enumerate() {
            *entry = [i as f64, (i * 2) as f64, -(i as f64)];
            for k in 0..3 {
                comps[k][i] = entry[k];
            }
        }

        let r = [1.4, 2.6, 3.1];
        let v = interpolate3d_vec_wrap(&vec_grid, n, r);
        for k in 0..3 {
            let s = interpolate3d_wrap(&comps[k], n, r);
            assert!((v[k] - s).abs() < 1e-10, "component {k}: {} vs {s}", v[k]);
        }
    }

    #[test]
    #[should_panic(expected = "grid buffer size mismatch")]
    fn test_buffer_size_mismatch_panics() {
        let grid = vec![0.0; 10];
        let _ = interpolate3d_wrap(&grid, [4, 4, 4], [0.0, 0.0, 0.0]);
    }
}
