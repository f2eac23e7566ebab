// ─────────────────────────────────────────────────────────────────────
// Probe Particle Core — Grid Shape
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Lattice cell geometry and grid↔Cartesian coordinate transforms.
//!
//! The voxel basis is the lattice cell divided by the point count along
//! each axis; its transposed inverse maps Cartesian positions back to
//! fractional grid coordinates. The inverse comes from the complex
//! elimination kernel, used here in its real-valued n=3 form.

use ndarray::Array2;
use num_complex::Complex64;
use probe_math::gauss::invert;
use probe_types::config::ScanConfig;
use probe_types::error::ProbeResult;

/// Lattice cell with its voxel basis and the inverse transform.
///
/// All three matrices store basis vectors as rows.
#[derive(Debug, Clone)]
pub struct GridShape {
    /// Lattice vectors.
    pub cell: [[f64; 3]; 3],
    /// Voxel basis: lattice vectors divided by point counts.
    pub d_cell: [[f64; 3]; 3],
    /// Transposed inverse of the voxel basis.
    pub di_cell: [[f64; 3]; 3],
    /// Grid points along each lattice vector.
    pub n: [usize; 3],
}

impl GridShape {
    /// Shape with the given point counts and the cell left unset (zeroed).
    pub fn new(n: [usize; 3]) -> Self {
        assert!(n.iter().all(|&ni| ni > 0), "point counts must be nonzero");
        GridShape {
            cell: [[0.0; 3]; 3],
            d_cell: [[0.0; 3]; 3],
            di_cell: [[0.0; 3]; 3],
            n,
        }
    }

    /// Build a shape directly from a validated scan configuration.
    pub fn from_config(config: &ScanConfig) -> ProbeResult<GridShape> {
        let mut shape = GridShape::new(config.grid_points);
        shape.set_cell(config.cell, config.solver.pivot_threshold)?;
        Ok(shape)
    }

    /// Set the lattice cell, recomputing the voxel basis and its
    /// transposed inverse.
    ///
    /// A degenerate cell (linearly dependent lattice vectors) surfaces as
    /// `NearSingularPivot` from the inversion kernel; the shape's
    /// `di_cell` is left untouched in that case.
    pub fn set_cell(&mut self, cell: [[f64; 3]; 3], pivot_threshold: f64) -> ProbeResult<()> {
        let mut d_cell = [[0.0; 3]; 3];
        for axis in 0..3 {
            let scale = 1.0 / self.n[axis] as f64;
            for k in 0..3 {
                d_cell[axis][k] = cell[axis][k] * scale;
            }
        }

        // Real 3x3 inversion through the complex kernel: zero imaginary
        // parts in, zero imaginary parts out.
        let basis = Array2::from_shape_fn((3, 3), |(i, j)| Complex64::new(d_cell[i][j], 0.0));
        let basis_inv = invert(&basis, pivot_threshold)?;

        self.cell = cell;
        self.d_cell = d_cell;
        for i in 0..3 {
            for j in 0..3 {
                // Row i of di_cell is the reciprocal vector dual to row i
                // of d_cell, hence the transpose.
                self.di_cell[i][j] = basis_inv[[j, i]].re;
            }
        }
        Ok(())
    }

    /// Fractional grid coordinates → Cartesian position.
    pub fn grid_to_cartesian(&self, gpos: [f64; 3]) -> [f64; 3] {
        let mut cpos = [0.0; 3];
        for axis in 0..3 {
            for k in 0..3 {
                cpos[k] += self.d_cell[axis][k] * gpos[axis];
            }
        }
        cpos
    }

    /// Cartesian position → fractional grid coordinates.
    pub fn cartesian_to_grid(&self, cpos: [f64; 3]) -> [f64; 3] {
        let mut gpos = [0.0; 3];
        for axis in 0..3 {
            gpos[axis] = cpos[0] * self.di_cell[axis][0]
                + cpos[1] * self.di_cell[axis][1]
                + cpos[2] * self.di_cell[axis][2];
        }
        gpos
    }
}
