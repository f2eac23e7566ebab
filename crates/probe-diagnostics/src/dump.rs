// ─────────────────────────────────────────────────────────────────────
// Probe Particle Core — Matrix Dump
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Human-readable complex matrix dump, for debugging and tests only.
//!
//! The layout is one header line with the title and dimensions, then one
//! line per row with every entry as `(real,imag)` in scientific
//! notation. This is not a durable format and has no reader here.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use ndarray::Array2;
use num_complex::Complex64;
use probe_types::error::ProbeResult;

/// Write `matrix` to the given path, or to stdout when `dest` is `None`.
pub fn write_matrix(
    dest: Option<&Path>,
    title: &str,
    matrix: &Array2<Complex64>,
) -> ProbeResult<()> {
    match dest {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_matrix_to(&mut writer, title, matrix)?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            write_matrix_to(&mut stdout.lock(), title, matrix)?;
        }
    }
    Ok(())
}

/// Write the dump to any `Write` sink.
pub fn write_matrix_to<W: Write>(
    writer: &mut W,
    title: &str,
    matrix: &Array2<Complex64>,
) -> io::Result<()> {
    let (rows, cols) = matrix.dim();
    writeln!(writer, "{title} Dimensions: {rows} {cols} Format: (real,imag)")?;
    for i in 0..rows {
        for j in 0..cols {
            let v = matrix[[i, j]];
            write!(writer, "({:e},{:e}) ", v.re, v.im)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}
