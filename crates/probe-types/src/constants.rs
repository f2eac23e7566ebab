// ─────────────────────────────────────────────────────────────────────
// Probe Particle Core — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Shared numerical constants.

/// Default squared-magnitude cutoff below which an elimination pivot is
/// treated as numerically singular. The comparison is against |pivot|^2
/// (no square root), so the effective linear-magnitude sensitivity is
/// the square root of this value.
pub const DEFAULT_PIVOT_THRESHOLD: f64 = 1e-10;
