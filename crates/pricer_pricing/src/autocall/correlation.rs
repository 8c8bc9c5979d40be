//! Correlation matrix assembly, Cholesky factorization, and the nearest-PSD
//! fallback used when a term sheet's pairwise correlations aren't quite
//! consistent.
//!
//! Grounded on `pricer_models::models::hybrid::correlated::CorrelationMatrix`
//! for the Cholesky-Banachiewicz loop itself; `CorrelationMatrix::cholesky`
//! only ever returns `CorrelationError::NotPositiveDefinite` on an
//! inconsistent matrix rather than repairing it, so the eigenvalue-clipping
//! projection below is new: a direct Jacobi eigenvalue sweep over `Vec<f64>`,
//! since the matrices involved are small (one row/column per underlying) and
//! adding a full linear-algebra dependency for this alone would be
//! disproportionate.

use pricer_models::models::hybrid::correlated::{CholeskyFactor, CorrelationMatrix};

use super::error::PricingError;
use super::term_sheet::TermSheet;

/// Eigenvalues are clipped to this floor before rescaling back to a unit
/// diagonal during nearest-PSD projection.
const EIGENVALUE_FLOOR: f64 = 1e-12;

/// Result of building the Cholesky factor for a term sheet's correlation
/// matrix: the factor itself, plus a flag recording whether a PSD projection
/// was required (surfaced to the caller as a result warning).
pub struct CorrelationBuild {
    /// Lower-triangular factor `L` with `L * L^T ~= C`.
    pub cholesky: CholeskyFactor<f64>,
    /// True if the raw matrix wasn't PSD and had to be projected.
    pub projected: bool,
}

/// Assembles the `n x n` correlation matrix from the term sheet, attempts a
/// direct Cholesky factorization, and on failure projects to the nearest
/// correlation matrix (eigenvalue clipping, rescaled to unit diagonal) before
/// retrying.
pub fn build_cholesky(term_sheet: &TermSheet) -> Result<CorrelationBuild, PricingError> {
    let n = term_sheet.n_assets();
    let mut data = vec![0.0_f64; n * n];
    for i in 0..n {
        data[i * n + i] = 1.0;
        for j in 0..i {
            let rho = term_sheet
                .correlation
                .get(&term_sheet.underlyings[i].id, &term_sheet.underlyings[j].id);
            if !(-1.0..=1.0).contains(&rho) {
                return Err(PricingError::schema(format!(
                    "correlation between {} and {} is out of [-1, 1]",
                    term_sheet.underlyings[i].id, term_sheet.underlyings[j].id
                )));
            }
            data[i * n + j] = rho;
            data[j * n + i] = rho;
        }
    }

    let matrix =
        CorrelationMatrix::new(&data, n).map_err(|e| PricingError::schema(e.to_string()))?;
    if let Ok(factor) = matrix.cholesky() {
        return Ok(CorrelationBuild {
            cholesky: factor,
            projected: false,
        });
    }

    let projected_data = nearest_correlation_matrix(&data, n)?;
    let projected_matrix = CorrelationMatrix::new(&projected_data, n)
        .map_err(|e| PricingError::schema(e.to_string()))?;
    match projected_matrix.cholesky() {
        Ok(factor) => Ok(CorrelationBuild {
            cholesky: factor,
            projected: true,
        }),
        Err(_) => Err(PricingError::schema(
            "correlation matrix remains non-PSD beyond tolerance after projection",
        )),
    }
}

/// Projects a symmetric matrix onto the nearest correlation matrix via
/// eigenvalue clipping: diagonalize with a cyclic Jacobi sweep, floor
/// eigenvalues at [`EIGENVALUE_FLOOR`], reconstruct, then rescale rows/columns
/// so the diagonal is exactly 1.
fn nearest_correlation_matrix(data: &[f64], n: usize) -> Result<Vec<f64>, PricingError> {
    let (eigenvalues, eigenvectors) = jacobi_eigen(data, n);

    let clipped: Vec<f64> = eigenvalues
        .iter()
        .map(|&lambda| lambda.max(EIGENVALUE_FLOOR))
        .collect();

    // Reconstruct C' = V * diag(clipped) * V^T.
    let mut reconstructed = vec![0.0_f64; n * n];
    for i in 0..n {
        for j in 0..n {
            let mut sum = 0.0;
            for k in 0..n {
                sum += eigenvectors[i * n + k] * clipped[k] * eigenvectors[j * n + k];
            }
            reconstructed[i * n + j] = sum;
        }
    }

    // Rescale to a unit diagonal: C''_ij = C'_ij / sqrt(C'_ii * C'_jj).
    let mut projected = vec![0.0_f64; n * n];
    for i in 0..n {
        let d_i = reconstructed[i * n + i];
        if d_i <= 0.0 {
            return Err(PricingError::schema(
                "nearest-PSD projection produced a non-positive diagonal entry",
            ));
        }
        for j in 0..n {
            let d_j = reconstructed[j * n + j];
            projected[i * n + j] = reconstructed[i * n + j] / (d_i * d_j).sqrt();
        }
    }
    for i in 0..n {
        projected[i * n + i] = 1.0;
    }
    Ok(projected)
}

/// Cyclic Jacobi eigenvalue decomposition of a small symmetric matrix.
/// Returns `(eigenvalues, eigenvectors)` where `eigenvectors` is row-major
/// with column `k` the eigenvector for `eigenvalues[k]`.
fn jacobi_eigen(data: &[f64], n: usize) -> (Vec<f64>, Vec<f64>) {
    let mut a = data.to_vec();
    let mut v = vec![0.0_f64; n * n];
    for i in 0..n {
        v[i * n + i] = 1.0;
    }

    const MAX_SWEEPS: usize = 100;
    const TOL: f64 = 1e-14;

    for _ in 0..MAX_SWEEPS {
        // Off-diagonal magnitude; stop once effectively diagonal.
        let mut off = 0.0;
        for p in 0..n {
            for q in (p + 1)..n {
                off += a[p * n + q] * a[p * n + q];
            }
        }
        if off < TOL {
            break;
        }

        for p in 0..n {
            for q in (p + 1)..n {
                let apq = a[p * n + q];
                if apq.abs() < 1e-300 {
                    continue;
                }
                let app = a[p * n + p];
                let aqq = a[q * n + q];
                let theta = (aqq - app) / (2.0 * apq);
                let t = theta.signum() / (theta.abs() + (theta * theta + 1.0).sqrt());
                let c = 1.0 / (t * t + 1.0).sqrt();
                let s = t * c;

                for k in 0..n {
                    let akp = a[k * n + p];
                    let akq = a[k * n + q];
                    a[k * n + p] = c * akp - s * akq;
                    a[k * n + q] = s * akp + c * akq;
                }
                for k in 0..n {
                    let apk = a[p * n + k];
                    let aqk = a[q * n + k];
                    a[p * n + k] = c * apk - s * aqk;
                    a[q * n + k] = s * apk + c * aqk;
                }
                for k in 0..n {
                    let vkp = v[k * n + p];
                    let vkq = v[k * n + q];
                    v[k * n + p] = c * vkp - s * vkq;
                    v[k * n + q] = s * vkp + c * vkq;
                }
            }
        }
    }

    let eigenvalues: Vec<f64> = (0..n).map(|i| a[i * n + i]).collect();
    (eigenvalues, v)
}
