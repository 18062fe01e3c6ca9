//! Probabilistic dependencies
//!
//! pdep(A) is the probability that two rows drawn uniformly at random, with replacement,
//! agree on A. pdep(A, B) is the probability that two such rows agreeing on A also agree
//! on B. Its expected value when A and B are independent grows with the number of distinct
//! values of A, so the genuine dependency gpdep(A, B) is the observed pdep minus that baseline.
//!
//! All functions return `Ok(None)` when the measure is undefined for the counted table
//! (currently: no rows at all), and an error when called with arguments that do not fit
//! the index.
use crate::counts::CountsIndex;
use crate::data::CellData;
use crate::errors::PdepError;
use std::collections::BTreeMap;

/// Observed pdep of a pair together with its genuine pdep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PdepResult {
    pub pdep: f64,
    pub gpdep: f64,
}

/// pdep(A) for a single attribute A.
///
/// * `index` - Counts of the table, order 1 is used.
/// * `lhs` - Attribute set with exactly one column.
pub fn pdep_unconditional<T: CellData>(index: &CountsIndex<T>, lhs: &[usize]) -> Result<Option<f64>, PdepError> {
    if lhs.len() != 1 {
        return Err(PdepError::InvalidArgument(format!(
            "pdep without a right hand side needs exactly one attribute, {} provided",
            lhs.len()
        )));
    }
    let counts = index.lhs_counts(lhs)?;
    let n_rows = index.n_rows();
    if n_rows == 0 {
        return Ok(None);
    }
    let n_rows = n_rows as f64;
    let squares: f64 = counts.value_counts.values().map(|c| c * c).sum();
    Ok(Some(squares / (n_rows * n_rows)))
}

/// pdep(A, B).
///
/// B being part of A is not an error, no conditional counts exist
/// for such a pair and the result is 0.
///
/// * `index` - Counts of the table, the order matching `lhs.len()` is used.
/// * `lhs` - Left hand side attribute set.
/// * `rhs` - Right hand side column.
pub fn pdep_conditional<T: CellData>(
    index: &CountsIndex<T>,
    lhs: &[usize],
    rhs: usize,
) -> Result<Option<f64>, PdepError> {
    let counts = index.lhs_counts(lhs)?;
    index.check_column(rhs)?;
    let n_rows = index.n_rows();
    if n_rows == 0 {
        return Ok(None);
    }
    // Group the squared counts by a_v before dividing. Integer valued sums are exact,
    // so the result does not depend on the iteration order of the hash maps.
    let mut squares_by_lhs_count: BTreeMap<u64, f64> = BTreeMap::new();
    for rhs_map in counts.rhs_counts[rhs].values() {
        let lhs_count: f64 = rhs_map.values().sum();
        *squares_by_lhs_count.entry(lhs_count as u64).or_insert(0.0) += rhs_map.values().map(|n| n * n).sum::<f64>();
    }
    let total: f64 = squares_by_lhs_count
        .iter()
        .map(|(&lhs_count, squares)| squares / lhs_count as f64)
        .sum();
    Ok(Some(total / n_rows as f64))
}

/// pdep(A) when `rhs` is None, pdep(A, B) otherwise.
pub fn pdep<T: CellData>(index: &CountsIndex<T>, lhs: &[usize], rhs: Option<usize>) -> Result<Option<f64>, PdepError> {
    match rhs {
        Some(rhs) => pdep_conditional(index, lhs, rhs),
        None => pdep_unconditional(index, lhs),
    }
}

/// Expected value of pdep(A, B) if B were independent of A.
///
/// E[pdep(A, B)] = pdep(B) + (d - 1) / (R - 1) * (1 - pdep(B)), where d is the
/// number of distinct values of A and R the number of rows.
/// Fails with [`PdepError::DivisionUndefined`] for a table of a single row.
pub fn expected_pdep<T: CellData>(
    index: &CountsIndex<T>,
    lhs: &[usize],
    rhs: usize,
) -> Result<Option<f64>, PdepError> {
    let counts = index.lhs_counts(lhs)?;
    index.check_column(rhs)?;
    let pdep_b = match pdep_unconditional(index, &[rhs])? {
        Some(p) => p,
        None => return Ok(None),
    };

    let n_distinct = match lhs.len() {
        1 => counts.n_distinct(),
        _ => counts.rhs_counts[rhs].len(),
    };
    let n_rows = index.n_rows();
    if n_rows < 2 {
        return Err(PdepError::DivisionUndefined(n_rows));
    }

    let spread = (n_distinct as f64 - 1.0) / (n_rows as f64 - 1.0);
    Ok(Some(pdep_b + spread * (1.0 - pdep_b)))
}

/// Genuine pdep, gpdep(A, B) = pdep(A, B) - E[pdep(A, B)].
///
/// Returns `None` if either part is undefined.
pub fn gpdep<T: CellData>(index: &CountsIndex<T>, lhs: &[usize], rhs: usize) -> Result<Option<PdepResult>, PdepError> {
    let pdep_a_b = pdep_conditional(index, lhs, rhs)?;
    let epdep_a_b = expected_pdep(index, lhs, rhs)?;
    Ok(match (pdep_a_b, epdep_a_b) {
        (Some(pdep), Some(expected)) => Some(PdepResult {
            pdep,
            gpdep: pdep - expected,
        }),
        _ => None,
    })
}
