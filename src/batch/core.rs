use crate::batch::config::BatchConfig;
use crate::counts::{AttributeSet, CountsIndex};
use crate::data::{CellData, Table};
use crate::errors::PdepError;
use crate::pdep::{gpdep, PdepResult};
use crate::utils::thread_pool;
use hashbrown::HashMap;
use log::{info, warn};
use rayon::prelude::*;
use std::time::Instant;

/// gpdep of every (LHS attribute set, RHS column) pair of one order.
///
/// Every pair appears exactly once, `None` marks a pair whose gpdep is undefined.
/// Right hand sides that are part of their LHS are kept with their degenerate values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BatchResult {
    /// Size of the LHS attribute sets.
    pub order: usize,
    pub results: HashMap<AttributeSet, HashMap<usize, Option<PdepResult>>>,
}

impl BatchResult {
    /// Result of a single pair, `None` if the pair was not evaluated.
    pub fn get(&self, lhs: &[usize], rhs: usize) -> Option<&Option<PdepResult>> {
        self.results.get(lhs).and_then(|by_rhs| by_rhs.get(&rhs))
    }

    /// Number of evaluated pairs.
    pub fn n_pairs(&self) -> usize {
        self.results.values().map(|by_rhs| by_rhs.len()).sum()
    }

    /// Number of pairs whose gpdep is undefined.
    pub fn n_undefined(&self) -> usize {
        self.iter().filter(|(_, _, res)| res.is_none()).count()
    }

    /// Iterate over (lhs, rhs, result) triples, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&AttributeSet, usize, Option<PdepResult>)> + '_ {
        self.results
            .iter()
            .flat_map(|(lhs, by_rhs)| by_rhs.iter().map(move |(&rhs, &res)| (lhs, rhs, res)))
    }
}

fn evaluate_lhs<T: CellData>(
    index: &CountsIndex<T>,
    lhs: &AttributeSet,
) -> Result<(AttributeSet, HashMap<usize, Option<PdepResult>>), PdepError> {
    let mut by_rhs = HashMap::with_capacity(index.n_cols());
    for rhs in 0..index.n_cols() {
        by_rhs.insert(rhs, gpdep(index, lhs, rhs)?);
    }
    Ok((lhs.clone(), by_rhs))
}

/// Calculate gpdep for every LHS attribute set of `cfg.order` in the index
/// against every column of the table.
///
/// A table of a single row fails with [`PdepError::DivisionUndefined`].
pub fn calc_all_gpdeps<T: CellData>(index: &CountsIndex<T>, cfg: &BatchConfig) -> Result<BatchResult, PdepError> {
    cfg.validate(index.n_cols())?;
    let start = Instant::now();
    let lhss: Vec<&AttributeSet> = index.order(cfg.order)?.sets.keys().collect();

    let results = if cfg.parallel {
        let pool = thread_pool(cfg.num_threads)?;
        pool.install(|| {
            lhss.par_iter()
                .map(|lhs| evaluate_lhs(index, lhs))
                .collect::<Result<HashMap<_, _>, PdepError>>()
        })?
    } else {
        lhss.iter()
            .map(|lhs| evaluate_lhs(index, lhs))
            .collect::<Result<HashMap<_, _>, PdepError>>()?
    };

    let batch = BatchResult {
        order: cfg.order,
        results,
    };
    let n_undefined = batch.n_undefined();
    info!(
        "Evaluated {} pairs over {} attribute sets of order {} in {:.3}s.",
        batch.n_pairs(),
        batch.results.len(),
        cfg.order,
        start.elapsed().as_secs_f32()
    );
    if n_undefined > 0 {
        warn!("gpdep is undefined for {} of {} pairs.", n_undefined, batch.n_pairs());
    }
    Ok(batch)
}

/// Count `table` for `cfg.order` and calculate all gpdeps of that order.
pub fn calc_all_gpdeps_from_table<T: CellData>(table: &Table<T>, cfg: &BatchConfig) -> Result<BatchResult, PdepError> {
    cfg.validate(table.cols)?;
    let index = if cfg.parallel {
        thread_pool(cfg.num_threads)?.install(|| CountsIndex::new(table, &[cfg.order], true))?
    } else {
        CountsIndex::new(table, &[cfg.order], false)?
    };
    calc_all_gpdeps(&index, cfg)
}
