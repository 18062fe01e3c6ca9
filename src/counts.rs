//! Counts
//!
//! Co-occurrence counts of attribute values, collected in one pass over a [`Table`].
//! Every pdep measure is evaluated from these counts alone, the table is not needed
//! once the [`CountsIndex`] has been built.
use crate::data::{CellData, Table};
use crate::errors::PdepError;
use hashbrown::HashMap;
use itertools::Itertools;
use log::debug;
use rayon::prelude::*;
use std::time::Instant;

/// Column positions forming a left hand side, in ascending order.
pub type AttributeSet = Vec<usize>;

/// Counts for a single left hand side attribute set.
#[derive(Debug, Clone, PartialEq)]
pub struct LhsCounts<T: CellData> {
    /// Number of rows holding each LHS value tuple.
    pub value_counts: HashMap<Vec<T>, f64>,
    /// For every column of the table, the LHS value tuple mapped
    /// to the frequency of each value of that column.
    /// Columns that are part of the LHS keep an empty map.
    pub rhs_counts: Vec<HashMap<Vec<T>, HashMap<T, f64>>>,
}

impl<T: CellData> LhsCounts<T> {
    fn empty(n_cols: usize) -> Self {
        LhsCounts {
            value_counts: HashMap::new(),
            rhs_counts: vec![HashMap::new(); n_cols],
        }
    }

    /// Number of distinct LHS value tuples.
    pub fn n_distinct(&self) -> usize {
        self.value_counts.len()
    }

    /// Conditional counts for the right hand side column `rhs`.
    pub fn rhs(&self, rhs: usize) -> Option<&HashMap<Vec<T>, HashMap<T, f64>>> {
        self.rhs_counts.get(rhs)
    }

    fn add_row(&mut self, lhs: &[usize], row: &[T]) {
        let lhs_vals: Vec<T> = lhs.iter().map(|&c| row[c].clone()).collect();
        for (rhs, rhs_val) in row.iter().enumerate() {
            if lhs.contains(&rhs) {
                continue;
            }
            *self.rhs_counts[rhs]
                .entry(lhs_vals.clone())
                .or_default()
                .entry(rhs_val.clone())
                .or_insert(0.0) += 1.0;
        }
        *self.value_counts.entry(lhs_vals).or_insert(0.0) += 1.0;
    }

    fn merge(&mut self, other: LhsCounts<T>) {
        for (lhs_vals, count) in other.value_counts {
            *self.value_counts.entry(lhs_vals).or_insert(0.0) += count;
        }
        for (mine, theirs) in self.rhs_counts.iter_mut().zip(other.rhs_counts) {
            for (lhs_vals, rhs_map) in theirs {
                let target = mine.entry(lhs_vals).or_default();
                for (rhs_val, count) in rhs_map {
                    *target.entry(rhs_val).or_insert(0.0) += count;
                }
            }
        }
    }
}

/// Counts of every attribute set of one size (the order).
#[derive(Debug, Clone, PartialEq)]
pub struct OrderCounts<T: CellData> {
    /// Size of every LHS attribute set.
    pub order: usize,
    /// Counts keyed by LHS attribute set.
    pub sets: HashMap<AttributeSet, LhsCounts<T>>,
}

impl<T: CellData> OrderCounts<T> {
    fn empty(n_cols: usize, order: usize) -> Self {
        let sets = (0..n_cols)
            .combinations(order)
            .map(|lhs| (lhs, LhsCounts::empty(n_cols)))
            .collect();
        OrderCounts { order, sets }
    }

    fn add_row(&mut self, row: &[T]) {
        for (lhs, counts) in self.sets.iter_mut() {
            counts.add_row(lhs, row);
        }
    }

    fn merge(mut self, other: OrderCounts<T>) -> Self {
        // Both sides come from `empty` with the same order, so they hold the same attribute sets.
        for (lhs, counts) in other.sets {
            if let Some(mine) = self.sets.get_mut(&lhs) {
                mine.merge(counts);
            }
        }
        self
    }

    /// Count every attribute set of size `order` against every column of `table`.
    ///
    /// * `table` - The data to count.
    /// * `order` - Size of the LHS attribute sets, between 1 and the number of columns.
    /// * `parallel` - Split the rows across threads and merge the partial counts.
    pub fn build(table: &Table<T>, order: usize, parallel: bool) -> Result<Self, PdepError> {
        if order == 0 || order > table.cols {
            return Err(PdepError::InvalidArgument(format!(
                "order must be between 1 and the number of columns ({}), {} provided",
                table.cols, order
            )));
        }
        let n_cols = table.cols;
        let counts = if parallel {
            table
                .data
                .par_chunks(n_cols)
                .fold(
                    || OrderCounts::empty(n_cols, order),
                    |mut acc, row| {
                        acc.add_row(row);
                        acc
                    },
                )
                .reduce(|| OrderCounts::empty(n_cols, order), OrderCounts::merge)
        } else {
            table.row_iter().fold(OrderCounts::empty(n_cols, order), |mut acc, row| {
                acc.add_row(row);
                acc
            })
        };
        Ok(counts)
    }

    /// Total number of rows counted, summed over all LHS values of one attribute set.
    pub fn total(&self) -> f64 {
        self.sets
            .values()
            .next()
            .map_or(0.0, |c| c.value_counts.values().sum())
    }
}

/// Immutable co-occurrence counts of a table, for one or more orders.
///
/// Order 1 is always present, since the expected pdep of any pair
/// needs the unary counts of its right hand side.
#[derive(Debug, Clone, PartialEq)]
pub struct CountsIndex<T: CellData> {
    n_rows: usize,
    n_cols: usize,
    orders: HashMap<usize, OrderCounts<T>>,
}

impl<T: CellData> CountsIndex<T> {
    /// Build the counts of `table` for each of `orders`.
    ///
    /// * `table` - The data to count.
    /// * `orders` - LHS attribute set sizes to count, order 1 is added if missing.
    /// * `parallel` - Count rows in parallel.
    pub fn new(table: &Table<T>, orders: &[usize], parallel: bool) -> Result<Self, PdepError> {
        let mut requested: Vec<usize> = orders.to_vec();
        requested.push(1);
        requested.sort_unstable();
        requested.dedup();

        let mut built = HashMap::with_capacity(requested.len());
        for order in requested {
            let start = Instant::now();
            let counts = OrderCounts::build(table, order, parallel)?;
            debug!(
                "Counted {} attribute sets of order {} over {} rows in {:.3}s.",
                counts.sets.len(),
                order,
                table.rows,
                start.elapsed().as_secs_f32()
            );
            built.insert(order, counts);
        }

        Ok(CountsIndex {
            n_rows: table.rows,
            n_cols: table.cols,
            orders: built,
        })
    }

    /// Number of rows of the counted table.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns of the counted table.
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Orders available in the index, ascending.
    pub fn orders(&self) -> Vec<usize> {
        let mut orders: Vec<usize> = self.orders.keys().copied().collect();
        orders.sort_unstable();
        orders
    }

    /// Counts of all attribute sets of size `order`.
    pub fn order(&self, order: usize) -> Result<&OrderCounts<T>, PdepError> {
        self.orders.get(&order).ok_or_else(|| {
            PdepError::InvalidArgument(format!(
                "order {} was not counted, available orders are {:?}",
                order,
                self.orders()
            ))
        })
    }

    /// Counts of a single LHS attribute set, looked up in the order matching its size.
    pub fn lhs_counts(&self, lhs: &[usize]) -> Result<&LhsCounts<T>, PdepError> {
        self.order(lhs.len())?
            .sets
            .get(lhs)
            .ok_or_else(|| PdepError::InvalidArgument(format!("attribute set {:?} is not in the index", lhs)))
    }

    pub(crate) fn check_column(&self, col: usize) -> Result<(), PdepError> {
        if col >= self.n_cols {
            Err(PdepError::InvalidArgument(format!(
                "column {} out of range for a table with {} columns",
                col, self.n_cols
            )))
        } else {
            Ok(())
        }
    }
}

/// Absolute frequency of every value of column `col`.
pub fn column_frequencies<T: CellData>(table: &Table<T>, col: usize) -> Result<HashMap<T, f64>, PdepError> {
    if col >= table.cols {
        return Err(PdepError::InvalidArgument(format!(
            "column {} out of range for a table with {} columns",
            col, table.cols
        )));
    }
    let mut freqs = HashMap::new();
    for row in table.row_iter() {
        *freqs.entry(row[col].clone()).or_insert(0.0) += 1.0;
    }
    Ok(freqs)
}
