#![allow(dead_code)]
use pdep::Table;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// create_table
//
// Generates a table whose column j takes
// values in 0..cardinalities[j], plus one column
// that is a noisy copy of the first
pub(crate) fn create_table(n_rows: usize, cardinalities: &[u32]) -> Table<u32> {
    // reproducible seed
    let mut rng = StdRng::seed_from_u64(1903);

    let n_cols = cardinalities.len() + 1;
    let mut data = Vec::with_capacity(n_rows * n_cols);
    for _ in 0..n_rows {
        let mut first = 0;
        for (j, &card) in cardinalities.iter().enumerate() {
            let v = rng.gen_range(0..card);
            if j == 0 {
                first = v;
            }
            data.push(v);
        }
        // derived column, wrong in roughly 5% of the rows
        if rng.gen_bool(0.05) {
            data.push(rng.gen_range(0..cardinalities[0]));
        } else {
            data.push(first);
        }
    }
    Table::new(data, n_rows, n_cols).unwrap()
}
