//! Probabilistic dependencies between the attributes of a table.
//!
//! A [`CountsIndex`] is built once per table, after which pdep, expected pdep and
//! genuine pdep (gpdep) of any LHS attribute set and RHS column are read off the counts.
//! [`calc_all_gpdeps`] evaluates every pair of a given order.

// Modules
pub mod batch;
pub mod counts;
pub mod data;
pub mod errors;
pub mod pdep;
pub mod utils;

// Individual classes, and functions
pub use batch::config::{BatchConfig, ConfigIO};
pub use batch::core::{calc_all_gpdeps, calc_all_gpdeps_from_table, BatchResult};
pub use counts::{column_frequencies, AttributeSet, CountsIndex};
pub use data::{Table, Value};
pub use errors::PdepError;
pub use pdep::{expected_pdep, gpdep, pdep, pdep_conditional, pdep_unconditional, PdepResult};
