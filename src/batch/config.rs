//! Batch Configuration
//!
//! Parameters of a batch gpdep run, readable from JSON.
use crate::errors::PdepError;
use crate::utils::validate_usize_parameter;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_order() -> usize {
    1
}
fn default_parallel() -> bool {
    false
}
fn default_num_threads() -> Option<usize> {
    None
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Size of the LHS attribute sets.
    #[serde(default = "default_order")]
    pub order: usize,
    /// Count rows and evaluate attribute sets on a thread pool.
    #[serde(default = "default_parallel")]
    pub parallel: bool,
    /// Threads of the pool, all available cores when None.
    #[serde(default = "default_num_threads")]
    pub num_threads: Option<usize>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            order: default_order(),
            parallel: default_parallel(),
            num_threads: default_num_threads(),
        }
    }
}

impl BatchConfig {
    pub fn new(order: usize) -> Self {
        BatchConfig {
            order,
            ..Default::default()
        }
    }

    /// Set the order of the batch.
    /// * `order` - Size of the LHS attribute sets.
    pub fn set_order(mut self, order: usize) -> Self {
        self.order = order;
        self
    }

    /// Set whether the batch runs in parallel.
    pub fn set_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the number of threads.
    /// * `num_threads` - Threads used when `parallel` is set.
    pub fn set_num_threads(mut self, num_threads: Option<usize>) -> Self {
        self.num_threads = num_threads;
        self
    }

    /// Check the parameters against a table of `n_cols` columns.
    pub fn validate(&self, n_cols: usize) -> Result<(), PdepError> {
        validate_usize_parameter(self.order, 1, n_cols, "order")?;
        if let Some(n) = self.num_threads {
            validate_usize_parameter(n, 1, usize::MAX, "num_threads")?;
        }
        Ok(())
    }
}

/// JSON input and output of configuration structures.
pub trait ConfigIO: Serialize + DeserializeOwned + Sized {
    /// Dump the configuration as a JSON string.
    fn json_dump(&self) -> Result<String, PdepError> {
        serde_json::to_string(self).map_err(|e| PdepError::InvalidConfig(e.to_string()))
    }

    /// Load a configuration from a JSON string. Missing fields take their defaults.
    /// * `json_str` - JSON string of the configuration.
    fn from_json(json_str: &str) -> Result<Self, PdepError> {
        serde_json::from_str::<Self>(json_str).map_err(|e| PdepError::InvalidConfig(e.to_string()))
    }

    /// Load a configuration from a JSON file.
    /// * `path` - Path of the file to read.
    fn load_config<P: AsRef<Path>>(path: P) -> Result<Self, PdepError> {
        let json_str = fs::read_to_string(path).map_err(|e| PdepError::InvalidConfig(e.to_string()))?;
        Self::from_json(&json_str)
    }
}

impl ConfigIO for BatchConfig {}
