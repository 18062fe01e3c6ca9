use crate::errors::PdepError;
use rayon::ThreadPool;

// Validation
pub fn validate_usize_parameter(value: usize, min: usize, max: usize, parameter: &str) -> Result<(), PdepError> {
    if value < min || max < value {
        Err(PdepError::InvalidParameter(
            parameter.to_string(),
            format!("integer within range {} and {}", min, max),
            value.to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Build a rayon pool of `num_threads` threads, or one per available core.
pub fn thread_pool(num_threads: Option<usize>) -> Result<ThreadPool, PdepError> {
    let num_threads = match num_threads {
        Some(num_threads) => num_threads,
        None => std::thread::available_parallelism().map_or(1, |n| n.get()),
    };
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
        .map_err(|e| PdepError::ThreadPool(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_usize_parameter() {
        assert!(validate_usize_parameter(2, 1, 3, "order").is_ok());
        assert!(validate_usize_parameter(1, 1, 1, "order").is_ok());
        let err = validate_usize_parameter(4, 1, 3, "order").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid parameter value passed for order, expected integer within range 1 and 3 but 4 provided."
        );
    }

    #[test]
    fn test_thread_pool() {
        let pool = thread_pool(Some(2)).unwrap();
        assert_eq!(pool.current_num_threads(), 2);
        assert!(thread_pool(None).unwrap().current_num_threads() >= 1);
    }
}
