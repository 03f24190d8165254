//! Execution engines for independent replicate computations
//!
//! The replicate loop has no data dependency between iterations, so it can
//! run sequentially or fan out across a thread pool. Engines only decide
//! where the iterations run; determinism comes from per-replicate seeding
//! in the caller, so both engines produce identical results for a fixed
//! seed.

/// Runs `count` independent tasks and collects their results in index order
pub trait ExecutionEngine: Clone + Send + Sync {
    /// Execute `task(0..count)` and return the results in order
    fn run<T, F>(&self, count: usize, task: F) -> Vec<T>
    where
        T: Send,
        F: Fn(usize) -> T + Send + Sync;

    /// Whether this engine may run tasks concurrently
    fn is_parallel(&self) -> bool {
        false
    }
}

/// Single-threaded engine; the default
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialEngine;

impl ExecutionEngine for SequentialEngine {
    fn run<T, F>(&self, count: usize, task: F) -> Vec<T>
    where
        T: Send,
        F: Fn(usize) -> T + Send + Sync,
    {
        (0..count).map(task).collect()
    }
}

/// Rayon-backed engine
#[cfg(feature = "parallel")]
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelEngine;

#[cfg(feature = "parallel")]
impl ExecutionEngine for ParallelEngine {
    fn run<T, F>(&self, count: usize, task: F) -> Vec<T>
    where
        T: Send,
        F: Fn(usize) -> T + Send + Sync,
    {
        use rayon::prelude::*;
        (0..count).into_par_iter().map(task).collect()
    }

    fn is_parallel(&self) -> bool {
        true
    }
}

/// Create a sequential engine
pub fn sequential() -> SequentialEngine {
    SequentialEngine
}

/// Create a parallel engine
#[cfg(feature = "parallel")]
pub fn parallel() -> ParallelEngine {
    ParallelEngine
}

/// Best engine available under the enabled features
#[cfg(feature = "parallel")]
pub fn auto_engine() -> ParallelEngine {
    ParallelEngine
}

/// Best engine available under the enabled features
#[cfg(not(feature = "parallel"))]
pub fn auto_engine() -> SequentialEngine {
    SequentialEngine
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_preserves_order() {
        let engine = sequential();
        let results = engine.run(5, |i| i * 10);
        assert_eq!(results, vec![0, 10, 20, 30, 40]);
        assert!(!engine.is_parallel());
    }

    #[test]
    fn test_sequential_empty() {
        let results: Vec<usize> = sequential().run(0, |i| i);
        assert!(results.is_empty());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let task = |i: usize| (i as f64).sqrt();
        let seq = sequential().run(100, task);
        let par = parallel().run(100, task);
        assert_eq!(seq, par);
        assert!(parallel().is_parallel());
    }
}
