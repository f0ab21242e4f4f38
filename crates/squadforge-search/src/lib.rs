//! Team search: explores the space of team compositions over a candidate
//! pool and returns the top-N distinct teams by fitness.
//!
//! Two interchangeable strategies, both bounded:
//!
//! - **Sampling** draws `samples` random teams from the pool.
//! - **Genetic** evolves a population with tournament selection, slot-mask
//!   crossover, single-slot mutation, and best-ever elitism.
//!
//! Runs are reproducible: a seeded [`rand_pcg::Pcg64Mcg`] drives every
//! draw, and the effective seed is reported in the outcome so any run can
//! be replayed. Fitness evaluation is batch-parallel on scoped threads;
//! cancellation and the optional time budget are checked at batch and
//! generation boundaries, returning the best teams found so far.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

pub use self::{
    config::{AlgorithmConfig, AlgorithmKind, ConfigError, SearchConfig},
    pool::CandidatePool,
    searcher::{ScoredTeam, SearchOutcome, TeamSearcher},
};

pub mod config;
mod genetic;
pub mod pool;
mod sampling;
pub mod searcher;
mod top;

/// Cooperative cancellation flag shared between a search run and its
/// caller.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
