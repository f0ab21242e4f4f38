//! Search orchestration.

use std::{
    thread,
    time::{Duration, Instant},
};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use serde::{Deserialize, Serialize};

use squadforge_builder::Loadout;
use squadforge_scorer::{ScoreResult, ScoringConfig, TeamComposition, score_members};

use crate::{
    CancelToken,
    config::{AlgorithmConfig, AlgorithmKind, ConfigError, SearchConfig},
    genetic,
    pool::CandidatePool,
    sampling,
    top::TopTeams,
};

/// One ranked team in a search outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTeam {
    pub team: TeamComposition,
    pub score: ScoreResult,
}

/// Everything a finished search run reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Top teams, best first.
    pub teams: Vec<ScoredTeam>,
    pub algorithm: AlgorithmKind,
    /// Fitness evaluations performed across the whole run.
    pub evaluations: u64,
    /// The seed that drove the run. Replaying with this seed reproduces
    /// the outcome exactly.
    pub seed: u64,
}

/// Shared state the strategies operate against.
pub(crate) struct SearchContext<'a> {
    pool: &'a [Loadout],
    scoring: &'a ScoringConfig,
    team_size: usize,
    allow_duplicates: bool,
    cancel: &'a CancelToken,
    deadline: Option<Instant>,
}

impl SearchContext<'_> {
    pub(crate) fn should_stop(&self) -> bool {
        self.cancel.is_cancelled()
            || self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// Draws a full team of pool indices.
    pub(crate) fn draw_team<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<usize> {
        if self.allow_duplicates {
            (0..self.team_size)
                .map(|_| rng.random_range(0..self.pool.len()))
                .collect()
        } else {
            rand::seq::index::sample(rng, self.pool.len(), self.team_size).into_vec()
        }
    }

    /// Draws a replacement for `slot` that keeps the team free of
    /// duplicates when duplicates are disallowed.
    pub(crate) fn draw_member<R: Rng + ?Sized>(
        &self,
        team: &[usize],
        slot: usize,
        rng: &mut R,
    ) -> usize {
        loop {
            let candidate = rng.random_range(0..self.pool.len());
            if self.allow_duplicates
                || !team
                    .iter()
                    .enumerate()
                    .any(|(i, member)| i != slot && *member == candidate)
            {
                return candidate;
            }
        }
    }

    /// Redraws any slot that repeats an earlier member.
    pub(crate) fn repair_duplicates<R: Rng + ?Sized>(&self, team: &mut [usize], rng: &mut R) {
        if self.allow_duplicates {
            return;
        }
        for slot in 0..team.len() {
            if team[..slot].contains(&team[slot]) {
                team[slot] = self.draw_member(team, slot, rng);
            }
        }
    }

    /// Scores a batch of candidate teams on scoped worker threads.
    ///
    /// The batch is split into per-worker chunks writing into disjoint
    /// slices of the result, so the merge at scope exit is the only
    /// synchronization point.
    pub(crate) fn evaluate_batch(&self, candidates: &[Vec<usize>]) -> Vec<f32> {
        if candidates.is_empty() {
            return vec![];
        }
        let workers = thread::available_parallelism()
            .map_or(1, std::num::NonZero::get)
            .min(candidates.len());
        let chunk_len = candidates.len().div_ceil(workers);

        let mut fitness = vec![0.0_f32; candidates.len()];
        thread::scope(|s| {
            for (candidate_chunk, fitness_chunk) in
                candidates.chunks(chunk_len).zip(fitness.chunks_mut(chunk_len))
            {
                s.spawn(move || {
                    for (team, out) in candidate_chunk.iter().zip(fitness_chunk.iter_mut()) {
                        let members: Vec<&Loadout> =
                            team.iter().map(|&index| &self.pool[index]).collect();
                        *out = score_members(&members, self.scoring).total_score;
                    }
                });
            }
        });
        fitness
    }
}

/// A validated search over one candidate pool.
#[derive(Debug)]
pub struct TeamSearcher {
    pool: CandidatePool,
    config: SearchConfig,
}

impl TeamSearcher {
    /// Validates the configuration against the pool eagerly; no
    /// evaluation happens before validation passes.
    pub fn new(pool: CandidatePool, config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate(pool.len())?;
        Ok(TeamSearcher { pool, config })
    }

    /// Runs the search to completion.
    #[must_use]
    pub fn run(&self) -> SearchOutcome {
        self.run_with_cancel(&CancelToken::new())
    }

    /// Runs the search, checking `cancel` between batches/generations.
    /// A cancelled run returns the best teams found so far.
    #[must_use]
    pub fn run_with_cancel(&self, cancel: &CancelToken) -> SearchOutcome {
        let seed = self.config.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = Pcg64Mcg::seed_from_u64(seed);

        let ctx = SearchContext {
            pool: &self.pool.loadouts,
            scoring: &self.config.scoring,
            team_size: self.config.team_size,
            allow_duplicates: self.config.allow_duplicates,
            cancel,
            deadline: self
                .config
                .time_budget_ms
                .map(|ms| Instant::now() + Duration::from_millis(ms)),
        };

        let mut top = TopTeams::new(self.config.top_n);
        let evaluations = match self.config.algorithm {
            AlgorithmConfig::Sampling { samples } => {
                sampling::run(&ctx, samples, &mut top, &mut rng)
            }
            AlgorithmConfig::Genetic {
                population,
                generations,
                mutation_probability,
                tournament_size,
            } => genetic::run(
                &ctx,
                population,
                generations,
                mutation_probability,
                tournament_size,
                &mut top,
                &mut rng,
            ),
        };

        let teams = top
            .into_entries()
            .into_iter()
            .map(|entry| {
                let members: Vec<Loadout> = entry
                    .indices
                    .iter()
                    .map(|&index| self.pool.loadouts[index].clone())
                    .collect();
                let member_refs: Vec<&Loadout> = members.iter().collect();
                let score = score_members(&member_refs, &self.config.scoring);
                ScoredTeam {
                    team: TeamComposition::new(members),
                    score,
                }
            })
            .collect();

        SearchOutcome {
            teams,
            algorithm: self.config.algorithm.kind(),
            evaluations,
            seed,
        }
    }
}
