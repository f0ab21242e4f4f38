use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;
use squadforge_catalog::Role;
use squadforge_search::{AlgorithmKind, CandidatePool, ScoredTeam, SearchConfig, TeamSearcher};

use crate::util::{self, Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SearchTeamsArg {
    /// Game catalog JSON file
    #[arg(long)]
    catalog: PathBuf,
    /// Search configuration JSON file
    #[arg(long)]
    config: PathBuf,
    /// Selection rules JSON file (built-in rules when omitted)
    #[arg(long)]
    rules: Option<PathBuf>,
    /// Seed override for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
struct SearchReport {
    generated_at: DateTime<Utc>,
    pool_size: usize,
    algorithm: AlgorithmKind,
    seed: u64,
    evaluations: u64,
    teams: Vec<ScoredTeam>,
}

pub(crate) fn run(arg: &SearchTeamsArg) -> anyhow::Result<()> {
    let SearchTeamsArg {
        catalog,
        config,
        rules,
        seed,
        output,
    } = arg;

    let catalog = util::read_catalog_file(catalog)?;
    let rules = util::read_rules_file(rules.as_deref())?;
    let mut config: SearchConfig = util::read_json_file("search config", config)?;
    if seed.is_some() {
        config.seed = *seed;
    }

    let archetypes = if config.allowed_archetypes.is_empty() {
        catalog.archetypes.iter().map(|a| a.name.clone()).collect()
    } else {
        config.allowed_archetypes.clone()
    };
    let roles = search_roles(&config);

    eprintln!(
        "Synthesizing candidate pool for {} archetypes x {} roles...",
        archetypes.len(),
        roles.len()
    );
    let pool = CandidatePool::synthesize(&catalog, &rules, &archetypes, &roles)?;
    eprintln!("Pool holds {} candidate loadouts", pool.len());
    let pool_size = pool.len();

    let searcher = TeamSearcher::new(pool, config)?;
    eprintln!("Running search...");
    let outcome = searcher.run();
    eprintln!(
        "Search finished: {} evaluations with seed {}",
        outcome.evaluations, outcome.seed
    );
    if let Some(best) = outcome.teams.first() {
        eprintln!("Best team score: {:.3}", best.score.total_score);
    }

    let report = SearchReport {
        generated_at: Utc::now(),
        pool_size,
        algorithm: outcome.algorithm,
        seed: outcome.seed,
        evaluations: outcome.evaluations,
        teams: outcome.teams,
    };
    Output::save_json(&report, output.clone())
}

/// Roles the pool is synthesized for: the roles the scoring asks for, or
/// every role when the scoring has no role requirements.
fn search_roles(config: &SearchConfig) -> Vec<Role> {
    let mut roles: Vec<Role> = config
        .scoring
        .required_roles
        .iter()
        .map(|requirement| requirement.role)
        .collect();
    roles.sort_unstable();
    roles.dedup();
    if roles.is_empty() {
        roles = Role::ALL.to_vec();
    }
    roles
}
