use std::path::PathBuf;

use squadforge_scorer::{ScoringConfig, TeamComposition, score_team};

use crate::util::{self, Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ScoreTeamArg {
    /// Team composition JSON file
    #[arg(long)]
    team: PathBuf,
    /// Scoring configuration JSON file
    #[arg(long)]
    config: PathBuf,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ScoreTeamArg) -> anyhow::Result<()> {
    let ScoreTeamArg {
        team,
        config,
        output,
    } = arg;

    let team: TeamComposition = util::read_json_file("team", team)?;
    let config: ScoringConfig = util::read_json_file("scoring config", config)?;

    let result = score_team(&team, &config);
    Output::save_json(&result, output.clone())
}
