use clap::{Parser, Subcommand};

use self::{
    score_team::ScoreTeamArg, search_teams::SearchTeamsArg, synthesize_build::SynthesizeBuildArg,
};

mod score_team;
mod search_teams;
mod synthesize_build;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Synthesize a single build for an archetype and role
    SynthesizeBuild(#[clap(flatten)] SynthesizeBuildArg),
    /// Score an existing team composition
    ScoreTeam(#[clap(flatten)] ScoreTeamArg),
    /// Search for high-scoring team compositions
    SearchTeams(#[clap(flatten)] SearchTeamsArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::SynthesizeBuild(arg) => synthesize_build::run(&arg)?,
        Mode::ScoreTeam(arg) => score_team::run(&arg)?,
        Mode::SearchTeams(arg) => search_teams::run(&arg)?,
    }
    Ok(())
}
