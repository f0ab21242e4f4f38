use std::path::PathBuf;

use squadforge_builder::BuildSynthesizer;
use squadforge_catalog::Role;

use crate::util::{self, Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SynthesizeBuildArg {
    /// Game catalog JSON file
    #[arg(long)]
    catalog: PathBuf,
    /// Archetype name to build for
    #[arg(long)]
    archetype: String,
    /// Role the build should fill
    #[arg(long)]
    role: Role,
    /// Elite specialization to force into the build
    #[arg(long)]
    elite_spec: Option<String>,
    /// Selection rules JSON file (built-in rules when omitted)
    #[arg(long)]
    rules: Option<PathBuf>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &SynthesizeBuildArg) -> anyhow::Result<()> {
    let SynthesizeBuildArg {
        catalog,
        archetype,
        role,
        elite_spec,
        rules,
        output,
    } = arg;

    let catalog = util::read_catalog_file(catalog)?;
    let rules = util::read_rules_file(rules.as_deref())?;

    let synthesizer = BuildSynthesizer::new(&catalog, &rules);
    let loadout = synthesizer.synthesize(archetype, *role, elite_spec.as_deref())?;

    Output::save_json(&loadout, output.clone())
}
