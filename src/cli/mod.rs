use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::profiles::loader::{DEFAULT_PROFILE, ProfileSource};

mod classify;
mod profiles;
mod run;
mod validate;

#[derive(Parser, Debug)]
#[command(name = "sap-meteo", version, about = "Weather early-warning CLI")]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Run(run::RunArgs),
    Classify(classify::ClassifyArgs),
    Validate(validate::ValidateArgs),
    Profiles(profiles::ProfilesArgs),
}

impl Cli {
    pub fn dispatch(self) -> anyhow::Result<()> {
        match self.command {
            Command::Run(args) => run::handle(args),
            Command::Classify(args) => classify::handle(args),
            Command::Validate(args) => validate::handle(args),
            Command::Profiles(args) => profiles::handle(args),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub(crate) struct ProfileArgs {
    /// Built-in profile id
    #[arg(long, default_value = DEFAULT_PROFILE)]
    profile: String,

    /// Profile TOML file, replaces the built-in profile
    #[arg(long, conflicts_with = "profile")]
    profile_file: Option<PathBuf>,
}

impl ProfileArgs {
    pub(crate) fn source(&self) -> ProfileSource {
        match &self.profile_file {
            Some(path) => ProfileSource::File(path.clone()),
            None => ProfileSource::Builtin(self.profile.clone()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/cli/mod.rs"]
mod tests;
