use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::profiles::loader::load_all_builtin;

#[derive(Args, Debug)]
pub struct ProfilesArgs {
    #[command(subcommand)]
    command: ProfilesCommand,
}

#[derive(Subcommand, Debug)]
enum ProfilesCommand {
    List,
    Dump(ProfilesDumpArgs),
}

#[derive(Args, Debug)]
pub struct ProfilesDumpArgs {
    /// Output directory
    #[arg(long)]
    out: PathBuf,
}

pub fn handle(args: ProfilesArgs) -> anyhow::Result<()> {
    match args.command {
        ProfilesCommand::List => list_profiles(),
        ProfilesCommand::Dump(args) => dump_profiles(args),
    }
}

fn list_profiles() -> anyhow::Result<()> {
    let profiles = load_all_builtin()?;
    println!("profile_id\tn_parameters\tn_regions\tparameters");
    for profile in profiles {
        println!(
            "{}\t{}\t{}\t{}",
            profile.id,
            profile.parameters.len(),
            profile.regions.len(),
            profile.parameter_ids().collect::<Vec<_>>().join(",")
        );
    }
    Ok(())
}

fn dump_profiles(args: ProfilesDumpArgs) -> anyhow::Result<()> {
    std::fs::create_dir_all(&args.out)?;
    let profiles = load_all_builtin()?;
    let json = serde_json::to_string_pretty(&profiles)?;
    let path = args.out.join("profiles_manifest.json");
    std::fs::write(path, json)?;
    Ok(())
}
