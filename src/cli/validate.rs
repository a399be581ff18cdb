use std::path::{Path, PathBuf};

use clap::Args;
use tracing::info;

use crate::cli::ProfileArgs;
use crate::profiles::coverage::{ParameterCoverage, analyze_table};
use crate::report::format_value;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub(crate) profile: ProfileArgs,

    /// Optional output directory for coverage.tsv
    #[arg(long)]
    out: Option<PathBuf>,
}

pub fn handle(args: ValidateArgs) -> anyhow::Result<()> {
    let profile = args.profile.source().load()?;
    let coverage = analyze_table(&profile.thresholds());
    info!(
        profile = profile.id.as_str(),
        parameters = profile.parameters.len(),
        regions = profile.regions.len(),
        "profile is valid"
    );

    println!("parameter\tkind\tlower\tupper\tfrom\tto");
    for cov in &coverage {
        println!(
            "{}\tdomain\t.\t.\t{}\t{}",
            cov.parameter,
            format_value(cov.domain_min),
            format_value(cov.domain_max)
        );
        for finding in &cov.findings {
            let (lower, upper) = finding.levels();
            let (from, to) = finding.range();
            println!(
                "{}\t{}\t{}\t{}\t{}\t{}",
                cov.parameter,
                finding.kind(),
                lower,
                upper,
                format_value(from),
                format_value(to)
            );
        }
    }

    if let Some(out) = &args.out {
        std::fs::create_dir_all(out)?;
        write_coverage(out, &coverage)?;
    }
    Ok(())
}

fn write_coverage(out_dir: &Path, coverage: &[ParameterCoverage]) -> anyhow::Result<()> {
    let path = out_dir.join("coverage.tsv");
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(path)?;
    writer.write_record(["parameter", "kind", "lower", "upper", "from", "to"])?;
    for cov in coverage {
        writer.write_record([
            cov.parameter.clone(),
            "domain".to_string(),
            ".".to_string(),
            ".".to_string(),
            format_value(cov.domain_min),
            format_value(cov.domain_max),
        ])?;
        for finding in &cov.findings {
            let (lower, upper) = finding.levels();
            let (from, to) = finding.range();
            writer.write_record([
                cov.parameter.clone(),
                finding.kind().to_string(),
                lower.as_str().to_string(),
                upper.as_str().to_string(),
                format_value(from),
                format_value(to),
            ])?;
        }
    }
    writer.flush()?;
    Ok(())
}
