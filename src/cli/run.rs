use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use tracing::info;

use crate::cli::ProfileArgs;
use crate::pipeline::stage1_load::run_stage1;
use crate::pipeline::stage2_update::{UpdateRequest, run_stage2};
use crate::pipeline::stage3_classify::run_stage3_classify;
use crate::pipeline::stage4_report::run_stage4_report;

#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub(crate) profile: ProfileArgs,

    /// Output directory
    #[arg(long)]
    out: PathBuf,

    /// Region shown in the metrics panel and target of --set
    #[arg(long)]
    pub(crate) region: Option<String>,

    /// New value for the selected region, as PARAMETER=VALUE
    #[arg(long = "set", value_parser = parse_assignment)]
    pub(crate) set: Vec<(String, f64)>,

    /// Parameter used to color the map layer
    #[arg(long)]
    map_parameter: Option<String>,
}

pub(crate) fn parse_assignment(raw: &str) -> Result<(String, f64), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected PARAMETER=VALUE, got {raw:?}"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing parameter name in {raw:?}"));
    }
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid value in {raw:?}: {e}"))?;
    Ok((name.to_string(), value))
}

/// Folds repeated `--set` flags into one edit. Naming a parameter twice is
/// an error rather than a silent overwrite.
pub(crate) fn collect_assignments(
    assignments: &[(String, f64)],
) -> anyhow::Result<BTreeMap<String, f64>> {
    let mut values = BTreeMap::new();
    for (name, value) in assignments {
        if values.insert(name.clone(), *value).is_some() {
            anyhow::bail!("duplicate --set for {name}");
        }
    }
    Ok(values)
}

pub fn handle(args: RunArgs) -> anyhow::Result<()> {
    let values = collect_assignments(&args.set)?;
    std::fs::create_dir_all(&args.out)?;

    let start = Instant::now();
    info!(stage = "stage1_load", "starting stage");
    let mut ctx = run_stage1(&args.profile.source())?;
    info!(
        stage = "stage1_load",
        elapsed_ms = start.elapsed().as_millis(),
        "finished stage"
    );

    if let Some(p) = &args.map_parameter
        && ctx.thresholds.parameter(p).is_err()
    {
        anyhow::bail!("unknown map parameter: {p}");
    }

    let start = Instant::now();
    info!(stage = "stage2_update", "starting stage");
    let request = UpdateRequest {
        region: args.region.clone(),
        values,
    };
    let selection = run_stage2(&mut ctx, &request)?;
    info!(
        stage = "stage2_update",
        elapsed_ms = start.elapsed().as_millis(),
        region = selection.region.as_str(),
        applied = selection.applied,
        "finished stage"
    );

    let start = Instant::now();
    info!(stage = "stage3_classify", "starting stage");
    let classify_ctx = run_stage3_classify(&ctx, &args.out)?;
    for counts in &classify_ctx.summary.levels {
        for (level, n) in &counts.counts {
            tracing::debug!(
                parameter = counts.parameter.as_str(),
                level = level.as_str(),
                count = *n
            );
        }
    }
    info!(
        stage = "stage3_classify",
        elapsed_ms = start.elapsed().as_millis(),
        fallbacks = classify_ctx.summary.fallbacks,
        "finished stage"
    );

    let start = Instant::now();
    info!(stage = "stage4_report", "starting stage");
    let summary = run_stage4_report(
        &ctx,
        &selection,
        &classify_ctx,
        args.map_parameter.as_deref(),
        &args.out,
    )?;
    info!(
        stage = "stage4_report",
        elapsed_ms = start.elapsed().as_millis(),
        no_danger = summary.no_danger,
        "finished stage"
    );
    Ok(())
}
