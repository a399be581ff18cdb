use clap::Args;

use crate::cli::ProfileArgs;
use crate::report::format_value;

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub(crate) profile: ProfileArgs,

    /// Parameter id, e.g. "Température"
    #[arg(long)]
    pub(crate) parameter: String,

    /// Measured value
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) value: f64,
}

pub fn handle(args: ClassifyArgs) -> anyhow::Result<()> {
    let profile = args.profile.source().load()?;
    let thresholds = profile.thresholds();
    let spec = thresholds.parameter(&args.parameter)?;
    let result = spec.classify(args.value);

    println!("parameter\tvalue\tlevel\ttitle\trecommendation");
    let (title, recommendation) = spec
        .band(result.level)
        .map(|b| (b.title.as_str(), b.recommendation.as_str()))
        .unwrap_or(("", ""));
    println!(
        "{}\t{}\t{}\t{}\t{}",
        spec.id,
        format_value(args.value),
        result.level,
        title,
        recommendation
    );
    if result.fallback {
        println!("# value outside every threshold band, lowest level assigned");
    }
    Ok(())
}
