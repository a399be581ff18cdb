use std::path::{Path, PathBuf};

use crate::pipeline::stage4_report::{FinalSummary, Stage4Error};

pub fn write_summary(out_dir: &Path, summary: &FinalSummary) -> Result<PathBuf, Stage4Error> {
    let json = serde_json::to_string_pretty(summary)?;
    let path = out_dir.join("summary.json");
    std::fs::write(&path, json)?;
    Ok(path)
}

pub fn write_map(out_dir: &Path, layer: &serde_json::Value) -> Result<PathBuf, Stage4Error> {
    let json = serde_json::to_string_pretty(layer)?;
    let path = out_dir.join("map.geojson");
    std::fs::write(&path, json)?;
    Ok(path)
}
