use serde_json::{Value, json};

use crate::dataset::classified::ClassifiedTable;
use crate::model::thresholds::{ClassifyError, ThresholdTable};
use crate::report::format_value;

pub const DEFAULT_ZOOM: f64 = 5.5;
pub const POINT_RADIUS_M: u32 = 20_000;

/// GeoJSON layer with one point per region, colored by the alert level of
/// `parameter`. The `view` foreign member centres the map on the regions.
pub fn build_map_layer(
    thresholds: &ThresholdTable,
    table: &ClassifiedTable,
    parameter: &str,
) -> Result<Value, ClassifyError> {
    let spec = thresholds.parameter(parameter)?;

    let mut features = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let Some(cell) = row.cell(parameter) else {
            return Err(ClassifyError::UnknownParameter(parameter.to_string()));
        };
        let tooltip = format!(
            "Région: {} | {}: {} | Niveau: {} | Impact: {}",
            row.name,
            spec.label,
            format_value(cell.value),
            cell.level,
            row.impact
        );
        features.push(json!({
            "type": "Feature",
            "geometry": {
                "type": "Point",
                "coordinates": [row.longitude, row.latitude],
            },
            "properties": {
                "region": row.name,
                "parameter": spec.id,
                "value": cell.value,
                "level": cell.level,
                "fallback": cell.fallback,
                "color": cell.level.color(),
                "radius": POINT_RADIUS_M,
                "impact": row.impact,
                "tooltip": tooltip,
            },
        }));
    }

    let n = table.rows.len().max(1) as f64;
    let lat = table.rows.iter().map(|r| r.latitude).sum::<f64>() / n;
    let lon = table.rows.iter().map(|r| r.longitude).sum::<f64>() / n;

    Ok(json!({
        "type": "FeatureCollection",
        "view": {
            "latitude": lat,
            "longitude": lon,
            "zoom": DEFAULT_ZOOM,
        },
        "features": features,
    }))
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/map.rs"]
mod tests;
