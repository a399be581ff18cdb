use serde::Serialize;

/// One row of the region dataset. `values` is aligned with the owning
/// dataset's parameter order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub values: Vec<f64>,
    pub impact: String,
}
