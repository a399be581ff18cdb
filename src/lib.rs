pub mod aggregate;
pub mod cli;
pub mod dataset;
pub mod model;
pub mod pipeline;
pub mod profiles;
pub mod report;

pub mod prelude {
    pub use crate::aggregate::alerts::{AlertReport, aggregate};
    pub use crate::dataset::RegionDataset;
    pub use crate::model::levels::AlertLevel;
    pub use crate::model::thresholds::ThresholdTable;
    pub use crate::profiles::loader::ProfileSource;
}
