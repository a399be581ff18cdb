pub mod levels;
pub mod region;
pub mod thresholds;
