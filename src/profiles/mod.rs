pub mod coverage;
pub mod defs;
pub mod loader;
