pub mod a001_timeline;
pub mod a002_air_quality;
pub mod a003_earthquake;
pub mod a004_global_warming;
pub mod a005_wildfire;
