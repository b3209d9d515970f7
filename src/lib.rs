pub mod chart;
pub mod error;
pub mod fuel;
pub mod loader;
pub mod report;
pub mod summary;
pub mod trips;
