pub mod histogram;
pub mod ownership;
pub mod school;
pub mod thresholds;
