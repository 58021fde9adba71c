pub mod ficha;
pub mod rank;
pub mod report;
pub mod summarize;
