pub mod stats;
pub mod submission;
