pub mod batch;

pub use batch::{score_file, BatchReport, BatchRunner, FileFailure, FileScore};
