pub mod reading;
pub mod submission;
