pub mod alternative;
pub mod status;
pub mod submission;
