pub mod ideas;
pub mod insights;
pub mod investments;
pub mod splitter;
