pub mod commands;
pub mod records;
pub mod report;
pub mod utils;
