pub mod config;
pub mod contacts;
pub mod log;
pub mod query;
pub mod record;
pub mod report;
pub mod roster;
