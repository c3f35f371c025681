pub mod add;
pub mod calculator;
pub mod config;
pub mod del;
pub mod log;
pub mod logic;
pub mod punch;
pub mod report;
pub mod status;
pub mod user;
