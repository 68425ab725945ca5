pub mod add;
pub mod budget;
pub mod calculator;
pub mod catalog;
pub mod config;
pub mod counts;
pub mod del;
pub mod log;
pub mod report;
