pub mod add;
pub mod budget;
pub mod catalog;
pub mod config;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod show;
pub mod summary;
