pub mod initialize;
pub mod log;
pub mod pool;
pub mod repository;
pub mod schema;
