pub mod models;
pub mod pool;
pub mod schema;

pub use pool::{connect, health_check, PoolError};
