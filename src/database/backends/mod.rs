//! Record store backends

pub mod memory;
pub mod file;
pub mod redis;
pub mod postgres;

pub use memory::MemoryStore;
pub use file::FileStore;
pub use self::redis::RedisStore;
pub use postgres::PostgresStore;
