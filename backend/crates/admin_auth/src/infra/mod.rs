//! Infrastructure Layer
//!
//! Database, in-memory and environment implementations of the domain traits.

pub mod env;
pub mod memory;
pub mod postgres;

pub use env::EnvConfigProvider;
pub use memory::InMemorySessionStore;
pub use postgres::PgAdminUserRepository;
