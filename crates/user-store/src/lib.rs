pub mod error;
pub mod memory;
pub mod postgres;
pub mod store;
pub mod user;

pub use common::UserId;
pub use error::{Result, UserStoreError};
pub use memory::InMemoryUserRepository;
pub use postgres::PostgresUserRepository;
pub use store::{DEFAULT_LAST_JOINED_LIMIT, MAX_LAST_JOINED_LIMIT, UserRepository};
pub use user::{NewUser, User};
