pub mod health;
pub mod meta;
pub mod metrics;
pub mod users;
