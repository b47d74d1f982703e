pub mod config;
pub mod counter;
pub mod directory;
pub mod error;
pub mod fetch;
pub mod user;

pub use config::Config;
pub use counter::Counter;
pub use directory::{LoadPhase, UserDirectory};
pub use error::{Result, UtentiError};
pub use fetch::{build_client, fetch_users, spawn_fetch, FetchOutcome, DEFAULT_ENDPOINT};
pub use user::{User, UserId};
