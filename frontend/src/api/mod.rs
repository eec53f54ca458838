mod auth;
pub mod client;
mod sessions;
mod teachers;
pub mod types;
mod users;

pub use client::*;
pub use types::*;
