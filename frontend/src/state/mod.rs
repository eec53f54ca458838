pub mod auth;
pub mod notice;
pub mod session;
