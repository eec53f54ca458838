pub mod login;
pub mod me;
pub mod not_found;
pub mod register;
pub mod sessions;
