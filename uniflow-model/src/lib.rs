//! Domain model for Uniflow.
//!
//! Pure data and validation rules. This crate has no async machinery and no
//! knowledge of repositories or screens, so every layer above it can depend
//! on it without cycles.

mod user;

pub use user::User;
