//! Use-case layer.
//!
//! Use cases are the only door between controllers and the repository. Read
//! paths are pure stream composition over the repository's observable views;
//! write paths validate before delegating. Nothing here holds state of its
//! own, so use cases are cheap to clone and share.

mod add_user;
mod get_users;
pub mod streams;

pub use add_user::AddUserUseCase;
pub use get_users::GetUsersUseCase;
