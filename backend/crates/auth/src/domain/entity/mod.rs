//! Entities

pub mod password_reset;
pub mod user;

pub use password_reset::PasswordResetRequest;
pub use user::User;
