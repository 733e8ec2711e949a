pub mod change_password;
pub mod config;
pub mod forgot_password;
pub mod login;
pub mod register;

pub use change_password::{ChangePasswordInput, ChangePasswordUseCase};
pub use config::AuthConfig;
pub use forgot_password::{ForgotPasswordInput, ForgotPasswordUseCase, RESET_INSTRUCTIONS_MESSAGE};
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use register::{RegisterInput, RegisterUseCase};
