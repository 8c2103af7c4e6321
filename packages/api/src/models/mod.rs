pub mod auth;
pub mod user;

pub use auth::{
    validate_new_password, ApiMessage, ChangePasswordRequest, ForgotPasswordRequest,
    LoginRequest, LoginResponse, RegisterRequest, ResetPasswordRequest, SetRoleRequest,
    TokenValidation, ValidateTokenRequest, MIN_PASSWORD_LEN,
};
pub use user::{Profile, Role, User, UserFilter, UserId, UserUpdate};
