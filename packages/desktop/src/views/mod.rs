mod login;
pub use login::{ForgotPassword, Login};

mod admin_layout;
pub use admin_layout::{AdminLayout, Dashboard, Profile};

mod not_found;
pub use not_found::NotFound;
