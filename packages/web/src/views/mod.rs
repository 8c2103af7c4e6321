mod login;
pub use login::Login;

mod forgot_password;
pub use forgot_password::ForgotPassword;

mod admin_layout;
pub use admin_layout::AdminLayout;

mod dashboard;
pub use dashboard::Dashboard;

mod profile;
pub use profile::Profile;

mod not_found;
pub use not_found::NotFound;
