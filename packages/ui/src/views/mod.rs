mod login;
pub use login::LoginView;

mod password_reset;
pub use password_reset::PasswordResetView;

mod admin_dashboard;
pub use admin_dashboard::{AdminDashboardView, Mutation};

mod user_modals;

mod user_profile;
pub use user_profile::UserProfileView;
