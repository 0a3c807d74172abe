//! Application pages module
//!
//! - Landing page (home)
//! - Login and email verification
//! - Customer portal
//! - Back-office dashboard

mod dashboard;
mod landing;
mod login;
mod not_found;
mod portal;
mod verify_email;

pub use dashboard::DashboardPage;
pub use landing::LandingPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use portal::PortalPage;
pub use verify_email::VerifyEmailPage;
