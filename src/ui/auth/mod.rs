//! Authentication UI module
//!
//! Session context, sign-in form, route guard and the email verification
//! step.

mod context;
mod guard;
mod login_form;
mod user_menu;
mod verification;

pub use context::{AuthContext, provide_auth_context, use_auth_context};
pub use guard::RequireRole;
pub use login_form::LoginForm;
pub use user_menu::UserMenu;
pub use verification::EmailVerification;
