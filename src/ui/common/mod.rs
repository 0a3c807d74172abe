//! Common reusable UI components
//!
//! Shared building blocks for the clinic pages: buttons, form fields,
//! messages, tabs and spinners.

pub mod button;
pub mod form;
pub mod message;
pub mod spinner;
pub mod tabs;

pub use button::{Button, ButtonVariant};
pub use form::{FormField, SelectField, TextAreaField};
pub use message::{ErrorMessage, SuccessMessage};
pub use spinner::LoadingSpinner;
pub use tabs::{TabItem, Tabs};
