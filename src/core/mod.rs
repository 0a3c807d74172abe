//! Framework-free client logic: session, verification, entity editor

pub mod api;
#[cfg(feature = "ssr")]
pub mod config;
pub mod editor;
pub mod error;
pub mod forms;
mod http;
pub mod mock;
pub mod models;
#[cfg(feature = "ssr")]
pub mod proxy;
pub mod session;
pub mod store;
pub mod timer;
pub mod verification;

pub use api::{AuthClient, HttpClinicApi, VerificationClient};
pub use editor::{ColumnDescriptor, Draft, EntityForm, FieldDescriptor, InputKind, Record};
pub use error::ApiError;
pub use models::{
    Appointment, AuthStatus, Credentials, MedicalRecord, Notification, Owner, Pet, Role, User,
};
pub use session::{Access, AuthService, SessionPhase, SessionState, SessionStore};
pub use store::{Store, Subscription};
pub use timer::{CancellationToken, DropGuard, PlatformTimer, Timer};
pub use verification::{
    ResendOutcome, VerificationFlow, VerificationPhase, VerificationState,
};
