//! Clinic domain types shared by the client and the wire format.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::editor::Record;

/// Role of an authenticated user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[display("admin")]
    Admin,
    #[display("staff")]
    Staff,
    #[display("customer")]
    Customer,
    #[display("veterinary")]
    Veterinary,
}

impl Role {
    /// Roles that may open the back-office dashboard
    pub const BACK_OFFICE: &'static [Role] = &[Role::Admin, Role::Staff, Role::Veterinary];

    /// Roles that may open the customer portal
    pub const PORTAL: &'static [Role] = &[Role::Customer];

    /// Landing route after login
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Customer => "/portal",
            Role::Admin | Role::Staff | Role::Veterinary => "/dashboard",
        }
    }

    /// Human readable role name
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Staff => "Staff",
            Role::Customer => "Customer",
            Role::Veterinary => "Veterinarian",
        }
    }
}

/// User record returned by `POST /api/auth/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: Role,
    #[serde(default, alias = "isVerified")]
    pub verified: bool,
}

impl User {
    /// Route to open right after login
    ///
    /// Unverified users with a known address go through email verification
    /// first; everyone else lands on their role's home.
    pub fn landing_path(&self) -> String {
        match &self.email {
            Some(email) if !self.verified => {
                format!("/verify-email?email={}", urlencoding::encode(email))
            }
            _ => self.role.home_path().to_string(),
        }
    }
}

/// Login request body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Response of `GET /api/auth/status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthStatus {
    pub is_authenticated: bool,
}

/// Notification shown in the portal and dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub read: bool,
}

/// Pet owner (clinic customer)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl Owner {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Patient of the clinic
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: String,
    pub name: String,
    pub species: String,
    pub breed: String,
    pub birth_date: String,
    pub owner_name: String,
}

/// Booked visit
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub pet_name: String,
    pub date: String,
    pub time: String,
    pub reason: String,
    pub status: String,
}

/// Entry of a pet's medical history
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    pub id: String,
    pub pet_name: String,
    pub date: String,
    pub diagnosis: String,
    pub treatment: String,
    pub veterinarian: String,
}

macro_rules! impl_record {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Record for $ty {
                fn key(&self) -> &str {
                    &self.id
                }

                fn set_key(&mut self, key: String) {
                    self.id = key;
                }
            }
        )*
    };
}

impl_record!(Owner, Pet, Appointment, MedicalRecord);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserializes_role_and_verified_alias() {
        let json = r#"{"id":"1","username":"admin","role":"admin","isVerified":true}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, Role::Admin);
        assert!(user.verified);
        assert!(user.email.is_none());
    }

    #[test]
    fn test_user_verified_defaults_to_false() {
        let json = r#"{"id":"7","username":"kim","email":"kim@example.com","role":"customer"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(!user.verified);
        assert_eq!(user.email.as_deref(), Some("kim@example.com"));
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let json = r#"{"id":"1","username":"x","role":"janitor"}"#;
        assert!(serde_json::from_str::<User>(json).is_err());
    }

    #[test]
    fn test_landing_path_routes_unverified_users_to_verification() {
        let mut user = User {
            id: "7".into(),
            username: "kim".into(),
            email: Some("kim+cats@example.com".into()),
            role: Role::Customer,
            verified: false,
        };
        assert_eq!(
            user.landing_path(),
            "/verify-email?email=kim%2Bcats%40example.com"
        );

        user.verified = true;
        assert_eq!(user.landing_path(), "/portal");

        user.verified = false;
        user.email = None;
        assert_eq!(user.landing_path(), "/portal");
    }

    #[test]
    fn test_role_home_paths() {
        assert_eq!(Role::Customer.home_path(), "/portal");
        assert_eq!(Role::Admin.home_path(), "/dashboard");
        assert_eq!(Role::Staff.home_path(), "/dashboard");
        assert_eq!(Role::Veterinary.home_path(), "/dashboard");
    }

    #[test]
    fn test_role_display_matches_wire_name() {
        assert_eq!(Role::Veterinary.to_string(), "veterinary");
        assert_eq!(
            serde_json::to_string(&Role::Staff).unwrap(),
            "\"staff\"".to_string()
        );
    }

    #[test]
    fn test_auth_status_camel_case() {
        let status: AuthStatus = serde_json::from_str(r#"{"isAuthenticated":true}"#).unwrap();
        assert!(status.is_authenticated);
    }

    #[test]
    fn test_credentials_wire_shape() {
        let body = serde_json::to_value(Credentials::new("admin", "x")).unwrap();
        assert_eq!(body, serde_json::json!({"username": "admin", "password": "x"}));
    }

    #[test]
    fn test_owner_serializes_camel_case() {
        let owner = Owner {
            id: "o1".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Ruiz".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&owner).unwrap();
        assert_eq!(value["firstName"], "Ana");
        assert_eq!(owner.full_name(), "Ana Ruiz");
    }

    #[test]
    fn test_record_key_roundtrip() {
        let mut pet = Pet::default();
        assert_eq!(pet.key(), "");
        pet.set_key("p-1".to_string());
        assert_eq!(pet.key(), "p-1");
    }
}
