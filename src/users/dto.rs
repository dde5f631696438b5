use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::users::repo::User;

/// Request body for administrative user creation.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request body for user update. All fields optional; only supplied ones
/// are applied.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Response for a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

/// Public view of a user returned to clients. The password hash stays inside
/// the repository and auth layers.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        let now = OffsetDateTime::now_utc();
        User {
            id: Uuid::new_v4(),
            name: "Bob Smith".into(),
            email: "bob@example.com".into(),
            password_hash: "$argon2id$v=19$hash".into(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn user_response_uses_camel_case_and_drops_the_hash() {
        let user = sample_user();
        let json = serde_json::to_string(&UserResponse::from(user)).unwrap();
        assert!(json.contains("createdAt"));
        assert!(json.contains("updatedAt"));
        assert!(json.contains("bob@example.com"));
        assert!(!json.contains("password"));
        assert!(!json.contains("argon2id"));
    }

    #[test]
    fn user_response_preserves_identity_fields() {
        let user = sample_user();
        let id = user.id;
        let created_at = user.created_at;
        let resp = UserResponse::from(user);
        assert_eq!(resp.id, id);
        assert_eq!(resp.name, "Bob Smith");
        assert_eq!(resp.created_at, created_at);
        assert_eq!(resp.updated_at, created_at);
    }

    #[test]
    fn update_request_fields_default_to_none() {
        let req: UpdateUserRequest = serde_json::from_str(r#"{"name": "X"}"#).unwrap();
        assert_eq!(req.name.as_deref(), Some("X"));
        assert!(req.email.is_none());
        assert!(req.password.is_none());
    }
}
