use serde::{Deserialize, Serialize};

use crate::users::dto::UserResponse;

/// Request body for user registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response returned after register or login.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub user: UserResponse,
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::repo::User;
    use time::OffsetDateTime;
    use uuid::Uuid;

    #[test]
    fn auth_response_serializes_access_token_in_camel_case() {
        let now = OffsetDateTime::now_utc();
        let user = User {
            id: Uuid::new_v4(),
            name: "Alice Johnson".into(),
            email: "alice@example.com".into(),
            password_hash: "$argon2id$v=19$hash".into(),
            created_at: now,
            updated_at: now,
        };
        let resp = AuthResponse {
            user: user.into(),
            access_token: "header.payload.sig".into(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("accessToken"));
        assert!(json.contains("header.payload.sig"));
        assert!(!json.contains("access_token"));
        assert!(!json.contains("argon2id"));
    }
}
