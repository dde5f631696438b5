use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::auth::password::hash_password;
use crate::error::ApiError;
use crate::users::dto::{CreateUserRequest, DeleteResponse, UpdateUserRequest, UserResponse};
use crate::users::repo::User;

fn not_found(id: Uuid) -> ApiError {
    ApiError::NotFound(format!("User with id \"{id}\" not found"))
}

pub async fn list_all(db: &PgPool) -> Result<Vec<UserResponse>, ApiError> {
    let users = User::find_all(db).await?;
    Ok(users.into_iter().map(Into::into).collect())
}

pub async fn get_by_id(db: &PgPool, id: Uuid) -> Result<UserResponse, ApiError> {
    let user = User::find_by_id(db, id).await?.ok_or_else(|| not_found(id))?;
    Ok(user.into())
}

/// Administrative creation. Duplicate emails are caught by the unique index
/// rather than a lookup here.
pub async fn create(db: &PgPool, payload: CreateUserRequest) -> Result<UserResponse, ApiError> {
    let hash = hash_password(&payload.password)?;
    let user = User::create(db, &payload.name, &payload.email, &hash)
        .await
        .map_err(ApiError::from_user_write)?;
    info!(user_id = %user.id, email = %user.email, "user created");
    Ok(user.into())
}

pub async fn update(
    db: &PgPool,
    id: Uuid,
    payload: UpdateUserRequest,
) -> Result<UserResponse, ApiError> {
    let password_hash = match payload.password.as_deref() {
        Some(plain) => Some(hash_password(plain)?),
        None => None,
    };
    let user = User::update(
        db,
        id,
        payload.name.as_deref(),
        payload.email.as_deref(),
        password_hash.as_deref(),
    )
    .await
    .map_err(ApiError::from_user_write)?
    .ok_or_else(|| not_found(id))?;
    info!(user_id = %user.id, "user updated");
    Ok(user.into())
}

pub async fn remove(db: &PgPool, id: Uuid) -> Result<DeleteResponse, ApiError> {
    if !User::delete(db, id).await? {
        return Err(not_found(id));
    }
    info!(user_id = %id, "user deleted");
    Ok(DeleteResponse { deleted: true })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_carries_the_id() {
        let id = Uuid::new_v4();
        let err = not_found(id);
        match err {
            ApiError::NotFound(msg) => {
                assert!(msg.contains(&id.to_string()));
                assert!(msg.starts_with("User with id"));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}
