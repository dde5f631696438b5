use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{instrument, warn};
use uuid::Uuid;

use crate::auth::extractors::AuthUser;
use crate::auth::services::is_valid_email;
use crate::error::ApiError;
use crate::state::AppState;
use crate::users::dto::{CreateUserRequest, DeleteResponse, UpdateUserRequest, UserResponse};
use crate::users::services;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(remove_user),
        )
}

#[instrument(skip(state, _user))]
pub async fn list_users(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = services::list_all(&state.db).await?;
    Ok(Json(users))
}

#[instrument(skip(state, _user))]
pub async fn get_user(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = services::get_by_id(&state.db, id).await?;
    Ok(Json(user))
}

#[instrument(skip(state, _user, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Json(mut payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    payload.email = payload.email.trim().to_string();

    if payload.name.trim().is_empty() {
        warn!("empty name");
        return Err(ApiError::BadRequest("Name must not be empty".into()));
    }
    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(ApiError::BadRequest("Invalid email".into()));
    }
    if payload.password.is_empty() {
        warn!("empty password");
        return Err(ApiError::BadRequest("Password must not be empty".into()));
    }

    let user = services::create(&state.db, payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

#[instrument(skip(state, _user, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Path(id): Path<Uuid>,
    Json(mut payload): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    if let Some(email) = payload.email.as_deref() {
        let trimmed = email.trim().to_string();
        if !is_valid_email(&trimmed) {
            warn!(email = %trimmed, "invalid email");
            return Err(ApiError::BadRequest("Invalid email".into()));
        }
        payload.email = Some(trimmed);
    }
    if let Some(name) = payload.name.as_deref() {
        if name.trim().is_empty() {
            warn!("empty name");
            return Err(ApiError::BadRequest("Name must not be empty".into()));
        }
    }
    if let Some(password) = payload.password.as_deref() {
        if password.is_empty() {
            warn!("empty password");
            return Err(ApiError::BadRequest("Password must not be empty".into()));
        }
    }

    let user = services::update(&state.db, id, payload).await?;
    Ok(Json(user))
}

#[instrument(skip(state, _user))]
pub async fn remove_user(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let deleted = services::remove(&state.db, id).await?;
    Ok(Json(deleted))
}
