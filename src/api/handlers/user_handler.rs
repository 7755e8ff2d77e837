//! User handlers.

use axum::{extract::State, routing::get, Router};

use crate::api::extractors::{UserNumber, ValidatedJson};
use crate::api::AppState;
use crate::config::{DATA_KEY_USER, DATA_KEY_USERS, MESSAGE_LOOKUP_OK, USERS_PATH};
use crate::domain::{NewUser, UserPatch, UserResponse};
use crate::errors::AppResult;
use crate::types::{Created, NoContent, ResponseMessage};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route(
            "/:number",
            get(get_user).put(update_user).delete(delete_user),
        )
}

fn user_location(number: u32) -> String {
    format!("{}/{}", USERS_PATH, number)
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "Every stored user, in insertion order", body = ResponseMessage)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<ResponseMessage> {
    let users: Vec<UserResponse> = state
        .users
        .list_all()
        .await
        .into_iter()
        .map(UserResponse::from)
        .collect();

    ResponseMessage::ok(MESSAGE_LOOKUP_OK, DATA_KEY_USERS, users)
}

/// Get user by number
#[utoipa::path(
    get,
    path = "/users/{number}",
    tag = "Users",
    params(
        ("number" = u32, Path, description = "Store-assigned user number")
    ),
    responses(
        (status = 200, description = "User found", body = ResponseMessage),
        (status = 400, description = "Number is not an integer"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    UserNumber(number): UserNumber,
) -> AppResult<ResponseMessage> {
    let user = state.users.find_by_number(number).await?;
    ResponseMessage::ok(MESSAGE_LOOKUP_OK, DATA_KEY_USER, UserResponse::from(user))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = NewUser,
    responses(
        (status = 201, description = "User created; Location points at the new resource"),
        (status = 400, description = "Malformed or incomplete body")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewUser>,
) -> AppResult<Created> {
    let user = state.users.insert(payload).await?;
    Ok(Created::at(user_location(user.number)))
}

/// Replace id, password and name of a user
#[utoipa::path(
    put,
    path = "/users/{number}",
    tag = "Users",
    params(
        ("number" = u32, Path, description = "Store-assigned user number")
    ),
    request_body = UserPatch,
    responses(
        (status = 201, description = "User updated; Location points at the resource"),
        (status = 400, description = "Malformed or incomplete body"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    UserNumber(number): UserNumber,
    ValidatedJson(payload): ValidatedJson<UserPatch>,
) -> AppResult<Created> {
    let user = state.users.update(number, payload).await?;
    Ok(Created::at(user_location(user.number)))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{number}",
    tag = "Users",
    params(
        ("number" = u32, Path, description = "Store-assigned user number")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Number is not an integer"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    UserNumber(number): UserNumber,
) -> AppResult<NoContent> {
    state.users.delete(number).await?;
    Ok(NoContent)
}
