use axum::extract::{Json, Path, State};
use tracing::instrument;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::request::UpdateUserData;
use crate::types::response;

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = [response::User]),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
#[instrument(skip(state))]
pub(crate) async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<response::User>>, Error> {
    let users = state.user_controller.list().await?;

    Ok(Json(users.iter().map(|user| user.public()).collect()))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User", body = response::User),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "No user with that id"),
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
#[instrument(skip(state))]
pub(crate) async fn get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<response::User>, Error> {
    let user = state.user_controller.get(id).await?;

    Ok(Json(user.public()))
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User id")),
    request_body = UpdateUserData,
    responses(
        (status = 200, description = "User updated", body = response::Message),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "No user with that id"),
        (status = 409, description = "Username already taken"),
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
#[instrument(skip(state, data))]
pub(crate) async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateUserData>,
) -> Result<Json<response::Message>, Error> {
    state.user_controller.update(id, &data).await?;

    Ok(Json(response::Message {
        message: "User updated successfully".to_string(),
    }))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted", body = response::Message),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "No user with that id"),
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
#[instrument(skip(state))]
pub(crate) async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<response::Message>, Error> {
    state.user_controller.delete(id).await?;

    Ok(Json(response::Message {
        message: "User deleted successfully".to_string(),
    }))
}
