use axum::extract::{Extension, Json, State};
use axum::http::StatusCode;
use tracing::instrument;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::request::{LoginData, RegisterData};
use crate::types::response;
use crate::utils::auth::Claims;

#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginData,
    responses(
        (status = 200, description = "Login successful", body = response::Login),
        (status = 400, description = "Missing username or password"),
        (status = 401, description = "Unknown user or wrong password"),
    ),
    tag = "auth"
)]
#[instrument(skip(state, data))]
pub(crate) async fn login(
    State(state): State<AppState>,
    Json(data): Json<LoginData>,
) -> Result<Json<response::Login>, Error> {
    let (username, password) = data.credentials()?;

    let (user, token) = state.user_controller.login(username, password).await?;

    Ok(Json(response::Login {
        message: "Login successful".to_string(),
        token,
        user: user.public(),
    }))
}

#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterData,
    responses(
        (status = 201, description = "User created", body = response::User),
        (status = 400, description = "Missing username or password"),
        (status = 409, description = "Username already taken"),
    ),
    tag = "auth"
)]
#[instrument(skip(state, data))]
pub(crate) async fn register(
    State(state): State<AppState>,
    Json(data): Json<RegisterData>,
) -> Result<(StatusCode, Json<response::User>), Error> {
    let user = state.user_controller.register(&data).await?;

    Ok((StatusCode::CREATED, Json(user.public())))
}

// Tokens are stateless, so there is nothing to revoke; the endpoint exists
// to acknowledge the client discarding its token.
#[utoipa::path(
    post,
    path = "/logout",
    responses(
        (status = 200, description = "Logout acknowledged", body = response::Message),
        (status = 401, description = "Missing or invalid token"),
    ),
    security(("bearer_auth" = [])),
    tag = "auth"
)]
#[instrument(skip_all)]
pub(crate) async fn logout(Extension(claims): Extension<Claims>) -> Json<response::Message> {
    tracing::debug!(user_id = claims.id, "logout");

    Json(response::Message {
        message: "Logged out successfully".to_string(),
    })
}
