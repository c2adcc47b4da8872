use axum::extract::Json;
use chrono::Utc;

use crate::types::response;

#[utoipa::path(
    get,
    path = "/ping",
    responses((status = 200, description = "Service is up", body = response::Health)),
    tag = "health"
)]
pub(crate) async fn ping() -> Json<response::Health> {
    Json(response::Health {
        status: "ok".to_string(),
        time: Utc::now(),
    })
}
