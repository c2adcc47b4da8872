use axum::{
    Router,
    extract::{MatchedPath, Request},
    http::Method,
    middleware,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{self, CorsLayer},
    trace::TraceLayer,
};
use tracing::info_span;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::core::state::AppState;
use crate::routes::{auth, docs, ping, user};
use crate::utils;

pub(crate) fn routes(state: AppState) -> Router {
    // /users/...
    let user_router = Router::new()
        .route("/", get(user::list))
        .route(
            "/{id}",
            get(user::get).put(user::update).delete(user::delete),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            utils::auth::authorize,
        ));

    Router::new()
        .route("/", post(auth::login))
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
        .route(
            "/logout",
            post(auth::logout).layer(middleware::from_fn_with_state(
                state.clone(),
                utils::auth::authorize,
            )),
        )
        .route("/ping", get(ping::ping))
        .nest("/users", user_router)
        .merge(SwaggerUi::new("/api-docs").url("/api-docs.json", docs::ApiDoc::openapi()))
        .with_state(state)
        .route_layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                        let matched_path = request
                            .extensions()
                            .get::<MatchedPath>()
                            .map(MatchedPath::as_str);

                        info_span!(
                            "request",
                            method = ?request.method(),
                            matched_path,
                        )
                    }),
                )
                .layer(
                    CorsLayer::new()
                        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                        .allow_origin(cors::Any),
                ),
        )
}
