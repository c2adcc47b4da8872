use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::types::{request, response};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::auth::login,
        crate::routes::auth::register,
        crate::routes::auth::logout,
        crate::routes::user::list,
        crate::routes::user::get,
        crate::routes::user::update,
        crate::routes::user::delete,
        crate::routes::ping::ping,
    ),
    components(schemas(
        request::LoginData,
        request::RegisterData,
        request::UpdateUserData,
        response::User,
        response::Login,
        response::Message,
        response::Health,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login and token handling"),
        (name = "users", description = "User management"),
        (name = "health", description = "Service health"),
    )
)]
pub(crate) struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
