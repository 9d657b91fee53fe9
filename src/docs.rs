use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::users::controller::ErrorResponse;
use crate::modules::users::model::{User, UserPayload};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::get_user,
        crate::modules::users::controller::create_user,
        crate::modules::users::controller::update_user,
        crate::modules::users::controller::delete_user,
    ),
    components(schemas(User, UserPayload, ErrorResponse)),
    modifiers(&SecurityAddon),
    tags(
        (name = "Users", description = "In-memory user management")
    ),
    info(
        title = "User Management API",
        version = "0.1.0",
        description = "CRUD over an in-memory user list. Every route outside the documentation requires a non-blank Authorization header.",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            )
        }
    }
}
