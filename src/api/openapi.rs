//! OpenAPI documentation configuration.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::auth_handler;
use crate::api::middleware::CurrentUser;
use crate::api::models::{Authentication, UserView};
use crate::services::AuthenticationRequest;

/// OpenAPI documentation for the session-auth service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "session-auth",
        version = "0.1.0",
        description = "Credential verification and JWT session token issuance",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(auth_handler::login, auth_handler::me),
    components(schemas(AuthenticationRequest, Authentication, UserView, CurrentUser)),
    modifiers(&SecurityAddon),
    tags((name = "Authentication", description = "Login and session tokens"))
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
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
                        .description(Some("Session token obtained from /auth/login"))
                        .build(),
                ),
            );
        }
    }
}
